#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod avatar;
pub mod constants;
pub mod error;
pub mod identifier;
pub mod input;

pub use crate::avatar::*;
pub use crate::constants::*;
pub use crate::error::*;
pub use crate::identifier::*;
pub use crate::input::*;
