pub(crate) mod avatar;
pub(crate) mod identifier;
pub(crate) mod shared;
pub(crate) mod system;
