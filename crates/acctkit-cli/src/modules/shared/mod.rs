mod input;
mod output;

pub(crate) use input::{collect_inputs, parse_json_arg};
pub(crate) use output::write_json_line;
