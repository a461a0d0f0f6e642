use std::io::{BufRead, Write};

use acctkit_core::{extract_numeric_leading_id, RawInput};
use serde_json::{json, Value};

use super::args::IdArgs;
use crate::cli_args::OutputFormat;
use crate::modules::shared::{collect_inputs, parse_json_arg, write_json_line};

pub(crate) fn handle_id(
    args: IdArgs,
    format: OutputFormat,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let values = collect_inputs(args.values, stdin)?;
    tracing::info!(count = values.len(), json = args.json, "extracting numeric ids");

    for value in values {
        let input = if args.json {
            parse_json_arg(&value)?
        } else {
            Value::String(value)
        };
        let id = extract_numeric_leading_id(&RawInput::from(&input));
        tracing::debug!(found = !id.is_empty(), "numeric id extracted");
        match format {
            OutputFormat::Text => writeln!(out, "{id}")?,
            OutputFormat::Json => write_json_line(out, &json!({ "input": input, "id": id }))?,
        }
    }
    Ok(())
}
