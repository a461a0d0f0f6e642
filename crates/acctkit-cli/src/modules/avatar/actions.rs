use std::io::{BufRead, Write};

use acctkit_core::{select_avatar_url, AvatarCandidates};
use serde_json::json;

use super::args::AvatarArgs;
use crate::cli_args::OutputFormat;
use crate::modules::shared::{collect_inputs, parse_json_arg, write_json_line};

pub(crate) fn handle_avatar(
    args: AvatarArgs,
    format: OutputFormat,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let records = collect_inputs(args.records, stdin)?;
    tracing::info!(count = records.len(), "selecting avatar urls");

    for raw in records {
        let record = AvatarCandidates::from_value(&parse_json_arg(&raw)?);
        let url = select_avatar_url(Some(&record));
        tracing::debug!(found = url.is_some(), "avatar url selected");
        match format {
            OutputFormat::Text => writeln!(out, "{}", url.as_deref().unwrap_or_default())?,
            OutputFormat::Json => write_json_line(out, &json!({ "avatar_url": url }))?,
        }
    }
    Ok(())
}
