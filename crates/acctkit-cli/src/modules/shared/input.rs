use std::io::BufRead;

use anyhow::Context;
use serde_json::Value;

const STDIN_MARKER: &str = "-";

/// Returns the positional values, or the non-blank lines of `stdin` when the
/// only value is `-`.
pub(crate) fn collect_inputs(
    values: Vec<String>,
    stdin: &mut dyn BufRead,
) -> anyhow::Result<Vec<String>> {
    if !matches!(values.as_slice(), [only] if only == STDIN_MARKER) {
        return Ok(values);
    }
    let mut lines = Vec::new();
    for line in stdin.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    tracing::debug!(count = lines.len(), "read inputs from stdin");
    Ok(lines)
}

pub(crate) fn parse_json_arg(text: &str) -> anyhow::Result<Value> {
    acctkit_core::parse_json_input(text).with_context(|| format!("invalid JSON value: {text}"))
}
