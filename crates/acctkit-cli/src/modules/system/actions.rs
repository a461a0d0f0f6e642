use std::io::Write;

use acctkit_core::AvatarCandidates;

pub(crate) fn handle_schema_command(out: &mut dyn Write) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(AvatarCandidates);
    serde_json::to_writer_pretty(&mut *out, &schema)?;
    writeln!(out)?;
    Ok(())
}
