use std::io::{BufRead, Write};

use crate::cli_args::{Command, OutputFormat};
use crate::modules::avatar::handle_avatar;
use crate::modules::identifier::handle_id;
use crate::modules::system::handle_schema_command;

pub(crate) fn handle_command(
    command: Command,
    format: OutputFormat,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Id(args) => handle_id(args, format, stdin, out)?,
        Command::Avatar(args) => handle_avatar(args, format, stdin, out)?,
        Command::Schema => handle_schema_command(out)?,
    }
    out.flush()?;
    Ok(())
}
