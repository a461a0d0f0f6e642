use clap::{ArgAction, Parser, Subcommand, ValueEnum};

pub use crate::modules::avatar::args::*;
pub use crate::modules::identifier::args::*;

#[derive(Parser)]
#[command(name = "acctkit")]
#[command(about = "Account id and avatar extraction helpers")]
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, env = "ACCTKIT_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Extract the leading numeric id from composite identifiers")]
    Id(IdArgs),
    #[command(about = "Select the display avatar URL from profile records")]
    Avatar(AvatarArgs),
    #[command(about = "Print the JSON schema of an avatar record")]
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
