use clap::Args;

#[derive(Args)]
pub struct IdArgs {
    #[arg(
        required = true,
        help = "Composite identifiers (e.g. 12345/media/abc), or - to read lines from stdin; pass values starting with - after --"
    )]
    pub values: Vec<String>,
    #[arg(long, help = "Parse each value as a JSON document instead of a plain string")]
    pub json: bool,
}
