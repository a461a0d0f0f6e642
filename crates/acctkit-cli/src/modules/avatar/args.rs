use clap::Args;

#[derive(Args)]
pub struct AvatarArgs {
    #[arg(
        required = true,
        help = "Profile records as JSON (e.g. '{\"avatarUrl\":\"https://...\"}'), or - to read JSON lines from stdin"
    )]
    pub records: Vec<String>,
}
