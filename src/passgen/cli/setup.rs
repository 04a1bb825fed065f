use clap::Parser;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    bin_name = "passgen",
    version = get_version(),
    allow_negative_numbers = true
)]
#[command(about = "Generate a random password and copy it to the clipboard", long_about = None)]
pub struct Cli {
    /// How long the password should be
    pub length: i64,

    /// Do not store the output in the OS clipboard
    #[arg(short = 'n', long = "nocp")]
    pub no_copy: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
