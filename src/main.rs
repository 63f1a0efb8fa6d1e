//! next-version CLI - decide the next semantic version from conventional commits.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_version::cli::Cli;
use next_version::output;

fn main() {
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        output::display_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
