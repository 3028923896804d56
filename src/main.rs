use clap::Parser;
use tracing_subscriber::EnvFilter;

use outcome::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = outcome::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
