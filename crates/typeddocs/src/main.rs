//! Updates the demo page in the `docs/` directory.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod publish;

#[derive(Parser)]
#[command(name = "typeddocs")]
#[command(about = "Copy the typed-language demo page and its bundles into docs/")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    publish::run()
}
