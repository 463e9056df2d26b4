use clap::Parser;
use tracing::{info, Level};

use vlogkit::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting vlogkit v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}
