use anyhow::Result;
use clap::Parser;

use miku_theme::cli::{Cli, CliHandler, Commands, ShowcaseArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing for logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    // Bare invocation runs the stage showcase
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Showcase(ShowcaseArgs::default()));

    let handler = CliHandler::new()?;
    handler.handle_command(command).await
}
