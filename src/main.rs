use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "htmlquest")]
#[command(about = "Repair broken HTML snippets and earn badges - a terminal quiz game")]
#[command(version)]
struct Cli {
    /// Path to a JSON mission pack (defaults to the built-in missions)
    #[arg(short, long, global = true)]
    pack: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through the missions interactively
    Play,

    /// List the missions in the catalog without starting a session
    Missions {
        /// Also show the canonical accepted answer for each mission
        #[arg(long)]
        answers: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Missions { answers }) => {
            cli::missions::missions_command(cli.pack.as_deref(), answers)?;
        }
        Some(Commands::Play) | None => {
            // Default: start a session
            cli::play::play_command(cli.pack.as_deref()).await?;
        }
    }

    Ok(())
}
