//! Fiscus CLI
//!
//! Command-line interface for the vault snapshot subsystem

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fiscus")]
#[command(about = "Fiscus - vault snapshot export/import", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export application state into a signed vault snapshot
    Backup(commands::backup::BackupArgs),
    /// Validate a vault snapshot and recover its state sections
    Restore(commands::restore::RestoreArgs),
}

#[tokio::main]
async fn main() {
    fiscus_vault::logging::init(fiscus_vault::logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Backup(args) => commands::backup::execute(args).await,
        Commands::Restore(args) => commands::restore::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
