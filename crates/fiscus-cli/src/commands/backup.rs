//! Backup command

use clap::Args;
use fiscus_vault::transfer::{DirectorySink, SimulatedRemote};
use fiscus_vault::{create_backup, BackupOptions, PayloadSections};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// JSON file holding the named state sections to export
    #[arg(long)]
    pub state: PathBuf,

    /// Directory the snapshot file is saved into
    #[arg(long, default_value = ".fiscus/backups")]
    pub out_dir: PathBuf,

    /// Simulated offsite upload latency in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub remote_latency_ms: u64,

    /// Deadline for each transfer leg in seconds
    #[arg(long, default_value_t = 30)]
    pub transfer_timeout_secs: u64,
}

pub async fn execute(args: BackupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&args.state)?;
    let sections: PayloadSections = serde_json::from_str(&raw)?;

    let local = DirectorySink::new(&args.out_dir);
    let remote = SimulatedRemote::new(Duration::from_millis(args.remote_latency_ms));
    let options = BackupOptions {
        transfer_timeout: Duration::from_secs(args.transfer_timeout_secs),
        cancel: super::cancel_on_interrupt(),
    };

    let receipt = create_backup(sections, &local, &remote, &options).await?;

    println!("Snapshot exported:");
    println!("  filename: {}", receipt.filename);
    println!("  timestamp: {}", receipt.timestamp);
    println!("  destination: {}", args.out_dir.display());

    Ok(())
}
