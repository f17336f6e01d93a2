//! Restore command

use clap::Args;
use fiscus_vault::transfer::FileSource;
use fiscus_vault::{restore_backup, RestoreOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Snapshot file to validate and load
    #[arg(long)]
    pub file: PathBuf,

    /// Write the recovered sections to this path instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Deadline for reading the snapshot in seconds
    #[arg(long, default_value_t = 30)]
    pub read_timeout_secs: u64,
}

pub async fn execute(args: RestoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = FileSource::new(&args.file);
    let options = RestoreOptions {
        read_timeout: Duration::from_secs(args.read_timeout_secs),
        cancel: super::cancel_on_interrupt(),
    };

    let sections = restore_backup(&source, &options).await?;
    let rendered = serde_json::to_string_pretty(&sections)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Snapshot restored:");
            println!(
                "  sections: {}",
                sections.keys().cloned().collect::<Vec<_>>().join(", ")
            );
            println!("  written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
