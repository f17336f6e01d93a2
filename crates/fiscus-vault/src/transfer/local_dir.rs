//! Local transfer into a target directory.

use crate::errors::{backup_failure, Result};
use crate::ports::LocalTransfer;
use async_trait::async_trait;
use std::path::PathBuf;

/// `LocalTransfer` that saves snapshots into a directory on disk.
///
/// The directory is created on first delivery. An existing file under the
/// same name is overwritten; same-day filename collisions are the
/// destination's problem to resolve, not this sink's.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LocalTransfer for DirectorySink {
    async fn deliver(&self, bytes: &[u8], filename: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| backup_failure("local_transfer", e))?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| backup_failure("local_transfer", e))?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = bytes.len(),
            "Snapshot delivered to local destination"
        );
        Ok(())
    }
}
