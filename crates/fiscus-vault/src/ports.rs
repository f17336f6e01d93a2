//! Transfer ports: the narrow injected interfaces the core depends on.
//!
//! The builder and validator never touch a platform API directly. They talk
//! to these traits, so the shipped filesystem and simulated-remote adapters
//! can be swapped for a real network client or an in-memory test double
//! without touching the core logic.

use crate::errors::{Result, VaultError};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Makes serialized snapshot bytes available to the user as a saved file.
#[async_trait]
pub trait LocalTransfer: Send + Sync {
    /// Deliver `bytes` under `filename` to the local destination.
    ///
    /// ## Errors
    ///
    /// Implementations report failures as `VaultError::BackupFailed`.
    async fn deliver(&self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// Uploads serialized snapshot bytes to an offsite store.
#[async_trait]
pub trait RemoteTransfer: Send + Sync {
    /// Upload `bytes` under `filename` and await completion.
    ///
    /// ## Errors
    ///
    /// Implementations report failures as `VaultError::BackupFailed`.
    async fn upload(&self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// Yields the full textual content of a user-supplied snapshot source.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the source to completion.
    ///
    /// ## Errors
    ///
    /// Underlying read failures surface as `VaultError::ReadInterrupted`,
    /// carried unchanged to the restore caller.
    async fn read_all(&self) -> Result<String>;
}

/// Bound a collaborator call with a deadline and a cancellation token.
///
/// Every suspension point in the builder and validator goes through here:
/// a stalled transfer or read must never block its operation indefinitely.
/// Cancellation takes priority over completion when both are ready.
pub(crate) async fn bounded<T, F>(
    fut: F,
    op: &str,
    deadline: Duration,
    cancel: &CancellationToken,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(VaultError::Cancelled { op: op.to_string() }),
        outcome = tokio::time::timeout(deadline, fut) => match outcome {
            Ok(result) => result,
            Err(_) => Err(VaultError::TransferTimeout {
                op: op.to_string(),
                seconds: deadline.as_secs(),
            }),
        },
    }
}
