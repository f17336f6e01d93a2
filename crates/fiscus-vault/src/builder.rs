//! Snapshot builder: seal state sections and hand them to the transfer
//! collaborators.
//!
//! The builder is stateless: every call constructs a fresh envelope, so two
//! calls with identical payloads produce independent envelopes under distinct
//! timestamps. Retry on failure is a caller concern.

use crate::envelope::{snapshot_filename, PayloadSections, SnapshotEnvelope};
use crate::errors::{Result, VaultError};
use crate::ports::{bounded, LocalTransfer, RemoteTransfer};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Knobs bounding the builder's two suspension points.
#[derive(Debug, Clone)]
pub struct BackupOptions {
    /// Deadline applied independently to the local delivery and the remote
    /// upload
    pub transfer_timeout: Duration,
    /// Cancellation token observed at both suspension points
    pub cancel: CancellationToken,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            transfer_timeout: Duration::from_secs(30),
            cancel: CancellationToken::new(),
        }
    }
}

/// Confirmation returned to the caller after a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupReceipt {
    /// Deterministic filename the snapshot was delivered under
    pub filename: String,
    /// Envelope timestamp (RFC3339), the snapshot's only identity
    pub timestamp: String,
}

/// Export the given state sections as a signed snapshot envelope.
///
/// Seals a fresh envelope with the current timestamp and the fixed
/// version/signature constants, serializes it to canonical JSON, delivers the
/// bytes to the local transfer collaborator under the deterministic filename,
/// then uploads the same bytes to the remote transfer collaborator and awaits
/// completion. Exactly one local delivery and one remote upload occur per
/// call.
///
/// ## Errors
///
/// - `VaultError::BackupFailed`: empty payload, serialization error, or
///   transfer-collaborator failure
/// - `VaultError::TransferTimeout`: a transfer exceeded
///   `options.transfer_timeout`
/// - `VaultError::Cancelled`: `options.cancel` fired while awaiting a
///   transfer
pub async fn create_backup(
    payload: PayloadSections,
    local: &dyn LocalTransfer,
    remote: &dyn RemoteTransfer,
    options: &BackupOptions,
) -> Result<BackupReceipt> {
    if payload.is_empty() {
        return Err(VaultError::BackupFailed {
            reason: "refusing to export an empty snapshot payload".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let envelope = SnapshotEnvelope::seal(payload, now);
    let bytes = envelope.to_canonical_json()?;
    let filename = snapshot_filename(now);

    bounded(
        local.deliver(bytes.as_bytes(), &filename),
        "local_transfer",
        options.transfer_timeout,
        &options.cancel,
    )
    .await?;

    bounded(
        remote.upload(bytes.as_bytes(), &filename),
        "remote_transfer",
        options.transfer_timeout,
        &options.cancel,
    )
    .await?;

    tracing::info!(
        filename = %filename,
        size_bytes = bytes.len(),
        sections = envelope.payload.len(),
        "Snapshot exported"
    );

    Ok(BackupReceipt {
        filename,
        timestamp: envelope.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::memory::{MemoryRemote, MemorySink};

    #[tokio::test]
    async fn test_empty_payload_refused_before_any_transfer() {
        let local = MemorySink::default();
        let remote = MemoryRemote::default();

        let err = create_backup(
            PayloadSections::new(),
            &local,
            &remote,
            &BackupOptions::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code(), "ERR_BACKUP_FAILED");
        assert_eq!(local.delivery_count(), 0);
        assert_eq!(remote.upload_count(), 0);
    }
}
