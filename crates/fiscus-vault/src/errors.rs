//! Error taxonomy for vault snapshot operations
//!
//! Every failure is terminal for the current call and surfaces to the caller
//! as a distinct, user-displayable error. Nothing is retried inside the core
//! and no partial state mutation occurs on failure.

use thiserror::Error;

/// Result type alias using VaultError
pub type Result<T> = std::result::Result<T, VaultError>;

/// Failures raised by the snapshot builder, validator and their collaborators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    /// Serialization error or transfer-collaborator failure during export
    #[error("Backup failed: {reason}")]
    BackupFailed { reason: String },

    /// Restore input was zero-length
    #[error("Snapshot content is empty")]
    EmptyContent,

    /// Restore input is not parseable as a snapshot envelope
    #[error("Malformed snapshot envelope: {reason}")]
    MalformedEnvelope { reason: String },

    /// Envelope signature does not match the authenticity constant
    #[error("Snapshot signature is not recognised")]
    InvalidSignature,

    /// Envelope parsed and verified but carries no payload sections
    #[error("Snapshot payload is missing or empty")]
    MissingPayload,

    /// The content-reader collaborator failed; its reason is carried unchanged
    #[error("Snapshot read interrupted: {reason}")]
    ReadInterrupted { reason: String },

    /// A transfer or read suspension point exceeded its deadline
    #[error("Operation '{op}' timed out after {seconds}s")]
    TransferTimeout { op: String, seconds: u64 },

    /// The cancellation token fired while awaiting a suspension point
    #[error("Operation '{op}' was cancelled")]
    Cancelled { op: String },
}

impl VaultError {
    /// Get the stable error code for this failure
    ///
    /// Codes are part of the external contract: callers may match on them for
    /// programmatic handling and user-facing message selection.
    pub fn code(&self) -> &'static str {
        match self {
            VaultError::BackupFailed { .. } => "ERR_BACKUP_FAILED",
            VaultError::EmptyContent => "ERR_EMPTY_CONTENT",
            VaultError::MalformedEnvelope { .. } => "ERR_MALFORMED_ENVELOPE",
            VaultError::InvalidSignature => "ERR_INVALID_SIGNATURE",
            VaultError::MissingPayload => "ERR_MISSING_PAYLOAD",
            VaultError::ReadInterrupted { .. } => "ERR_READ_INTERRUPTED",
            VaultError::TransferTimeout { .. } => "ERR_TRANSFER_TIMEOUT",
            VaultError::Cancelled { .. } => "ERR_CANCELLED",
        }
    }
}

/// Create a backup failure from a serialization or collaborator error
pub fn backup_failure(op: &str, reason: impl std::fmt::Display) -> VaultError {
    VaultError::BackupFailed {
        reason: format!("{}: {}", op, reason),
    }
}

/// Create a malformed-envelope rejection
pub fn malformed_envelope(reason: impl std::fmt::Display) -> VaultError {
    VaultError::MalformedEnvelope {
        reason: reason.to_string(),
    }
}

/// Create a read interruption from an underlying reader error
pub fn read_interrupted(reason: impl std::fmt::Display) -> VaultError {
    VaultError::ReadInterrupted {
        reason: reason.to_string(),
    }
}
