//! fiscus-vault
//!
//! Snapshot export/import subsystem for the Fiscus finance/administration
//! suite.
//!
//! Provides:
//! - Snapshot envelope schema (versioned, signed JSON wrapper)
//! - Builder: seal application state and hand it to transfer collaborators
//! - Validator/Loader: verify an externally supplied envelope and yield its
//!   payload
//! - Transfer ports with filesystem, simulated-remote and in-memory adapters
//! - Error taxonomy with stable codes
//! - Logging facility

pub mod builder;
pub mod envelope;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod transfer;
pub mod validator;

pub use builder::{create_backup, BackupOptions, BackupReceipt};
pub use envelope::{
    snapshot_filename, PayloadSections, SnapshotEnvelope, ENVELOPE_SIGNATURE, ENVELOPE_VERSION,
};
pub use errors::{Result, VaultError};
pub use ports::{ContentSource, LocalTransfer, RemoteTransfer};
pub use validator::{restore_backup, validate_snapshot, RestoreOptions};
