//! Snapshot envelope schema and format constants.
//!
//! The envelope is the unit of transfer and the sole exchanged artifact:
//! a versioned, signed JSON wrapper around caller-defined state sections.
//! Whatever the builder writes, the validator must accept, and no other
//! version should validate.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "timestamp": "<ISO-8601 string>",
//!   "version":   "<fixed format identifier>",
//!   "signature": "<fixed authenticity constant>",
//!   "payload":   { "<section-name>": { ... }, ... }
//! }
//! ```

use crate::errors::{backup_failure, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed format-version string identifying the envelope schema.
///
/// Informational only on restore: a single envelope version exists and no
/// migration logic is defined for it.
pub const ENVELOPE_VERSION: &str = "1.0.0";

/// Fixed authenticity constant proving an envelope was produced here.
///
/// Not a cryptographic signature. An envelope is valid only if its
/// `signature` field equals this constant exactly.
pub const ENVELOPE_SIGNATURE: &str = "FISCUS-VAULT-SNAPSHOT-V1";

/// Product prefix used in the deterministic snapshot filename.
pub const PRODUCT_PREFIX: &str = "fiscus";

/// Named state sections carried inside an envelope.
///
/// Section contents are opaque pass-through data owned by the caller
/// (e.g. "settings", "wealth-ledger", "custom-views").
pub type PayloadSections = serde_json::Map<String, serde_json::Value>;

/// Snapshot envelope schema.
///
/// Immutable once sealed; created fresh on every export call and identified
/// only by its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotEnvelope {
    /// RFC3339 timestamp set at seal time, never modified afterward
    pub timestamp: String,

    /// Envelope schema version (see [`ENVELOPE_VERSION`])
    pub version: String,

    /// Authenticity marker (see [`ENVELOPE_SIGNATURE`])
    pub signature: String,

    /// Caller-defined named state sections
    pub payload: PayloadSections,
}

impl SnapshotEnvelope {
    /// Seal a payload into a fresh envelope stamped at `now`.
    pub fn seal(payload: PayloadSections, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.to_rfc3339(),
            version: ENVELOPE_VERSION.to_string(),
            signature: ENVELOPE_SIGNATURE.to_string(),
            payload,
        }
    }

    /// Serialize the envelope to its canonical textual form.
    ///
    /// ## Errors
    ///
    /// Returns `VaultError::BackupFailed` if JSON serialization fails.
    pub fn to_canonical_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| backup_failure("serialize_envelope", e))
    }
}

/// Deterministic snapshot filename for the given export instant.
///
/// Pattern: `fiscus_vault_snapshot_YYYY-MM-DD.json`. Deterministic per day,
/// not per call; two exports on the same day produce colliding names, left to
/// the local-transfer destination to resolve.
pub fn snapshot_filename(now: DateTime<Utc>) -> String {
    format!(
        "{}_vault_snapshot_{}.json",
        PRODUCT_PREFIX,
        now.format("%Y-%m-%d")
    )
}
