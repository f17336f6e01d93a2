//! Snapshot validator/loader: verify an externally supplied envelope and
//! yield its payload.
//!
//! A pure read/validate/extract pipeline. Nothing here mutates application
//! state; applying the returned sections to live state is the caller's
//! responsibility, and failure is terminal per call.

use crate::envelope::{PayloadSections, ENVELOPE_SIGNATURE};
use crate::errors::{malformed_envelope, Result, VaultError};
use crate::ports::{bounded, ContentSource};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Knobs bounding the validator's single suspension point (the content read).
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Deadline for the content-reader collaborator
    pub read_timeout: Duration,
    /// Cancellation token observed while awaiting the read
    pub cancel: CancellationToken,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(30),
            cancel: CancellationToken::new(),
        }
    }
}

/// Read a snapshot from `source`, validate it, and return its payload.
///
/// Content-reader failures propagate unchanged as
/// `VaultError::ReadInterrupted`; everything after the read is
/// [`validate_snapshot`].
///
/// ## Errors
///
/// Any [`validate_snapshot`] rejection, plus `VaultError::ReadInterrupted`,
/// `VaultError::TransferTimeout` and `VaultError::Cancelled` from the read
/// suspension point.
pub async fn restore_backup(
    source: &dyn ContentSource,
    options: &RestoreOptions,
) -> Result<PayloadSections> {
    let raw = bounded(
        source.read_all(),
        "content_read",
        options.read_timeout,
        &options.cancel,
    )
    .await?;

    validate_snapshot(&raw)
}

/// Validate raw snapshot text and extract its payload sections.
///
/// Checks run in strict order, a design contract: the signature gate comes
/// before payload completeness, so a forged-but-complete envelope is rejected
/// for the right reason and a genuine-but-truncated one is distinguished from
/// a fake.
///
/// 1. zero-length input → `EmptyContent` (before any parsing)
/// 2. not a JSON object → `MalformedEnvelope`
/// 3. signature mismatch → `InvalidSignature`
/// 4. payload absent, null or empty → `MissingPayload`
/// 5. success → payload returned value-for-value unchanged
///
/// ## Errors
///
/// `VaultError::EmptyContent`, `VaultError::MalformedEnvelope`,
/// `VaultError::InvalidSignature` or `VaultError::MissingPayload`.
pub fn validate_snapshot(raw: &str) -> Result<PayloadSections> {
    if raw.is_empty() {
        return Err(VaultError::EmptyContent);
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| reject(malformed_envelope(e)))?;
    let fields = match value.as_object() {
        Some(fields) => fields,
        None => {
            return Err(reject(malformed_envelope(
                "envelope must be a JSON object",
            )))
        }
    };

    match fields.get("signature").and_then(|s| s.as_str()) {
        Some(signature) if signature == ENVELOPE_SIGNATURE => {}
        _ => return Err(reject(VaultError::InvalidSignature)),
    }

    match fields.get("payload") {
        None | Some(serde_json::Value::Null) => Err(reject(VaultError::MissingPayload)),
        Some(serde_json::Value::Object(sections)) if sections.is_empty() => {
            Err(reject(VaultError::MissingPayload))
        }
        Some(serde_json::Value::Object(sections)) => {
            tracing::debug!(sections = sections.len(), "Snapshot validated");
            Ok(sections.clone())
        }
        Some(_) => Err(reject(malformed_envelope(
            "payload must be a JSON object of named sections",
        ))),
    }
}

fn reject(err: VaultError) -> VaultError {
    tracing::debug!(code = err.code(), "Snapshot rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_checked_before_parsing() {
        // "" is not valid JSON either; the dedicated empty gate must win.
        assert_eq!(validate_snapshot("").unwrap_err(), VaultError::EmptyContent);
    }

    #[test]
    fn test_signature_checked_before_payload_completeness() {
        let forged = r#"{"timestamp":"2026-08-04T00:00:00+00:00","version":"1.0.0","signature":"FORGED"}"#;
        assert_eq!(
            validate_snapshot(forged).unwrap_err(),
            VaultError::InvalidSignature
        );
    }

    #[test]
    fn test_missing_signature_field_is_a_signature_failure() {
        let unsigned = r#"{"timestamp":"2026-08-04T00:00:00+00:00","payload":{"settings":{}}}"#;
        assert_eq!(
            validate_snapshot(unsigned).unwrap_err(),
            VaultError::InvalidSignature
        );
    }
}
