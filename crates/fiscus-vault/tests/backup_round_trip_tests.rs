//! Builder round-trip tests
//!
//! Verify the export path end to end: whatever the builder writes, the
//! validator accepts, and the payload survives value-for-value.

use chrono::NaiveDate;
use fiscus_vault::transfer::memory::{FailingRemote, MemoryRemote, MemorySink};
use fiscus_vault::{
    create_backup, validate_snapshot, BackupOptions, PayloadSections, VaultError,
};

fn sections(value: serde_json::Value) -> PayloadSections {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test payload must be a JSON object, got {}", other),
    }
}

#[tokio::test]
async fn test_export_then_import_round_trip() {
    // Scenario A: export settings + wealth sections, import the delivered
    // bytes, expect the original payload back value-for-value.
    let payload = sections(serde_json::json!({
        "settings": { "theme": "dark" },
        "wealth": { "balance": 100 },
    }));

    let local = MemorySink::default();
    let remote = MemoryRemote::default();
    create_backup(
        payload.clone(),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap();

    let deliveries = local.deliveries();
    assert_eq!(deliveries.len(), 1);
    let raw = String::from_utf8(deliveries[0].1.clone()).unwrap();

    let restored = validate_snapshot(&raw).unwrap();
    assert_eq!(restored, payload);
}

#[tokio::test]
async fn test_round_trip_preserves_nested_structure() {
    let payload = sections(serde_json::json!({
        "settings": { "theme": "dark", "locale": null },
        "wealth-ledger": {
            "entries": [
                { "label": "rent", "amount": -950.25 },
                { "label": "salary", "amount": 3100 },
            ],
        },
        "custom-views": {},
    }));

    let local = MemorySink::default();
    let remote = MemoryRemote::default();
    create_backup(
        payload.clone(),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap();

    let raw = String::from_utf8(local.deliveries()[0].1.clone()).unwrap();
    assert_eq!(validate_snapshot(&raw).unwrap(), payload);
}

#[tokio::test]
async fn test_exactly_one_local_and_one_remote_transfer_per_call() {
    let local = MemorySink::default();
    let remote = MemoryRemote::default();

    create_backup(
        sections(serde_json::json!({"settings": {}, "extra": 1})),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(local.delivery_count(), 1);
    assert_eq!(remote.upload_count(), 1);
}

#[tokio::test]
async fn test_local_and_remote_receive_identical_bytes() {
    let local = MemorySink::default();
    let remote = MemoryRemote::default();

    create_backup(
        sections(serde_json::json!({"settings": {"theme": "dark"}})),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap();

    let delivered = local.deliveries();
    let uploaded = remote.uploads();
    assert_eq!(delivered[0].0, uploaded[0].0, "same filename on both legs");
    assert_eq!(delivered[0].1, uploaded[0].1, "same bytes on both legs");
}

#[tokio::test]
async fn test_sequential_backups_share_payload_but_not_timestamp() {
    // Idempotent builder property: two calls with identical payloads produce
    // envelopes with identical payload content under distinct timestamps.
    let payload = sections(serde_json::json!({"settings": {"theme": "dark"}}));
    let local = MemorySink::default();
    let remote = MemoryRemote::default();
    let options = BackupOptions::default();

    let first = create_backup(payload.clone(), &local, &remote, &options)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_backup(payload.clone(), &local, &remote, &options)
        .await
        .unwrap();

    assert_ne!(first.timestamp, second.timestamp);

    let deliveries = local.deliveries();
    let restored_first =
        validate_snapshot(&String::from_utf8(deliveries[0].1.clone()).unwrap()).unwrap();
    let restored_second =
        validate_snapshot(&String::from_utf8(deliveries[1].1.clone()).unwrap()).unwrap();
    assert_eq!(restored_first, restored_second);
}

#[tokio::test]
async fn test_receipt_filename_follows_daily_pattern() {
    let local = MemorySink::default();
    let remote = MemoryRemote::default();

    let receipt = create_backup(
        sections(serde_json::json!({"settings": {}, "wealth": {}})),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap();

    let date_part = receipt
        .filename
        .strip_prefix("fiscus_vault_snapshot_")
        .and_then(|rest| rest.strip_suffix(".json"))
        .expect("filename should match fiscus_vault_snapshot_<date>.json");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").expect("date segment should be YYYY-MM-DD");
}

#[tokio::test]
async fn test_remote_failure_surfaces_as_backup_failed() {
    let local = MemorySink::default();
    let remote = FailingRemote::new("offsite store unavailable");

    let err = create_backup(
        sections(serde_json::json!({"settings": {"theme": "dark"}})),
        &local,
        &remote,
        &BackupOptions::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, VaultError::BackupFailed { .. }));
    assert!(err.to_string().contains("offsite store unavailable"));
}
