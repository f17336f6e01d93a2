//! In-memory transfer doubles for tests and examples.

use crate::errors::{backup_failure, read_interrupted, Result};
use crate::ports::{ContentSource, LocalTransfer, RemoteTransfer};
use async_trait::async_trait;
use std::sync::Mutex;

/// `LocalTransfer` that records every delivery.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    /// Snapshot of all `(filename, bytes)` deliveries so far.
    pub fn deliveries(&self) -> Vec<(String, Vec<u8>)> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl LocalTransfer for MemorySink {
    async fn deliver(&self, bytes: &[u8], filename: &str) -> Result<()> {
        self.deliveries
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// `RemoteTransfer` that records every upload and succeeds immediately.
#[derive(Debug, Default)]
pub struct MemoryRemote {
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryRemote {
    /// Snapshot of all `(filename, bytes)` uploads so far.
    pub fn uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl RemoteTransfer for MemoryRemote {
    async fn upload(&self, bytes: &[u8], filename: &str) -> Result<()> {
        self.uploads
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// `RemoteTransfer` that always fails with the configured reason.
#[derive(Debug, Clone)]
pub struct FailingRemote {
    reason: String,
}

impl FailingRemote {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RemoteTransfer for FailingRemote {
    async fn upload(&self, _bytes: &[u8], _filename: &str) -> Result<()> {
        Err(backup_failure("remote_transfer", &self.reason))
    }
}

/// `RemoteTransfer` that never completes. For deadline tests.
#[derive(Debug, Clone, Default)]
pub struct StalledRemote;

#[async_trait]
impl RemoteTransfer for StalledRemote {
    async fn upload(&self, _bytes: &[u8], _filename: &str) -> Result<()> {
        std::future::pending().await
    }
}

/// `ContentSource` backed by a fixed string.
#[derive(Debug, Clone)]
pub struct MemorySource {
    content: String,
}

impl MemorySource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn read_all(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// `ContentSource` whose read always fails with the configured reason.
#[derive(Debug, Clone)]
pub struct FailingSource {
    reason: String,
}

impl FailingSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ContentSource for FailingSource {
    async fn read_all(&self) -> Result<String> {
        Err(read_interrupted(&self.reason))
    }
}

/// `ContentSource` that never completes. For deadline tests.
#[derive(Debug, Clone, Default)]
pub struct StalledSource;

#[async_trait]
impl ContentSource for StalledSource {
    async fn read_all(&self) -> Result<String> {
        std::future::pending().await
    }
}
