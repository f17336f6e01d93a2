//! Simulated offsite upload.

use crate::errors::Result;
use crate::ports::RemoteTransfer;
use async_trait::async_trait;
use std::time::Duration;

/// `RemoteTransfer` that sleeps a fixed latency and then succeeds.
///
/// Stands in for a real offsite storage client. No bytes leave the process;
/// the builder's timeout/cancellation handling around the upload is exercised
/// exactly as it would be against a real network client.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    latency: Duration,
}

impl SimulatedRemote {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl RemoteTransfer for SimulatedRemote {
    async fn upload(&self, bytes: &[u8], filename: &str) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(
            filename = %filename,
            size_bytes = bytes.len(),
            "Simulated offsite upload complete"
        );
        Ok(())
    }
}
