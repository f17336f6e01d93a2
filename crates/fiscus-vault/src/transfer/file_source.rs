//! Content reader over a user-selected file.

use crate::errors::{read_interrupted, Result};
use crate::ports::ContentSource;
use async_trait::async_trait;
use std::path::PathBuf;

/// `ContentSource` that reads a snapshot file from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn read_all(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| read_interrupted(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VaultError;

    #[tokio::test]
    async fn test_reads_full_file_content() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("snapshot.json");
        std::fs::write(&path, r#"{"signature":"x"}"#).unwrap();

        let content = FileSource::new(&path).read_all().await.unwrap();
        assert_eq!(content, r#"{"signature":"x"}"#);
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_as_read_interrupted() {
        let temp = tempfile::TempDir::new().unwrap();
        let source = FileSource::new(temp.path().join("absent.json"));

        let err = source.read_all().await.unwrap_err();
        assert!(matches!(err, VaultError::ReadInterrupted { .. }));
    }
}
