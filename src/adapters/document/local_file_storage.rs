//! Local Filesystem Storage Adapter - Implementation of DocumentFileStorage.
//!
//! Stores exported intake documents as flat files under one export directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::ports::{DocumentFileStorage, StorageError, StoredFile};

/// Maximum file size allowed (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem storage for exported documents.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
#[derive(Debug, Clone)]
pub struct LocalDocumentFileStorage {
    base_path: PathBuf,
}

impl LocalDocumentFileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a bare filename inside the base directory.
    fn resolve(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let is_bare = !filename.is_empty()
            && filename != "."
            && filename != ".."
            && !filename.contains(&['/', '\\'][..]);
        if !is_bare {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    async fn write_and_rename(
        temp_path: &Path,
        final_path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(temp_path, final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl DocumentFileStorage for LocalDocumentFileStorage {
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError> {
        let size = content.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::TooLarge {
                size,
                max: MAX_FILE_SIZE_BYTES,
            });
        }

        let final_path = self.resolve(filename)?;
        let temp_path = self.resolve(&format!("{}.tmp", filename))?;
        self.ensure_base_dir().await?;

        if let Err(err) = Self::write_and_rename(&temp_path, &final_path, content).await {
            // No partial file is left behind
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        path = %temp_path.display(),
                        error = %cleanup,
                        "temp file cleanup failed"
                    );
                }
            }
            return Err(err);
        }

        let checksum = Self::compute_checksum(content);
        debug!(path = %final_path.display(), size, %checksum, "document written");

        Ok(StoredFile {
            path: final_path,
            size_bytes: size,
            checksum,
        })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(filename)?;

        fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }

    async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.resolve(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (LocalDocumentFileStorage, TempDir) {
        let temp = TempDir::new().unwrap();
        let storage = LocalDocumentFileStorage::new(temp.path().join("exports"));
        (storage, temp)
    }

    #[tokio::test]
    async fn write_creates_directory_and_file() {
        let (storage, _temp) = create_storage();

        let stored = storage.write("intake-summary.md", b"# Intake").await.unwrap();

        assert!(stored.path.exists());
        assert_eq!(stored.path, storage.base_path().join("intake-summary.md"));
        assert_eq!(stored.size_bytes, 8);
    }

    #[tokio::test]
    async fn write_content_is_readable() {
        let (storage, _temp) = create_storage();
        let content = b"# Intake\n\nWith multiple lines.\n";

        storage.write("a.md", content).await.unwrap();

        assert_eq!(storage.read("a.md").await.unwrap(), content.to_vec());
        assert!(storage.exists("a.md").await.unwrap());
        assert!(!storage.exists("a.md.tmp").await.unwrap());
    }

    #[tokio::test]
    async fn write_overwrites_existing() {
        let (storage, _temp) = create_storage();

        storage.write("a.md", b"Original").await.unwrap();
        storage.write("a.md", b"Updated").await.unwrap();

        assert_eq!(storage.read("a.md").await.unwrap(), b"Updated".to_vec());
    }

    #[tokio::test]
    async fn write_reports_sha256_checksum() {
        let (storage, _temp) = create_storage();

        let stored = storage.write("empty.txt", b"").await.unwrap();

        assert_eq!(
            stored.checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn write_rejects_oversized_content() {
        let (storage, _temp) = create_storage();
        let large = vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize];

        let result = storage.write("big.bin", &large).await;

        assert!(matches!(result, Err(StorageError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let (storage, _temp) = create_storage();

        for name in ["../escape.md", "nested/file.md", "", ".."] {
            let result = storage.write(name, b"x").await;
            assert!(
                matches!(result, Err(StorageError::InvalidFilename(_))),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let (storage, _temp) = create_storage();
        // A non-empty directory cannot be replaced by a file
        let blocker = storage.base_path().join("a.md");
        std::fs::create_dir_all(blocker.join("inner")).unwrap();

        let result = storage.write("a.md", b"content").await;

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(!storage.exists("a.md.tmp").await.unwrap());
        assert!(blocker.is_dir());
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let (storage, _temp) = create_storage();

        let result = storage.read("missing.md").await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }
}
