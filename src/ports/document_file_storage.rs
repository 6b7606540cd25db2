//! Document File Storage Port - Filesystem operations interface.
//!
//! This port defines the contract for persisting exported intake documents.
//! Adapters (like LocalDocumentFileStorage) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Port for writing exported documents.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Compute SHA-256 checksums for integrity verification
/// - Reject filenames that would escape the storage root
#[async_trait]
pub trait DocumentFileStorage: Send + Sync {
    /// Write content under `filename`, replacing any existing file.
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError>;

    /// Read a previously written file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError>;

    /// Check if a file exists.
    async fn exists(&self, filename: &str) -> Result<bool, StorageError>;
}

/// Where and what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

/// Errors from storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("I/O error: {0}")]
    Io(String),
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn not_found(filename: impl Into<String>) -> Self {
        Self::NotFound(filename.into())
    }
}
