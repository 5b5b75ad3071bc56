// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("I/O error reading upload: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("OCR backend is not available for image upload: {0}")]
    OcrUnavailable(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("Invalid table sidecar {path}: {reason}")]
    TableSidecar { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    // Backend failures cross the core boundary as-is, never retried or reinterpreted
    #[error("Extraction backend failed: {0}")]
    Backend(#[from] BackendError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
