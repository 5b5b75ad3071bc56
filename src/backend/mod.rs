// src/backend/mod.rs
//! Extraction backends: where raw text and tables come from.
pub mod files;

use crate::document::models::{ProcessedDocument, RawTable};
use crate::document::pipeline::DocumentProcessor;
use crate::utils::error::{AppError, BackendError};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use files::{FileBackend, FileKind};

/// Source of raw text and tables for an uploaded file. Calls are blocking.
pub trait ExtractionBackend: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;

    fn extract_tables(&self, path: &Path) -> Result<Vec<RawTable>, BackendError>;
}

/// Runs the blocking backend and pipeline off the async runtime's worker threads.
pub async fn process_upload(
    processor: Arc<DocumentProcessor>,
    backend: Arc<dyn ExtractionBackend>,
    path: PathBuf,
) -> Result<ProcessedDocument, AppError> {
    let processed = tokio::task::spawn_blocking(move || processor.process_file(backend.as_ref(), &path))
        .await??;
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExtractError;

    struct StaticBackend(&'static str);

    impl ExtractionBackend for StaticBackend {
        fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }

        fn extract_tables(&self, _path: &Path) -> Result<Vec<RawTable>, BackendError> {
            Ok(vec![RawTable::from_strings(vec![vec!["Skill", "Level"], vec!["Rust", "Expert"]])])
        }
    }

    struct FailingBackend;

    impl ExtractionBackend for FailingBackend {
        fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
            Err(BackendError::OcrUnavailable(path.display().to_string()))
        }

        fn extract_tables(&self, _path: &Path) -> Result<Vec<RawTable>, BackendError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_process_upload_runs_off_thread() {
        let processor = Arc::new(DocumentProcessor::default());
        let backend: Arc<dyn ExtractionBackend> = Arc::new(StaticBackend("Jane Doe\nSKILLS\nRust"));
        let processed = tokio_test::block_on(process_upload(processor, backend, PathBuf::from("cv.txt"))).unwrap();
        assert_eq!(processed.info.skills, vec!["Rust"]);
        assert_eq!(processed.tables.len(), 1);
        assert_eq!(processed.tables[0].row_count(), 2);
    }

    #[test]
    fn test_process_upload_surfaces_backend_error() {
        let processor = Arc::new(DocumentProcessor::default());
        let backend: Arc<dyn ExtractionBackend> = Arc::new(FailingBackend);
        let err = tokio_test::block_on(process_upload(processor, backend, PathBuf::from("scan.png"))).unwrap_err();
        assert!(matches!(
            err,
            AppError::Extraction(ExtractError::Backend(BackendError::OcrUnavailable(_)))
        ));
    }
}
