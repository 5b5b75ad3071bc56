// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::document::models::ExtractionReport;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves the full report as pretty JSON to `<stem>_report.json`
    pub fn save_report(&self, stem: &str, report: &ExtractionReport) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_report.json", stem));

        let body = serde_json::to_string_pretty(report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, body)?;

        tracing::info!("Saved report to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves a summary of the report to `<stem>_meta.json`
    pub fn save_report_metadata(&self, stem: &str, report: &ExtractionReport) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));
        let info = &report.document.info;

        let metadata = serde_json::json!({
            "source": stem,
            "text_length": report.document.text.len(),
            "table_count": report.document.tables.len(),
            "table_shapes": report.document.tables.iter()
                .map(|t| [t.row_count(), t.column_count()])
                .collect::<Vec<_>>(),
            "has_name": info.name.is_some(),
            "has_email": info.email.is_some(),
            "has_phone": info.phone.is_some(),
            "link_count": info.links.len(),
            "education_count": info.education.len(),
            "work_experience_count": info.work_experience.len(),
            "skill_count": info.skills.len(),
            "match_percentage": report.job_match.as_ref().map(|m| m.match_percentage),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{JobMatchResult, ProcessedDocument, ResumeRecord};
    use tempfile::TempDir;

    fn report() -> ExtractionReport {
        ExtractionReport {
            document: ProcessedDocument {
                text: "Jane Doe".to_string(),
                tables: vec![],
                info: ResumeRecord {
                    name: Some("Jane Doe".to_string()),
                    skills: vec!["Rust".to_string()],
                    ..Default::default()
                },
            },
            job_match: Some(JobMatchResult {
                match_percentage: 50.0,
                matching_skills: vec!["rust".to_string()],
            }),
        }
    }

    #[test]
    fn test_creates_nested_base_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("reports");
        let storage = StorageManager::new(&nested).unwrap();
        assert!(storage.base_dir().is_dir());
    }

    #[test]
    fn test_report_round_trips_from_disk() {
        let dir = TempDir::new().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let path = storage.save_report("cv", &report()).unwrap();
        assert!(path.ends_with("cv_report.json"));

        let saved: ExtractionReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, report());
    }

    #[test]
    fn test_metadata_summarises_report() {
        let dir = TempDir::new().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let path = storage.save_report_metadata("cv", &report()).unwrap();

        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(meta["has_name"], true);
        assert_eq!(meta["has_email"], false);
        assert_eq!(meta["skill_count"], 1);
        assert_eq!(meta["match_percentage"], 50.0);
        assert!(meta["extraction_timestamp"].is_string());
    }
}
