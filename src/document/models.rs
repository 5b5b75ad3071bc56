// src/document/models.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unvalidated table as handed over by an extraction backend.
/// Cells may be null, strings, numbers or anything else JSON can carry; rows may be jagged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<serde_json::Value>>) -> Self {
        Self { rows }
    }

    /// Builds a table of plain string cells.
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| serde_json::Value::String(cell.into()))
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

/// A table after empty-row/column removal and trimming.
///
/// Serialized in "split" orientation: `columns` and `index` hold the original
/// positions of the surviving columns and rows, `data` the cells row by row.
/// `None` is the missing marker and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTable {
    pub columns: Vec<usize>,
    pub index: Vec<usize>,
    pub data: Vec<Vec<Option<String>>>,
}

impl CleanTable {
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Text and cleaned tables of one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub tables: Vec<CleanTable>,
}

impl ExtractedDocument {
    pub fn new(raw_text: impl Into<String>, tables: Vec<CleanTable>) -> Self {
        Self {
            raw_text: raw_text.into(),
            tables,
        }
    }
}

/// Structured résumé fields. Absent strings serialize as `""`, lists are never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default, with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatchResult {
    /// 0.0 – 100.0, one decimal
    pub match_percentage: f64,
    pub matching_skills: Vec<String>,
}

/// Response body for one processed upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub text: String,
    pub tables: Vec<CleanTable>,
    pub info: ResumeRecord,
}

/// What the host hands back: the processed document plus an optional job score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    #[serde(flatten)]
    pub document: ProcessedDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatchResult>,
}

mod empty_as_none {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}
