// src/backend/files.rs
use crate::backend::ExtractionBackend;
use crate::document::models::RawTable;
use crate::utils::error::BackendError;
use scraper::{node::Node, ElementRef, Html};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

// Tables for `cv.pdf` are read from `cv.pdf.tables.json`
const TABLE_SIDECAR_SUFFIX: &str = ".tables.json";

// Text inside these elements is never visible
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Html,
    Pdf,
    Image,
}

impl FileKind {
    /// Picks the kind from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, BackendError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            "png" | "jpg" | "jpeg" => Ok(Self::Image),
            _ => Err(BackendError::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// Reference backend reading uploads from disk.
///
/// Plain text is read as-is, HTML is reduced to its visible text and PDFs go through
/// their text layer. Images would need OCR, which this backend does not provide.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBackend;

impl FileBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn sidecar_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(TABLE_SIDECAR_SUFFIX);
        PathBuf::from(name)
    }
}

impl ExtractionBackend for FileBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let text = match FileKind::from_path(path)? {
            FileKind::Text => fs::read_to_string(path)?,
            FileKind::Html => html_to_text(&fs::read_to_string(path)?),
            FileKind::Pdf => pdf_extract::extract_text(path).map_err(|e| {
                tracing::error!("PDF text extraction failed for {}: {}", path.display(), e);
                BackendError::Pdf(e.to_string())
            })?,
            FileKind::Image => {
                tracing::warn!("No OCR engine configured, cannot read image {}", path.display());
                return Err(BackendError::OcrUnavailable(path.display().to_string()));
            }
        };
        tracing::debug!("Extracted {} chars from {}", text.len(), path.display());
        Ok(text)
    }

    fn extract_tables(&self, path: &Path) -> Result<Vec<RawTable>, BackendError> {
        if FileKind::from_path(path)? == FileKind::Image {
            return Ok(Vec::new());
        }

        let sidecar = Self::sidecar_path(path);
        if !sidecar.exists() {
            tracing::debug!("No table sidecar at {}", sidecar.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&sidecar)?;
        let tables: Vec<RawTable> = serde_json::from_str(&raw).map_err(|e| BackendError::TableSidecar {
            path: sidecar.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Loaded {} raw tables from {}", tables.len(), sidecar.display());
        Ok(tables)
    }
}

/// Visible text of an HTML document, one text node per line.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| HIDDEN_ELEMENTS.contains(&el.value().name()));
        if hidden {
            continue;
        }
        let line = text.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines.join("\n")
}
