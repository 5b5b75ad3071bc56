// src/lib.rs
//! Turns extracted document text and tables into a structured résumé record and
//! scores résumés against job descriptions.
pub mod backend;
pub mod config;
pub mod document;
pub mod extractors;
pub mod storage;
pub mod utils;

pub use config::ExtractorConfig;
pub use document::{DocumentProcessor, ExtractionReport, ProcessedDocument, ResumeRecord};
pub use utils::AppError;
