// src/document/mod.rs
pub mod models;
pub mod pipeline;

// Re-export key document types for convenience
pub use models::{
    CleanTable, ExtractedDocument, ExtractionReport, JobMatchResult, ProcessedDocument,
    RawTable, ResumeRecord,
};
pub use pipeline::DocumentProcessor;
