// src/document/pipeline.rs
use crate::backend::ExtractionBackend;
use crate::config::{EducationStrategy, ExtractorConfig, NameStrategy};
use crate::document::models::{ExtractedDocument, JobMatchResult, ProcessedDocument, RawTable};
use crate::extractors::entity::{EntityExtractor, NameExtractor, TaggerNameExtractor, TitlecaseNameExtractor};
use crate::extractors::job_match::match_job;
use crate::extractors::matcher::PatternMatcher;
use crate::extractors::record::RecordAssembler;
use crate::extractors::sanitize::sanitize;
use crate::extractors::section::{
    DegreeKeywordEducation, EducationExtractor, HeaderBlockEducation, SectionSegmenter,
};
use crate::extractors::table::TableNormalizer;
use crate::extractors::tagger::PosTagger;
use crate::utils::error::ExtractError;
use std::path::Path;
use std::sync::Arc;

/// Entry point for the host: turns backend output into the response body and scores
/// résumés against job descriptions. Holds no per-request state.
#[derive(Clone, Default)]
pub struct DocumentProcessor {
    tables: TableNormalizer,
    assembler: RecordAssembler,
}

impl DocumentProcessor {
    pub fn new(tables: TableNormalizer, assembler: RecordAssembler) -> Self {
        Self { tables, assembler }
    }

    /// Wires the configured strategies together. `tagger` is only handed to the
    /// components the configuration asks for.
    pub fn from_config(config: &ExtractorConfig, tagger: Arc<dyn PosTagger>) -> Self {
        let name: Arc<dyn NameExtractor> = match config.name_strategy {
            NameStrategy::Titlecase => Arc::new(TitlecaseNameExtractor),
            NameStrategy::Tagger => Arc::new(TaggerNameExtractor::new(Arc::clone(&tagger))),
        };
        let education: Arc<dyn EducationExtractor> = match config.education_strategy {
            EducationStrategy::Header => Arc::new(HeaderBlockEducation),
            EducationStrategy::Keyword => Arc::new(DegreeKeywordEducation),
        };

        let mut assembler = RecordAssembler::new(EntityExtractor::new(name), SectionSegmenter::new(education));
        if config.tagger_supplement {
            assembler = assembler.with_supplement(PatternMatcher::new(tagger));
        }

        tracing::debug!("Built document processor from {:?}", config);
        Self::new(TableNormalizer::new(config.missing_policy), assembler)
    }

    pub fn assembler(&self) -> &RecordAssembler {
        &self.assembler
    }

    /// Cleans the tables and derives the résumé record from the text.
    pub fn process_document(&self, text: &str, raw_tables: &[RawTable]) -> ProcessedDocument {
        let document = ExtractedDocument::new(text, self.tables.normalize_all(raw_tables));
        let info = self.assembler.assemble(&document);
        ProcessedDocument {
            text: document.raw_text,
            tables: document.tables,
            info,
        }
    }

    /// Sanitizes the résumé text, then matches the job description's skills against it.
    pub fn score_against_job(&self, resume_text: &str, job_description: &str) -> JobMatchResult {
        match_job(job_description, &sanitize(resume_text))
    }

    /// Runs the backend and processes what it returns. Backend failures are passed
    /// through unchanged.
    pub fn process_file<B>(&self, backend: &B, path: &Path) -> Result<ProcessedDocument, ExtractError>
    where
        B: ExtractionBackend + ?Sized,
    {
        tracing::info!("Processing upload: {}", path.display());
        let text = backend.extract_text(path)?;
        let raw_tables = backend.extract_tables(path)?;
        tracing::debug!("Backend returned {} chars, {} tables", text.len(), raw_tables.len());
        Ok(self.process_document(&text, &raw_tables))
    }
}
