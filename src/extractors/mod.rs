// src/extractors/mod.rs
pub mod entity;
pub mod job_match;
pub mod matcher;
pub mod record;
pub mod sanitize;
pub mod section;
pub mod table;
pub mod tagger;

// Re-export key extraction types for convenience
pub use entity::{
    Entities, EntityExtractor, NameExtractor, TaggerNameExtractor, TitlecaseNameExtractor,
};
pub use job_match::match_job;
pub use matcher::{PatternMatcher, TaggedEntities};
pub use record::RecordAssembler;
pub use sanitize::sanitize;
pub use section::{
    DegreeKeywordEducation, EducationExtractor, HeaderBlockEducation, SectionSegmenter, Sections,
};
pub use table::TableNormalizer;
pub use tagger::{LexiconTagger, PosTagger};
