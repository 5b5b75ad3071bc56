// src/extractors/record.rs
use crate::document::models::{ExtractedDocument, ResumeRecord};
use crate::extractors::entity::EntityExtractor;
use crate::extractors::matcher::PatternMatcher;
use crate::extractors::section::SectionSegmenter;

/// Builds a `ResumeRecord` out of the entity extractor and the section segmenter.
///
/// Contact fields come from the entity extractor, the three lists from the segmenter.
/// With a pattern matcher attached, its list entries are appended after the
/// segmenter's (no de-duplication) and its name is used only when the regex name is empty.
#[derive(Clone, Default)]
pub struct RecordAssembler {
    entities: EntityExtractor,
    sections: SectionSegmenter,
    supplement: Option<PatternMatcher>,
}

impl RecordAssembler {
    pub fn new(entities: EntityExtractor, sections: SectionSegmenter) -> Self {
        Self {
            entities,
            sections,
            supplement: None,
        }
    }

    pub fn with_supplement(mut self, matcher: PatternMatcher) -> Self {
        self.supplement = Some(matcher);
        self
    }

    pub fn entities(&self) -> &EntityExtractor {
        &self.entities
    }

    pub fn sections(&self) -> &SectionSegmenter {
        &self.sections
    }

    pub fn assemble(&self, document: &ExtractedDocument) -> ResumeRecord {
        let text = document.raw_text.as_str();
        let entities = self.entities.extract(text);
        let sections = self.sections.segment(text);

        let mut record = ResumeRecord {
            name: entities.name,
            email: entities.email,
            phone: entities.phone,
            links: entities.links,
            education: sections.education,
            work_experience: sections.work_experience,
            skills: sections.skills,
        };

        if let Some(matcher) = &self.supplement {
            let tagged = matcher.matches(text);
            if record.name.is_none() {
                if let Some(name) = tagged.name {
                    tracing::debug!("Regex name empty, using tagger name");
                    record.name = Some(name);
                }
            }
            record.education.extend(tagged.education);
            record.work_experience.extend(tagged.work_experience);
            record.skills.extend(tagged.skills);
        }

        tracing::info!(
            "Assembled record: name={} email={} phone={} links={} education={} work_experience={} skills={}",
            record.name.is_some(),
            record.email.is_some(),
            record.phone.is_some(),
            record.links.len(),
            record.education.len(),
            record.work_experience.len(),
            record.skills.len()
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::entity::NameExtractor;
    use crate::extractors::tagger::{LexiconTagger, PosTagger};
    use std::sync::Arc;

    const RESUME: &str = "Jane Doe
jane.doe@example.com | +1 (555) 123-4567 | https://github.com/janedoe

EXPERIENCE
Backend Engineer at Acme Corp
EDUCATION
Master of Science in Computer Science
SKILLS
Rust, Kafka
Also comfortable with Docker
";

    fn doc(text: &str) -> ExtractedDocument {
        ExtractedDocument::new(text, vec![])
    }

    fn tagger() -> Arc<dyn PosTagger> {
        Arc::new(LexiconTagger::new())
    }

    #[test]
    fn test_regex_only_record() {
        let record = RecordAssembler::default().assemble(&doc(RESUME));
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(record.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(record.links, vec!["https://github.com/janedoe"]);
        assert_eq!(record.work_experience, vec!["Backend Engineer at Acme Corp"]);
        assert_eq!(record.education, vec!["Master of Science in Computer Science"]);
        assert_eq!(record.skills, vec!["Rust, Kafka", "Also comfortable with Docker"]);
    }

    #[test]
    fn test_no_headers_gives_empty_lists() {
        let record = RecordAssembler::default().assemble(&doc("Hello there, nothing structured."));
        assert!(record.education.is_empty());
        assert!(record.work_experience.is_empty());
        assert!(record.skills.is_empty());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["education"], serde_json::json!([]));
    }

    #[test]
    fn test_supplement_appends_without_dedup() {
        let assembler = RecordAssembler::default().with_supplement(PatternMatcher::new(tagger()));
        let record = assembler.assemble(&doc(RESUME));
        assert_eq!(
            record.work_experience,
            vec!["Backend Engineer at Acme Corp", "Backend Engineer at Acme Corp"]
        );
        assert_eq!(
            record.education,
            vec!["Master of Science in Computer Science", "Master of Science"]
        );
        assert_eq!(
            record.skills,
            vec!["Rust, Kafka", "Also comfortable with Docker", "Rust", "Kafka", "Docker"]
        );
    }

    #[test]
    fn test_supplement_never_overrides_regex_name() {
        let assembler = RecordAssembler::default().with_supplement(PatternMatcher::new(tagger()));
        let record = assembler.assemble(&doc("Ada Lovelace\nCharles Babbage Analytical"));
        assert_eq!(record.name.as_deref(), Some("Ada Lovelace"));
    }

    struct NoName;

    impl NameExtractor for NoName {
        fn find(&self, _text: &str) -> Option<(usize, usize)> {
            None
        }
    }

    #[test]
    fn test_supplement_fills_missing_name() {
        let entities = EntityExtractor::new(Arc::new(NoName));
        let assembler = RecordAssembler::new(entities, SectionSegmenter::default())
            .with_supplement(PatternMatcher::new(tagger()));
        let record = assembler.assemble(&doc("Grace Brewster Hopper\ngrace@navy.mil"));
        assert_eq!(record.name.as_deref(), Some("Grace Brewster Hopper"));
        assert_eq!(record.email.as_deref(), Some("grace@navy.mil"));
    }
}
