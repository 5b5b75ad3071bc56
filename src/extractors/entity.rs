// src/extractors/entity.rs

// --- Imports ---
use crate::extractors::tagger::{proper_noun_runs, PosTagger};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

// --- Regex Patterns (Lazy Static) ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

// Optional country code, optional parentheses around the area code, 3-3-4 grouping.
// Separators never include a line break
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-. \t]?)?\(?\d{3}\)?[-. \t]?\d{3}[-. \t]?\d{4}")
        .expect("Failed to compile PHONE_RE")
});

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+").expect("Failed to compile LINK_RE")
});

// Two title-case words on the same line
static TITLECASE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\p{Lu}\p{Ll}+)[ \t]+(\p{Lu}\p{Ll}+)\b")
        .expect("Failed to compile TITLECASE_NAME_RE")
});

const MIN_NAME_TOKENS: usize = 2;
const MAX_NAME_TOKENS: usize = 4;

// --- Data Structures ---
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Name,
    Email,
    Phone,
    Link,
}

/// Byte span of a detected entity, for annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
}

// --- Name Strategies ---

/// Finds the candidate's name. Only the first hit counts.
pub trait NameExtractor: Send + Sync {
    fn find(&self, text: &str) -> Option<(usize, usize)>;

    fn extract(&self, text: &str) -> Option<String> {
        self.find(text).map(|(start, end)| text[start..end].to_string())
    }
}

/// First `Titlecase Titlecase` pair that sits on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitlecaseNameExtractor;

impl NameExtractor for TitlecaseNameExtractor {
    fn find(&self, text: &str) -> Option<(usize, usize)> {
        TITLECASE_NAME_RE.find(text).map(|m| (m.start(), m.end()))
    }
}

/// First run of 2–4 consecutive proper nouns on one line. Longer runs are skipped,
/// they are usually job titles or organisation names.
#[derive(Clone)]
pub struct TaggerNameExtractor {
    tagger: Arc<dyn PosTagger>,
}

impl TaggerNameExtractor {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self { tagger }
    }
}

impl NameExtractor for TaggerNameExtractor {
    fn find(&self, text: &str) -> Option<(usize, usize)> {
        let tokens = self.tagger.tag(text);
        proper_noun_runs(&tokens)
            .into_iter()
            .find(|run| (MIN_NAME_TOKENS..=MAX_NAME_TOKENS).contains(&run.len()))
            .map(|run| (tokens[run.start].start, tokens[run.end - 1].end))
    }
}

// --- Main Extractor Structure ---
#[derive(Clone)]
pub struct EntityExtractor {
    name: Arc<dyn NameExtractor>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(Arc::new(TitlecaseNameExtractor))
    }
}

impl EntityExtractor {
    pub fn new(name: Arc<dyn NameExtractor>) -> Self {
        Self { name }
    }

    /// Pulls name, email, phone and links out of raw text. Nothing found is `None` / empty.
    pub fn extract(&self, text: &str) -> Entities {
        let entities = Entities {
            name: self.name.extract(text),
            email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
            phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
            links: LINK_RE.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        };
        tracing::debug!(
            "Entities: name={} email={} phone={} links={}",
            entities.name.is_some(),
            entities.email.is_some(),
            entities.phone.is_some(),
            entities.links.len()
        );
        entities
    }

    /// Positions of everything `extract` would report, sorted by start.
    pub fn spans(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut push = |(start, end): (usize, usize), kind| spans.push(EntitySpan { start, end, kind });

        if let Some(pos) = self.name.find(text) {
            push(pos, EntityKind::Name);
        }
        if let Some(m) = EMAIL_RE.find(text) {
            push((m.start(), m.end()), EntityKind::Email);
        }
        if let Some(m) = PHONE_RE.find(text) {
            push((m.start(), m.end()), EntityKind::Phone);
        }
        for m in LINK_RE.find_iter(text) {
            push((m.start(), m.end()), EntityKind::Link);
        }

        spans.sort_by_key(|s| s.start);
        spans
    }
}
