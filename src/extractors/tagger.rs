// src/extractors/tagger.rs
//! Token tagging used by the tagger-based name strategy and the pattern matcher.
//!
//! A tagger is built once at start-up and shared read-only (`Arc<dyn PosTagger>`);
//! components that need it receive the handle at construction.

use crate::extractors::sanitize::ENGLISH_STOP_WORDS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]+(?:[.'][A-Za-z]+)*|\d+|\S")
        .expect("Failed to compile TOKEN_RE")
});

/// Capitalised words that are not names in résumé text.
const COMMON_CAPITALISED: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday", "present", "current", "education", "experience",
    "work", "history", "skills", "summary", "objective", "profile", "projects", "contact",
    "email", "phone", "mobile", "address", "references", "resume", "curriculum", "vitae",
    "languages", "certifications", "interests", "awards", "publications",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    ProperNoun,
    Word,
    Number,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    /// Byte range in the tagged text
    pub start: usize,
    pub end: usize,
    /// Zero-based line the token sits on
    pub line: usize,
    pub tag: Tag,
}

impl TaggedToken {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Rule-based tagger: a capitalised, not fully upper-case word is a proper noun
/// unless its lower-case form is in the common-word lexicon.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    common: HashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        let common = ENGLISH_STOP_WORDS
            .iter()
            .chain(COMMON_CAPITALISED)
            .map(|w| w.to_string())
            .collect();
        Self { common }
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds words that should never be tagged as proper nouns.
    pub fn with_common_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn classify(&self, token: &str) -> Tag {
        let mut chars = token.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => Tag::Number,
            Some(c) if c.is_ascii_uppercase() => {
                let shouting = token.len() > 1 && !token.chars().any(|c| c.is_ascii_lowercase());
                if shouting || self.common.contains(&token.to_lowercase()) {
                    Tag::Word
                } else {
                    Tag::ProperNoun
                }
            }
            Some(c) if c.is_ascii_alphabetic() => Tag::Word,
            _ => Tag::Punct,
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tokens = Vec::new();
        for (line_no, (offset, line)) in line_offsets(text).enumerate() {
            for m in TOKEN_RE.find_iter(line) {
                tokens.push(TaggedToken {
                    text: m.as_str().to_string(),
                    start: offset + m.start(),
                    end: offset + m.end(),
                    line: line_no,
                    tag: self.classify(m.as_str()),
                });
            }
        }
        tracing::trace!("Tagged {} tokens", tokens.len());
        tokens
    }
}

/// Maximal runs of proper-noun tokens that stay on one line, as token index ranges.
pub fn proper_noun_runs(tokens: &[TaggedToken]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for i in 0..=tokens.len() {
        let continues = match (start, tokens.get(i)) {
            (Some(s), Some(tok)) => tok.tag == Tag::ProperNoun && tok.line == tokens[s].line,
            _ => false,
        };
        if continues {
            continue;
        }
        if let Some(s) = start.take() {
            runs.push(s..i);
        }
        if tokens.get(i).is_some_and(|tok| tok.tag == Tag::ProperNoun) {
            start = Some(i);
        }
    }
    runs
}

/// Joins the tokens of `range` back into text, as written in the source.
pub fn span_text(text: &str, tokens: &[TaggedToken], range: Range<usize>) -> String {
    match (tokens.get(range.start), range.end.checked_sub(1).and_then(|i| tokens.get(i))) {
        (Some(first), Some(last)) if range.start < range.end => text[first.start..last.end].to_string(),
        _ => String::new(),
    }
}

fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line)
    })
}
