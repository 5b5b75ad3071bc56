// src/extractors/matcher.rs
//! Token-sequence rules over tagger output. Results are supplementary: the record
//! assembler appends them to the header-block sections and only uses the name when the
//! regex extractor found none.

use crate::extractors::tagger::{proper_noun_runs, span_text, PosTagger, Tag, TaggedToken};
use std::collections::HashSet;
use std::sync::Arc;

const DEGREE_WORDS: &[&str] = &[
    "bachelor", "bachelors", "master", "masters", "doctorate", "phd", "ph.d", "bsc", "b.sc",
    "msc", "m.sc", "mba", "btech", "b.tech", "mtech", "m.tech", "diploma", "certificate",
];

const DEGREE_LINKERS: &[&str] = &["of", "in"];

const ROLE_LINKERS: &[&str] = &["at", "@"];

/// Single-token skills recognised out of the box. "Go" is left out, it is an ordinary verb.
pub const DEFAULT_SKILLS: &[&str] = &[
    "rust", "python", "java", "javascript", "typescript", "golang", "scala", "kotlin", "swift",
    "ruby", "php", "sql", "postgresql", "mysql", "mongodb", "redis", "kafka", "spark",
    "hadoop", "docker", "kubernetes", "terraform", "aws", "gcp", "azure", "linux", "git",
    "react", "django", "flask", "pandas", "tensorflow", "pytorch", "html", "css", "excel",
    "tableau",
];

const MIN_NAME_TOKENS: usize = 2;
const MAX_NAME_TOKENS: usize = 4;

/// Everything the pattern rules found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedEntities {
    pub name: Option<String>,
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Clone)]
pub struct PatternMatcher {
    tagger: Arc<dyn PosTagger>,
    skills: HashSet<String>,
}

impl PatternMatcher {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            tagger,
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Adds skills to the lexicon. Matching is case-insensitive.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills
            .extend(skills.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    pub fn matches(&self, text: &str) -> TaggedEntities {
        let tokens = self.tagger.tag(text);
        let runs = proper_noun_runs(&tokens);

        let name = runs
            .iter()
            .find(|run| (MIN_NAME_TOKENS..=MAX_NAME_TOKENS).contains(&run.len()))
            .map(|run| span_text(text, &tokens, run.clone()));

        let found = TaggedEntities {
            name,
            education: degree_phrases(text, &tokens),
            work_experience: role_phrases(text, &tokens, &runs),
            skills: self.skill_mentions(&tokens),
        };
        tracing::debug!(
            "Pattern matcher: name={} education={} work_experience={} skills={}",
            found.name.is_some(),
            found.education.len(),
            found.work_experience.len(),
            found.skills.len()
        );
        found
    }

    fn skill_mentions(&self, tokens: &[TaggedToken]) -> Vec<String> {
        let mut seen = HashSet::new();
        tokens
            .iter()
            .filter(|tok| self.skills.contains(&tok.lower()))
            .filter(|tok| seen.insert(tok.lower()))
            .map(|tok| tok.text.clone())
            .collect()
    }
}

/// DEGREE (of|in)? PROPN+ on one line, e.g. "Bachelor of Science", "MSc Physics".
fn degree_phrases(text: &str, tokens: &[TaggedToken]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if !DEGREE_WORDS.contains(&tokens[i].lower().as_str()) {
            i += 1;
            continue;
        }
        let line = tokens[i].line;
        let mut j = i + 1;
        if tokens
            .get(j)
            .is_some_and(|tok| tok.line == line && DEGREE_LINKERS.contains(&tok.lower().as_str()))
        {
            j += 1;
        }
        let field_start = j;
        while tokens
            .get(j)
            .is_some_and(|tok| tok.line == line && tok.tag == Tag::ProperNoun)
        {
            j += 1;
        }
        if j > field_start {
            phrases.push(span_text(text, tokens, i..j));
            i = j;
        } else {
            i += 1;
        }
    }
    phrases
}

/// PROPN+ (at|@) PROPN+ on one line, e.g. "Software Engineer at Acme Corp".
fn role_phrases(text: &str, tokens: &[TaggedToken], runs: &[std::ops::Range<usize>]) -> Vec<String> {
    runs.windows(2)
        .filter(|pair| {
            let (role, org) = (&pair[0], &pair[1]);
            org.start == role.end + 1
                && tokens[role.end].line == tokens[role.start].line
                && tokens[org.start].line == tokens[role.start].line
                && ROLE_LINKERS.contains(&tokens[role.end].lower().as_str())
        })
        .map(|pair| span_text(text, tokens, pair[0].start..pair[1].end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::tagger::LexiconTagger;

    fn matcher() -> PatternMatcher {
        PatternMatcher::new(Arc::new(LexiconTagger::new()))
    }

    #[test]
    fn test_degree_phrases() {
        let found = matcher().matches("Bachelor of Science, 2014\nMSc Robotics\nDiploma");
        assert_eq!(found.education, vec!["Bachelor of Science", "MSc Robotics"]);
    }

    #[test]
    fn test_role_at_organisation() {
        let found = matcher().matches("Senior Engineer at Acme Corp (2019 - 2023)\nIntern @ Initech");
        assert_eq!(found.work_experience, vec!["Senior Engineer at Acme Corp", "Intern @ Initech"]);
    }

    #[test]
    fn test_role_does_not_span_lines() {
        let found = matcher().matches("Senior Engineer at\nAcme Corp");
        assert!(found.work_experience.is_empty());
    }

    #[test]
    fn test_skills_from_lexicon_once_each() {
        let found = matcher().matches("Rust and Python. More rust, some Docker; go home");
        assert_eq!(found.skills, vec!["Rust", "Python", "Docker"]);
    }

    #[test]
    fn test_extra_skills() {
        let found = matcher().with_skills(["Elixir"]).matches("elixir");
        assert_eq!(found.skills, vec!["elixir"]);
    }

    #[test]
    fn test_name_is_first_short_proper_noun_run() {
        let found = matcher().matches("CURRICULUM VITAE\nAlan Mathison Turing\nBletchley Park");
        assert_eq!(found.name.as_deref(), Some("Alan Mathison Turing"));
    }

    #[test]
    fn test_plain_prose_finds_nothing() {
        let found = matcher().matches("worked on things and shipped them");
        assert_eq!(found, TaggedEntities::default());
    }
}
