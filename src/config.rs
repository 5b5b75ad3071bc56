// src/config.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no table policy is passed on the command line.
pub const TABLE_POLICY_ENV: &str = "RESUME_TABLE_POLICY";

/// How a missing table cell is written out after cleaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingPolicy {
    /// Empty and whitespace-only cells become `null`.
    #[default]
    Null,
    /// Missing cells are filled with `""`.
    EmptyString,
}

impl MissingPolicy {
    /// Reads `RESUME_TABLE_POLICY` (`null` / `empty-string`), if set and valid.
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(TABLE_POLICY_ENV).ok()?;
        match Self::from_str(raw.trim(), true) {
            Ok(policy) => Some(policy),
            Err(e) => {
                tracing::warn!("Ignoring invalid {}='{}': {}", TABLE_POLICY_ENV, raw, e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NameStrategy {
    /// First `Titlecase Titlecase` pair on a single line.
    #[default]
    Titlecase,
    /// First run of 2–4 proper-noun tokens reported by the tagger.
    Tagger,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EducationStrategy {
    /// Lines under the EDUCATION header.
    #[default]
    Header,
    /// Degree-qualifier sweep over the whole text.
    Keyword,
}

/// Knobs that decide which extractor implementations a `DocumentProcessor` is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub name_strategy: NameStrategy,
    pub education_strategy: EducationStrategy,
    pub missing_policy: MissingPolicy,
    /// Append tagger pattern matches to the section lists.
    pub tagger_supplement: bool,
}

impl ExtractorConfig {
    /// True when any configured component needs a tagger handle.
    pub fn needs_tagger(&self) -> bool {
        self.tagger_supplement || self.name_strategy == NameStrategy::Tagger
    }
}
