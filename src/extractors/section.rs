// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

// --- Constants ---
// Header lines are short labels, not sentences
const MAX_HEADER_WORDS: usize = 4;

// --- Regex Patterns for Header Matching (Lazy Static) ---
// Letters, spaces, '&', '/', '-' only, checked after the trailing ':' is removed
static HEADER_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z &/\-]*$").expect("Failed to compile HEADER_SHAPE_RE")
});

// Every word of a header line must come from this list. Words mapped to a section
// decide which block the header opens; the rest only qualify it.
const HEADER_VOCABULARY: &[(&str, Option<SectionKind>)] = &[
    ("education", Some(SectionKind::Education)),
    ("academic", Some(SectionKind::Education)),
    ("skills", Some(SectionKind::Skills)),
    ("qualifications", Some(SectionKind::Skills)),
    ("competencies", Some(SectionKind::Skills)),
    ("work", Some(SectionKind::WorkExperience)),
    ("employment", Some(SectionKind::WorkExperience)),
    ("experience", Some(SectionKind::WorkExperience)),
    ("history", Some(SectionKind::WorkExperience)),
    ("background", None),
    ("professional", None),
    ("technical", None),
    ("core", None),
    ("key", None),
    ("and", None),
];

// Precedence when a header names more than one section
const SECTION_PRECEDENCE: [SectionKind; 3] =
    [SectionKind::Education, SectionKind::Skills, SectionKind::WorkExperience];

// Degree qualifier plus the rest of its clause
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelors?|masters?|doctorate|ph\.?d|[bm]\.?sc|[bm]\.?tech|[bm]\.?eng|mba|diploma|certificate)\b[^,;|\n]*",
    )
    .expect("Failed to compile DEGREE_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    WorkExperience,
    Skills,
}

/// Lines captured per section. Lines are trimmed and blank lines are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
    pub skills: Vec<String>,
}

impl Sections {
    fn block_mut(&mut self, kind: SectionKind) -> &mut Vec<String> {
        match kind {
            SectionKind::Education => &mut self.education,
            SectionKind::WorkExperience => &mut self.work_experience,
            SectionKind::Skills => &mut self.skills,
        }
    }
}

/// Byte span of a recognised header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SectionKind,
}

// --- Education Strategies ---

/// Decides what goes into the education list. A segmenter holds exactly one.
pub trait EducationExtractor: Send + Sync {
    /// `header_block` is what the EDUCATION header captured in `text`.
    fn extract(&self, text: &str, header_block: &[String]) -> Vec<String>;
}

/// Lines under the EDUCATION header.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBlockEducation;

impl EducationExtractor for HeaderBlockEducation {
    fn extract(&self, _text: &str, header_block: &[String]) -> Vec<String> {
        header_block.to_vec()
    }
}

/// Every degree qualifier found anywhere in the text, each with the rest of its clause.
/// Noisier than the header block: "Scrum Master" in a job title counts too.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeKeywordEducation;

impl EducationExtractor for DegreeKeywordEducation {
    fn extract(&self, text: &str, _header_block: &[String]) -> Vec<String> {
        DEGREE_RE
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

// --- Main Segmenter Structure ---
#[derive(Clone)]
pub struct SectionSegmenter {
    education: Arc<dyn EducationExtractor>,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(Arc::new(HeaderBlockEducation))
    }
}

impl SectionSegmenter {
    pub fn new(education: Arc<dyn EducationExtractor>) -> Self {
        Self { education }
    }

    /// Splits résumé text into education, work experience and skills lines.
    ///
    /// A block runs from the line after its header to the next recognised header or the
    /// end of the text. A section whose header appears twice gets both blocks, in order.
    pub fn segment(&self, text: &str) -> Sections {
        let mut sections = Sections::default();
        let mut current: Option<SectionKind> = None;

        for line in text.lines() {
            if let Some(kind) = classify_header(line) {
                tracing::trace!("Header {:?}: '{}'", kind, line.trim());
                current = Some(kind);
                continue;
            }
            let Some(kind) = current else { continue };
            let line = line.trim();
            if !line.is_empty() {
                sections.block_mut(kind).push(line.to_string());
            }
        }

        sections.education = self.education.extract(text, &sections.education);

        tracing::debug!(
            "Segmented sections: education={} work_experience={} skills={}",
            sections.education.len(),
            sections.work_experience.len(),
            sections.skills.len()
        );
        sections
    }

    /// Byte spans of every header line, in document order.
    pub fn headers(&self, text: &str) -> Vec<HeaderSpan> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for line in text.split('\n') {
            if let Some(kind) = classify_header(line) {
                let lead = line.len() - line.trim_start().len();
                spans.push(HeaderSpan {
                    start: offset + lead,
                    end: offset + line.trim_end().len(),
                    kind,
                });
            }
            offset += line.len() + 1;
        }
        spans
    }
}

/// Returns the section a line opens, if it is a header line.
fn classify_header(line: &str) -> Option<SectionKind> {
    let label = line.trim();
    let label = label.strip_suffix(':').unwrap_or(label).trim_end();

    if !HEADER_SHAPE_RE.is_match(label) || label.split_whitespace().count() > MAX_HEADER_WORDS {
        return None;
    }

    let mut kinds = Vec::new();
    for word in label.split(|c: char| c.is_whitespace() || c == '&' || c == '/' || c == '-').filter(|w| !w.is_empty()) {
        let word = word.to_lowercase();
        let (_, kind) = HEADER_VOCABULARY.iter().find(|(vocab, _)| *vocab == word)?;
        kinds.extend(*kind);
    }

    SECTION_PRECEDENCE.into_iter().find(|kind| kinds.contains(kind))
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe
jane@doe.io

Work Experience:
  Software Engineer at Acme Corp

  Built billing pipeline in Rust
EDUCATION
B.Sc. Computer Science, MIT, 2016
Technical Skills
Rust, Go, SQL
";

    #[test]
    fn test_header_blocks_until_next_header() {
        let sections = SectionSegmenter::default().segment("EDUCATION\nBSc CS\nSKILLS\nPython, Go");
        assert_eq!(sections.education, vec!["BSc CS"]);
        assert_eq!(sections.skills, vec!["Python, Go"]);
        assert!(sections.work_experience.is_empty());
    }

    #[test]
    fn test_blank_lines_dropped_and_lines_trimmed() {
        let sections = SectionSegmenter::default().segment(RESUME);
        assert_eq!(
            sections.work_experience,
            vec!["Software Engineer at Acme Corp", "Built billing pipeline in Rust"]
        );
        assert_eq!(sections.education, vec!["B.Sc. Computer Science, MIT, 2016"]);
        assert_eq!(sections.skills, vec!["Rust, Go, SQL"]);
    }

    #[test]
    fn test_header_words_case_insensitive() {
        for header in ["work", "Experience", "EMPLOYMENT HISTORY", "Professional Experience:"] {
            let text = format!("{header}\nAcme Corp");
            let sections = SectionSegmenter::default().segment(&text);
            assert_eq!(sections.work_experience, vec!["Acme Corp"], "header: {header}");
        }
    }

    #[test]
    fn test_sentences_are_not_headers() {
        let text = "SKILLS\nRust\n5 years of work experience in distributed systems\nI love experience design.";
        let sections = SectionSegmenter::default().segment(text);
        assert_eq!(sections.skills.len(), 3);
        assert!(sections.work_experience.is_empty());
    }

    #[test]
    fn test_content_lines_with_header_words_stay_in_block() {
        let text = "EXPERIENCE\nSocial Work Intern\nCity Council\nEDUCATION\nBachelor of Arts\nArt History\nYale University\nSKILLS\nRust";
        let sections = SectionSegmenter::default().segment(text);
        assert_eq!(sections.work_experience, vec!["Social Work Intern", "City Council"]);
        assert_eq!(sections.education, vec!["Bachelor of Arts", "Art History", "Yale University"]);
        assert_eq!(sections.skills, vec!["Rust"]);
    }

    #[test]
    fn test_header_vocabulary() {
        let cases = [
            ("Academic Background", Some(SectionKind::Education)),
            ("Skills & Qualifications", Some(SectionKind::Skills)),
            ("Education and Skills", Some(SectionKind::Education)),
            ("Work / Employment History", Some(SectionKind::WorkExperience)),
            ("Key Competencies:", Some(SectionKind::Skills)),
            ("Professional", None),
            ("Art History", None),
            ("Soft Skills", None),
        ];
        for (line, expected) in cases {
            assert_eq!(classify_header(line), expected, "line: {line}");
        }
    }

    #[test]
    fn test_repeated_header_appends_blocks() {
        let text = "SKILLS\nRust\nEDUCATION\nMSc\nSKILLS\nGo";
        let sections = SectionSegmenter::default().segment(text);
        assert_eq!(sections.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_no_headers_gives_empty_sequences() {
        let sections = SectionSegmenter::default().segment("just a paragraph of prose\nwith two lines");
        assert_eq!(sections, Sections::default());
    }

    #[test]
    fn test_degree_keyword_strategy_sweeps_whole_text() {
        let segmenter = SectionSegmenter::new(Arc::new(DegreeKeywordEducation));
        let text = "Summary\nHolds a Master of Science in AI; PhD candidate\nSKILLS\nRust";
        let sections = segmenter.segment(text);
        assert_eq!(sections.education, vec!["Master of Science in AI", "PhD candidate"]);
        // Other sections still come from header blocks
        assert_eq!(sections.skills, vec!["Rust"]);
    }

    #[test]
    fn test_degree_keyword_strategy_ignores_header_block() {
        let segmenter = SectionSegmenter::new(Arc::new(DegreeKeywordEducation));
        let sections = segmenter.segment("EDUCATION\nStanford University\nB.Sc Physics, 2012");
        assert_eq!(sections.education, vec!["B.Sc Physics"]);
    }

    #[test]
    fn test_header_spans() {
        let text = "Jane\n  SKILLS:  \nRust";
        let spans = SectionSegmenter::default().headers(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SectionKind::Skills);
        assert_eq!(&text[spans[0].start..spans[0].end], "SKILLS:");
    }
}
