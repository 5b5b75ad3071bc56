// src/extractors/job_match.rs
use crate::document::models::JobMatchResult;
use std::collections::HashSet;

/// Splits a job description into required skill phrases: newlines count as commas,
/// phrases are trimmed and lower-cased, empty ones dropped, repeats removed
/// (first occurrence wins).
pub fn required_skills(job_description: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    job_description
        .replace('\n', ",")
        .split(',')
        .map(|phrase| phrase.trim().to_lowercase())
        .filter(|phrase| !phrase.is_empty())
        .filter(|phrase| seen.insert(phrase.clone()))
        .collect()
}

/// Scores résumé text against the skills listed in a job description.
///
/// A skill matches when it is a substring of the lower-cased résumé text. This is plain
/// containment, so "go" matches inside "mango" and "java" inside "javascript".
/// The percentage is rounded to one decimal, halves to even (6.25 becomes 6.2).
pub fn match_job(job_description: &str, resume_text: &str) -> JobMatchResult {
    let required = required_skills(job_description);
    if required.is_empty() {
        tracing::debug!("Job description lists no skills");
        return JobMatchResult::default();
    }

    let haystack = resume_text.to_lowercase();
    let matching_skills: Vec<String> = required
        .iter()
        .filter(|skill| haystack.contains(skill.as_str()))
        .cloned()
        .collect();

    let ratio = matching_skills.len() as f64 / required.len() as f64;
    let match_percentage = (ratio * 1000.0).round_ties_even() / 10.0;

    tracing::debug!(
        "Job match: {}/{} skills ({}%)",
        matching_skills.len(),
        required.len(),
        match_percentage
    );
    JobMatchResult {
        match_percentage,
        matching_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_match_rounds_to_one_decimal() {
        let result = match_job("Python, Go, Rust", "experienced in python and rust development");
        assert_eq!(result.match_percentage, 66.7);
        assert_eq!(result.matching_skills, vec!["python", "rust"]);
    }

    #[test]
    fn test_half_rounds_to_even() {
        let skills: Vec<String> = (0..16).map(|i| format!("skill{i:02}")).collect();
        let result = match_job(&skills.join(", "), "only skill00 here");
        assert_eq!(result.matching_skills, vec!["skill00"]);
        assert_eq!(result.match_percentage, 6.2);
    }

    #[test]
    fn test_substring_containment_counts_embedded_words() {
        let result = match_job("Go", "i really like mango");
        assert_eq!(result.match_percentage, 100.0);
        assert_eq!(result.matching_skills, vec!["go"]);
    }

    #[test]
    fn test_empty_description_scores_zero() {
        for jd in ["", "  ,\n , "] {
            let result = match_job(jd, "python rust");
            assert_eq!(result.match_percentage, 0.0);
            assert!(result.matching_skills.is_empty());
        }
    }

    #[test]
    fn test_newlines_split_like_commas() {
        assert_eq!(
            required_skills("Rust\nDistributed Systems, SQL\n\nKubernetes"),
            vec!["rust", "distributed systems", "sql", "kubernetes"]
        );
    }

    #[test]
    fn test_duplicates_collapse_before_counting() {
        let result = match_job("Python, python , PYTHON\nSQL", "python only");
        assert_eq!(result.match_percentage, 50.0);
        assert_eq!(result.matching_skills, vec!["python"]);
    }

    #[test]
    fn test_order_follows_job_description() {
        let result = match_job("sql, rust, python", "python rust sql");
        assert_eq!(result.matching_skills, vec!["sql", "rust", "python"]);
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_multi_word_phrase_needs_exact_substring() {
        let result = match_job("machine learning, data", "learning machine data");
        assert_eq!(result.matching_skills, vec!["data"]);
        assert_eq!(result.match_percentage, 50.0);
    }
}
