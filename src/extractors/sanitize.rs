// src/extractors/sanitize.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:http|www)\S*").expect("Failed to compile URL_RE")
});

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9\s]").expect("Failed to compile NON_ALNUM_RE")
});

/// Standard English stop words (NLTK list).
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
    "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Reduces text to lower-case alphanumeric tokens without URLs or stop words,
/// joined by single spaces.
pub fn sanitize(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    let alnum = NON_ALNUM_RE.replace_all(&without_urls, "");
    let lowered = alnum.to_lowercase();

    lowered
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls_punctuation_case_and_stop_words() {
        let text = "I have BUILT the APIs at https://Acme.io/jobs and WWW.example.com, in Rust!";
        assert_eq!(sanitize(text), "built apis rust");
    }

    #[test]
    fn test_collapses_whitespace_across_lines() {
        assert_eq!(sanitize("Python\n\n  Go\tSQL  "), "python go sql");
    }

    #[test]
    fn test_punctuation_inside_words_is_removed_not_split() {
        // "C++" loses its pluses, "node.js" becomes a single token
        assert_eq!(sanitize("C++ and node.js"), "c nodejs");
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("The and of"), "");
    }

    #[test]
    fn test_is_deterministic() {
        let text = "Senior Engineer, 10+ years (remote)";
        assert_eq!(sanitize(text), sanitize(text));
        assert_eq!(sanitize(text), "senior engineer 10 years remote");
    }
}
