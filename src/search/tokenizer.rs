use super::error::SearchError;
use regex::Regex;

/// One whitespace-delimited query term compiled into a case-insensitive
/// "contains" matcher. Metacharacters in the term are escaped first, so
/// input like `.` or `*` matches literally.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    pub fn compile(term: &str) -> Self {
        let pattern = Regex::new(&format!("(?i){}", regex::escape(term))).unwrap();
        Self {
            term: term.to_string(),
            pattern,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// A list field matches if any element matches.
    pub fn matches_any(&self, items: &[String]) -> bool {
        items.iter().any(|item| self.pattern.is_match(item))
    }
}

/// Splits a raw query on runs of whitespace into compiled term matchers,
/// preserving order and duplicates. Blank input is rejected here so no
/// matcher ever runs with an empty term set.
pub fn tokenize_query(raw: &str) -> Result<Vec<TermMatcher>, SearchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    Ok(trimmed.split_whitespace().map(TermMatcher::compile).collect())
}
