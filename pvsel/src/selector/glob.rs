//! Anchored `*`-only wildcard patterns.

use regex::Regex;

use crate::{Error, Result};

/// A wildcard pattern where `*` matches any run of characters (including none)
/// and every other character matches itself.
///
/// Matching is anchored to the whole string and case-sensitive. There is no
/// escape for a literal `*` and no single-character wildcard.
#[derive(Debug, Clone)]
pub struct Glob {
    source: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let body = source
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        // (?s) so `*` also spans newlines
        let regex = Regex::new(&format!("(?s)^(?:{})$", body)).map_err(|e| Error::Pattern {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self { source, regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Glob {}

impl std::fmt::Display for Glob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
