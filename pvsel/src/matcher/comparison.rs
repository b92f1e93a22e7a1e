//! Comparison strategies: how an extracted value is tested against a predicate.

use crate::selector::Predicate;

/// Separator for tag lists stored as a single string.
pub const TAG_DELIMITER: char = ';';

/// How a field's value is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Compare the whole value as one string. Absent values compare as "".
    #[default]
    Scalar,
    /// Treat the value as a `;`-separated set of tags.
    TagList,
}

impl Comparison {
    pub fn matches(self, value: Option<&str>, predicate: &Predicate) -> bool {
        match self {
            Comparison::Scalar => scalar_matches(value.unwrap_or_default(), predicate),
            Comparison::TagList => tags_match(value, predicate),
        }
    }
}

fn scalar_matches(value: &str, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Eq(expected) => value == expected,
        Predicate::NotEq(expected) => value != expected,
        Predicate::Match(glob) => glob.is_match(value),
        Predicate::In(options) => options.iter().any(|o| o == value),
    }
}

fn tags_match(value: Option<&str>, predicate: &Predicate) -> bool {
    let mut tags = split_tags(value.unwrap_or_default());
    match predicate {
        Predicate::Eq(expected) => tags.any(|t| t == expected),
        Predicate::NotEq(expected) => !tags.any(|t| t == expected),
        Predicate::Match(glob) => tags.any(|t| glob.is_match(t)),
        Predicate::In(options) => tags.any(|t| options.iter().any(|o| o == t)),
    }
}

/// Split a tag string into trimmed tags.
///
/// A blank string is an empty list. Otherwise every `;`-separated element is
/// kept, including empty ones (`"a;;b"` has three tags).
pub fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
    let blank = tags.trim().is_empty();
    tags.split(TAG_DELIMITER)
        .map(str::trim)
        .take(if blank { 0 } else { usize::MAX })
}
