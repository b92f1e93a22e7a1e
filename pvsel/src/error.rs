//! Error types for selector parsing and evaluation.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "invalid selector \"{0}\": expected <field>=<value>, <field>!=<value>, \
         <field>=~<pattern> or <field> in (<values>)"
    )]
    Syntax(String),

    #[error("unsupported field \"{field}\" for {kind}; supported fields: {}", .supported.join(", "))]
    UnsupportedField {
        field: String,
        kind: &'static str,
        supported: &'static [&'static str],
    },

    #[error("invalid wildcard pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// True for errors raised while building a selector (before any evaluation).
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_) | Error::Pattern { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
