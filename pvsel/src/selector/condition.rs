//! Parsed selector conditions.

use super::Glob;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` equals
    Eq,
    /// `!=` not equals
    NotEq,
    /// `=~` wildcard match
    Match,
    /// `in (...)` set membership
    In,
}

/// Operator together with its operand.
///
/// `In` always carries a list; the other operators always carry a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(String),
    NotEq(String),
    Match(Glob),
    In(Vec<String>),
}

impl Predicate {
    pub fn operator(&self) -> Operator {
        match self {
            Predicate::Eq(_) => Operator::Eq,
            Predicate::NotEq(_) => Operator::NotEq,
            Predicate::Match(_) => Operator::Match,
            Predicate::In(_) => Operator::In,
        }
    }
}

/// A single `field <op> value` test within a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    field: String,
    predicate: Predicate,
}

impl Condition {
    pub fn new(field: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            field: field.into(),
            predicate,
        }
    }

    /// Field name, exactly as written (case-sensitive, unvalidated).
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.predicate.operator()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// The scalar operand, or `None` for set membership.
    pub fn value(&self) -> Option<&str> {
        match &self.predicate {
            Predicate::Eq(v) | Predicate::NotEq(v) => Some(v),
            Predicate::Match(glob) => Some(glob.as_str()),
            Predicate::In(_) => None,
        }
    }

    /// The list operand of a set-membership condition.
    pub fn values(&self) -> Option<&[String]> {
        match &self.predicate {
            Predicate::In(values) => Some(values),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Eq => write!(f, "="),
            Operator::NotEq => write!(f, "!="),
            Operator::Match => write!(f, "=~"),
            Operator::In => write!(f, "in"),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.predicate {
            Predicate::In(values) => write!(f, "{} in ({})", self.field, values.join(",")),
            Predicate::Match(glob) => write!(f, "{}=~{}", self.field, glob),
            // `field=~v` would read back as a wildcard match
            Predicate::Eq(v) if v.starts_with('~') => write!(f, "{}= {}", self.field, v),
            Predicate::Eq(v) => write!(f, "{}={}", self.field, v),
            Predicate::NotEq(v) => write!(f, "{}!={}", self.field, v),
        }
    }
}
