//! Selector micro-language.
//!
//! # Syntax Overview
//!
//! A selector is a comma-separated list of conditions, all of which must hold:
//!
//! - **Equality**: `status=running`
//! - **Inequality**: `status!=stopped`
//! - **Wildcard**: `name=~web-*` (`*` matches any run of characters)
//! - **Set membership**: `status in (running,paused)`
//!
//! Commas inside a parenthesized group do not split conditions. Several selector
//! strings (one per repeated `-l` flag) merge into a single AND list.

mod condition;
mod glob;
mod parser;

pub use condition::{Condition, Operator, Predicate};
pub use glob::Glob;
pub use parser::{parse_condition, parse_selector, split_fragments};

use crate::Result;

/// An immutable, ordered list of conditions that are logically ANDed.
///
/// An empty selector matches every resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    conditions: Vec<Condition>,
}

impl Selector {
    /// Parse a single selector string.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_all([input])
    }

    /// Parse several selector strings and concatenate their conditions in call order.
    ///
    /// Fails on the first invalid fragment; no partial selector is produced.
    pub fn parse_all<I, S>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conditions = Vec::new();
        for input in inputs {
            conditions.extend(parse_selector(input.as_ref())?);
        }
        tracing::debug!(conditions = conditions.len(), "built selector");
        Ok(Self { conditions })
    }

    /// Build a new selector holding this selector's conditions followed by `other`'s.
    pub fn and(&self, other: &Selector) -> Self {
        let mut conditions = Vec::with_capacity(self.conditions.len() + other.conditions.len());
        conditions.extend_from_slice(&self.conditions);
        conditions.extend_from_slice(&other.conditions);
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Check if this selector matches everything (no conditions).
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

impl From<Vec<Condition>> for Selector {
    fn from(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }
}

impl std::str::FromStr for Selector {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}
