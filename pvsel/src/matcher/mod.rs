//! Evaluating selectors against resource records.
//!
//! The matcher only sees records through [`FieldResolver`]: each resource kind
//! names the fields it supports, reads their values, and picks a
//! [`Comparison`] strategy per field.

mod comparison;

pub use comparison::{split_tags, Comparison, TAG_DELIMITER};

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::selector::{Condition, Selector};
use crate::{Error, Result};

/// A field value read off a record; `None` when the record has no value.
pub type Resolved<'r> = Option<Cow<'r, str>>;

/// Per-resource-kind field table.
pub trait FieldResolver {
    /// Resource kind name used in error messages (e.g. "virtual machine").
    const KIND: &'static str;

    /// The closed set of field names this kind supports, in display order.
    const FIELDS: &'static [&'static str];

    /// Fields that need something other than [`Comparison::Scalar`].
    const COMPARISONS: &'static [(&'static str, Comparison)] = &[];

    /// Read a field. Returns `None` if the field is not supported.
    fn resolve(&self, field: &str) -> Option<Resolved<'_>>;

    /// Comparison strategy for a field.
    fn comparison(field: &str) -> Comparison {
        Self::COMPARISONS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, comparison)| *comparison)
            .unwrap_or_default()
    }

    fn supports(field: &str) -> bool {
        Self::FIELDS.contains(&field)
    }
}

fn unsupported<R: FieldResolver>(field: &str) -> Error {
    Error::UnsupportedField {
        field: field.to_string(),
        kind: R::KIND,
        supported: R::FIELDS,
    }
}

/// A selector bound to one resource kind.
///
/// Borrows the selector; evaluation never mutates it or the records.
#[derive(Debug)]
pub struct ResourceFilter<'s, R> {
    selector: &'s Selector,
    _kind: PhantomData<fn(&R)>,
}

impl<R> Clone for ResourceFilter<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceFilter<'_, R> {}

impl<'s, R: FieldResolver> ResourceFilter<'s, R> {
    pub fn new(selector: &'s Selector) -> Self {
        Self {
            selector,
            _kind: PhantomData,
        }
    }

    pub fn selector(&self) -> &'s Selector {
        self.selector
    }

    /// Check every condition's field against this kind's field table.
    pub fn validate(&self) -> Result<()> {
        match self
            .selector
            .conditions()
            .iter()
            .find(|c| !R::supports(c.field()))
        {
            Some(condition) => Err(unsupported::<R>(condition.field())),
            None => Ok(()),
        }
    }

    /// True iff every condition holds for `record`.
    pub fn matches(&self, record: &R) -> Result<bool> {
        self.validate()?;
        self.matches_validated(record)
    }

    /// Keep the records the selector matches, in their original order.
    ///
    /// Fields are validated before any record is examined, so an unsupported
    /// field is reported even for an empty collection.
    pub fn apply<'r>(&self, records: &'r [R]) -> Result<Vec<&'r R>> {
        self.validate()?;

        let mut selected = Vec::with_capacity(records.len());
        for record in records {
            if self.matches_validated(record)? {
                selected.push(record);
            }
        }

        tracing::debug!(
            kind = R::KIND,
            selector = %self.selector,
            total = records.len(),
            selected = selected.len(),
            "applied selector"
        );
        Ok(selected)
    }

    /// Like [`apply`](Self::apply), but takes ownership of the records.
    pub fn apply_owned<I>(&self, records: I) -> Result<Vec<R>>
    where
        I: IntoIterator<Item = R>,
    {
        self.validate()?;

        let mut selected = Vec::new();
        for record in records {
            if self.matches_validated(&record)? {
                selected.push(record);
            }
        }
        Ok(selected)
    }

    fn matches_validated(&self, record: &R) -> Result<bool> {
        for condition in self.selector.conditions() {
            if !condition_matches(record, condition)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn condition_matches<R: FieldResolver>(record: &R, condition: &Condition) -> Result<bool> {
    let field = condition.field();
    let value = record
        .resolve(field)
        .ok_or_else(|| unsupported::<R>(field))?;

    let matched = R::comparison(field).matches(value.as_deref(), condition.predicate());
    tracing::trace!(field, condition = %condition, matched, "evaluated condition");
    Ok(matched)
}

impl Selector {
    /// Bind this selector to a resource kind.
    pub fn filter<R: FieldResolver>(&self) -> ResourceFilter<'_, R> {
        ResourceFilter::new(self)
    }

    /// True iff every condition holds for `record`.
    pub fn matches<R: FieldResolver>(&self, record: &R) -> Result<bool> {
        self.filter::<R>().matches(record)
    }

    /// Keep the records this selector matches.
    pub fn apply<'r, R: FieldResolver>(&self, records: &'r [R]) -> Result<Vec<&'r R>> {
        self.filter::<R>().apply(records)
    }
}

#[cfg(test)]
mod tests;
