//! Selector parser: fragment splitting and condition recognition.

use super::{Condition, Glob, Predicate};
use crate::{Error, Result};

/// Operators written between a field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Eq,
    NotEq,
    Match,
}

/// Binary operators, longest first so `!=` and `=~` are never read as `=`.
const BINARY_OPERATORS: &[(&str, BinaryOp)] = &[
    ("!=", BinaryOp::NotEq),
    ("=~", BinaryOp::Match),
    ("=", BinaryOp::Eq),
];

/// Parse a selector string into its conditions.
///
/// A blank string yields no conditions. Any fragment that is not a valid
/// condition (including an empty one) fails the whole parse.
pub fn parse_selector(input: &str) -> Result<Vec<Condition>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_fragments(input)
        .into_iter()
        .map(|fragment| parse_condition(fragment.trim()))
        .collect()
}

/// Split a selector into top-level fragments on `,`.
///
/// Commas inside a `(`...`)` group are kept in the current fragment. Parenthesis
/// balance is not checked here. Fragments are returned untrimmed.
pub fn split_fragments(input: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    if input.is_empty() {
        return fragments;
    }

    let mut start = 0;
    let mut depth: i32 = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                fragments.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    fragments.push(&input[start..]);
    fragments
}

/// Parse one trimmed fragment into a condition.
///
/// Set membership (`field in (a,b)`) is tried before the binary operators.
pub fn parse_condition(fragment: &str) -> Result<Condition> {
    if let Some((field, values)) = try_parse_membership(fragment) {
        return Ok(Condition::new(field, Predicate::In(values)));
    }

    if let Some((field, op, value)) = try_parse_binary(fragment) {
        let predicate = match op {
            BinaryOp::Eq => Predicate::Eq(value.to_string()),
            BinaryOp::NotEq => Predicate::NotEq(value.to_string()),
            BinaryOp::Match => Predicate::Match(Glob::new(value)?),
        };
        return Ok(Condition::new(field, predicate));
    }

    Err(Error::Syntax(fragment.to_string()))
}

/// Try `IDENT WS+ in WS+ ( list )` with nothing after the closing paren.
fn try_parse_membership(input: &str) -> Option<(&str, Vec<String>)> {
    let (field, rest) = try_parse_ident(input)?;
    let rest = skip_whitespace(rest)?;
    let rest = try_parse_keyword(rest, "in")?;
    let rest = skip_whitespace(rest)?;
    let list = rest.strip_prefix('(')?.strip_suffix(')')?;

    // Empty items are kept as empty strings
    let values = list.split(',').map(|v| v.trim().to_string()).collect();
    Some((field, values))
}

/// Try `IDENT OP VALUE`, with the operator immediately after the identifier.
fn try_parse_binary(input: &str) -> Option<(&str, BinaryOp, &str)> {
    let (field, rest) = try_parse_ident(input)?;

    BINARY_OPERATORS.iter().find_map(|(token, op)| {
        rest.strip_prefix(token)
            .map(|value| (field, *op, value.trim()))
    })
}

/// Consume a non-empty run of `[A-Za-z0-9_]`.
fn try_parse_ident(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());

    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
}

/// Consume one or more whitespace characters; `None` if there are none.
fn skip_whitespace(input: &str) -> Option<&str> {
    let rest = input.trim_start();
    if rest.len() == input.len() {
        None
    } else {
        Some(rest)
    }
}

/// Consume an ASCII keyword, case-insensitively.
fn try_parse_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.as_bytes().get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword.as_bytes()) {
        // keyword is ASCII, so this is a char boundary
        Some(&input[keyword.len()..])
    } else {
        None
    }
}
