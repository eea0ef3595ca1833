// SPDX-License-Identifier: MIT

//! Condition splitter
//!
//! Splits strings like:
//! - `${status} = 200`
//! - `${count} >= 10`
//! - `ok != false`

use super::ast::{CompareOp, ParsedCondition};
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-string grammar: `left OP right`.
///
/// Left may not contain whitespace or operator characters, right may not
/// contain operator characters. That keeps `==`, `= ... =` and friends
/// from splitting into a bogus triple.
static CONDITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\s=!<>]+)\s*(=|!=|>=|<=|>|<)\s*([^=!<>]+)$")
        .expect("condition pattern is valid")
});

/// A `{name}` or `${name}` variable reference
static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$?\{([A-Za-z0-9!@$%^&*()_\-+=./]+)\}$").expect("variable pattern is valid")
});

/// Split a condition into its left operand, operator and right operand.
///
/// Returns `None` for empty input and for anything that does not contain
/// exactly one operator between two operands.
pub fn split(condition: &str) -> Option<ParsedCondition> {
    let condition = condition.trim();
    if condition.is_empty() {
        return None;
    }

    let caps = CONDITION_RE.captures(condition)?;
    let left = caps.get(1)?.as_str().trim();
    let operator = caps.get(2)?.as_str().trim().parse::<CompareOp>().ok()?;
    let right = caps.get(3)?.as_str().trim();

    Some(ParsedCondition {
        left: extract_var(left).to_string(),
        operator,
        right: right.to_string(),
    })
}

/// `true` iff [`split`] accepts the condition
pub fn is_valid(condition: &str) -> bool {
    split(condition).is_some()
}

/// Unwraps a `${name}` reference, leaving literals untouched
pub fn extract_var(token: &str) -> &str {
    VARIABLE_RE
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(token)
}
