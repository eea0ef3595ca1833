//! Condition comparison
//!
//! Operands are compared by their string form. Equality is loose
//! (`"1" = 1` holds), ordering only works on plain digit strings.

use super::ast::{CompareOp, Operand, OperandKind};
use serde_json::Value;
use std::cmp::Ordering;

/// Compare two operands with the given operator.
///
/// Never fails: an unknown operator, a disallowed kind mix or a
/// non-numeric ordering operand all evaluate to `false`.
pub fn execute(left: impl Into<Operand>, operator: &str, right: impl Into<Operand>) -> bool {
    match operator.parse::<CompareOp>() {
        Ok(op) => compare(&left.into(), op, &right.into()),
        Err(_) => false,
    }
}

/// Like [`execute`] for dynamic values; `None` stands for an undefined
/// operand. Nulls, arrays and objects are rejected.
pub fn execute_json(left: Option<&Value>, operator: &str, right: Option<&Value>) -> bool {
    let (Some(left), Some(right)) = (json_operand(left), json_operand(right)) else {
        return false;
    };
    execute(left, operator, right)
}

fn json_operand(value: Option<&Value>) -> Option<Operand> {
    match value {
        None => Some(Operand::Undefined),
        Some(v) => Operand::from_json(v),
    }
}

/// Compare with an already parsed operator
pub fn compare(left: &Operand, op: CompareOp, right: &Operand) -> bool {
    let (lk, rk) = (left.kind(), right.kind());
    if lk != rk && lk != OperandKind::String && rk != OperandKind::String {
        return false;
    }

    let left = left.to_string();
    let right = right.to_string();

    if op.is_ordering() && !(is_digits(&left) && is_digits(&right)) {
        return false;
    }

    match op {
        CompareOp::Eq => left == right,
        CompareOp::NotEq => left != right,
        CompareOp::Gt => digit_cmp(&left, &right) == Ordering::Greater,
        CompareOp::Gte => digit_cmp(&left, &right) != Ordering::Less,
        CompareOp::Lt => digit_cmp(&left, &right) == Ordering::Less,
        CompareOp::Lte => digit_cmp(&left, &right) != Ordering::Greater,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Exact for any length, no overflow.
fn digit_cmp(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}
