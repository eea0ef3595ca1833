// SPDX-License-Identifier: MIT

//! Parsed form of a condition and the operand model used during evaluation

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompareOp {
    /// =
    #[serde(rename = "=")]
    Eq,
    /// !=
    #[serde(rename = "!=")]
    NotEq,
    /// >=
    #[serde(rename = ">=")]
    Gte,
    /// <=
    #[serde(rename = "<=")]
    Lte,
    /// >
    #[serde(rename = ">")]
    Gt,
    /// <
    #[serde(rename = "<")]
    Lt,
}

impl CompareOp {
    /// Every recognized operator, in the order the grammar tries them
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::NotEq,
        CompareOp::Gte,
        CompareOp::Lte,
        CompareOp::Gt,
        CompareOp::Lt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }

    /// True for the four ordering operators
    pub fn is_ordering(&self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the six operators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown comparison operator: {0}")]
pub struct UnknownOperator(pub String);

impl FromStr for CompareOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// A condition split into `left operator right`
///
/// `left` is the variable name when the condition referenced one as
/// `${name}`, otherwise the literal token as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCondition {
    pub left: String,
    pub operator: CompareOp,
    pub right: String,
}

impl ParsedCondition {
    /// The triple as plain strings
    pub fn as_triple(&self) -> (&str, &str, &str) {
        (&self.left, self.operator.as_str(), &self.right)
    }
}

impl fmt::Display for ParsedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Kind tag of an [`Operand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Bool,
    Number,
    String,
    Undefined,
}

/// A value on either side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Bool(bool),
    Number(f64),
    String(String),
    Undefined,
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Bool(_) => OperandKind::Bool,
            Operand::Number(_) => OperandKind::Number,
            Operand::String(_) => OperandKind::String,
            Operand::Undefined => OperandKind::Undefined,
        }
    }

    /// Converts a dynamic value; `None` for null, arrays and objects
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Some(Operand::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Operand::Number),
            Value::String(s) => Some(Operand::String(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Number(n) => f.write_str(&format_number(*n)),
            Operand::String(s) => f.write_str(s),
            Operand::Undefined => f.write_str("undefined"),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else {
        n.to_string()
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` -> `1.5e-7`
fn exponent_form(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::String(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::String(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Operand::Undefined)
    }
}
