// SPDX-License-Identifier: MIT

//! Parsing and evaluation of assertion conditions
//!
//! Conditions are single comparisons like:
//! - `${status} = 200`
//! - `${count} >= 10`
//! - `${token} != null`

mod ast;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Operand, OperandKind, ParsedCondition, UnknownOperator};
pub use evaluator::{compare, execute, execute_json};
pub use parser::{extract_var, is_valid, split};
