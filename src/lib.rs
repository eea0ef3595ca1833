// SPDX-License-Identifier: MIT

//! Condition expressions for API test assertions
//!
//! - [`expr`] splits `left OP right` conditions and compares operands
//! - [`resolver`] looks up `${var}` references in a variable table
//! - [`assertion`] runs a batch of conditions end to end
//! - [`suite`] loads batches from YAML or JSON files

pub mod assertion;
pub mod error;
pub mod expr;
pub mod resolver;
pub mod suite;

pub use error::ConditionError;
