// SPDX-License-Identifier: MIT

//! Condition suites: a list of conditions plus the variables they use,
//! stored as YAML or JSON

mod loader;
mod types;

pub use loader::SuiteLoader;
pub use types::{parse_variable_arg, Suite};
