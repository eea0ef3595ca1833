// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::error::{ConditionError, Result};
use crate::resolver::VariableInfo;

/// A batch of conditions with the variables they run against
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Suite {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub variables: Vec<VariableInfo>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Parse a `name=value` command-line variable
pub fn parse_variable_arg(arg: &str) -> Result<VariableInfo> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok(VariableInfo::new(name.trim(), value, ""))
        }
        _ => Err(ConditionError::InvalidVariable(arg.to_string())),
    }
}
