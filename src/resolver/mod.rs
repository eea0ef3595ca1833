// SPDX-License-Identifier: MIT

//! Variable resolution for a batch of conditions
//!
//! Collects the variables referenced by each condition's left operand and
//! looks them up in the caller's variable list.

mod variables;

pub use variables::{MatchInfo, VariableInfo};

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::expr::split;
use variables::lookup_table;

/// Substitution data for a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    /// Referenced variables that were found, mapped to their value
    pub data: BTreeMap<String, String>,
    pub extra: ResolutionExtra,
}

/// Diagnostics produced alongside [`Resolution::data`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionExtra {
    /// Every referenced variable; `None` when it was not found
    pub vars: BTreeMap<String, Option<VariableInfo>>,
    pub matchs: MatchInfo,
}

impl Resolution {
    /// Value to substitute for a left operand, falling back to the token itself
    pub fn value_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.data.get(name).map(String::as_str).unwrap_or(name)
    }

    /// The variable record behind a name, if it was referenced and found
    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.extra.vars.get(name).and_then(Option::as_ref)
    }
}

/// Resolve the variables referenced by `conditions`.
///
/// `variables` of `None` behaves like an empty list. Malformed conditions
/// are recorded as `None` in the match table and reference nothing.
pub fn resolve<S: AsRef<str>>(
    conditions: &[S],
    variables: Option<&[VariableInfo]>,
) -> Resolution {
    let mut matchs = MatchInfo::new();
    let mut vars: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for condition in conditions {
        let condition = condition.as_ref();
        let parsed = split(condition);
        match &parsed {
            Some(p) => {
                if seen.insert(p.left.clone()) {
                    vars.push(p.left.clone());
                }
            }
            None => log::debug!("Skipping malformed condition: {:?}", condition),
        }
        matchs.insert(condition, parsed);
    }

    if vars.is_empty() {
        return Resolution {
            data: BTreeMap::new(),
            extra: ResolutionExtra {
                vars: BTreeMap::new(),
                matchs,
            },
        };
    }

    let table = lookup_table(variables.unwrap_or_default());
    let mut data = BTreeMap::new();
    let mut found = BTreeMap::new();

    for name in vars {
        let info = table.get(name.as_str()).copied();
        match info {
            Some(var) => {
                let value = if var.value.is_empty() {
                    name.clone()
                } else {
                    var.value.clone()
                };
                data.insert(name.clone(), value);
            }
            None => log::trace!("Variable '{}' not found", name),
        }
        found.insert(name, info.cloned());
    }

    Resolution {
        data,
        extra: ResolutionExtra {
            vars: found,
            matchs,
        },
    }
}
