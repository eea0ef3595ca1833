// SPDX-License-Identifier: MIT

//! Runtime variables and the per-batch match table

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use crate::expr::ParsedCondition;

/// A known runtime variable
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableInfo {
    pub name: String,
    /// Current value; empty means unset
    #[serde(default)]
    pub value: String,
    /// Reported when an assertion using this variable fails
    #[serde(default, alias = "failure_message")]
    pub failure_message: String,
}

impl VariableInfo {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            failure_message: failure_message.into(),
        }
    }
}

/// Name lookup over a variable list; later duplicates win
pub(crate) fn lookup_table(variables: &[VariableInfo]) -> HashMap<&str, &VariableInfo> {
    variables.iter().map(|v| (v.name.as_str(), v)).collect()
}

/// Condition string to its split form, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchInfo {
    entries: Vec<(String, Option<ParsedCondition>)>,
    index: HashMap<String, usize>,
}

impl MatchInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; an overwritten key keeps its position
    pub fn insert(&mut self, condition: impl Into<String>, parsed: Option<ParsedCondition>) {
        let condition = condition.into();
        match self.index.get(&condition).copied() {
            Some(pos) => self.entries[pos].1 = parsed,
            None => {
                self.index.insert(condition.clone(), self.entries.len());
                self.entries.push((condition, parsed));
            }
        }
    }

    /// `None` when the condition is unknown, `Some(None)` when it did not parse
    pub fn get(&self, condition: &str) -> Option<Option<&ParsedCondition>> {
        self.index
            .get(condition)
            .map(|&pos| self.entries[pos].1.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParsedCondition>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MatchInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (condition, parsed) in &self.entries {
            let triple = parsed.as_ref().map(|p| p.as_triple());
            map.serialize_entry(condition, &triple)?;
        }
        map.end()
    }
}
