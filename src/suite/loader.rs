//! Suite loader - YAML/JSON file loading and parsing

use super::types::Suite;
use crate::error::{ConditionError, Result};
use std::fs;
use std::path::Path;

/// Loads condition suites from YAML or JSON files
pub struct SuiteLoader;

impl SuiteLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a suite, picking the format from the file extension
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Suite> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => Self::parse_yaml(&fs::read_to_string(path)?),
            "json" => Self::parse_json(&fs::read_to_string(path)?),
            _ => Err(ConditionError::unsupported_format(path.display().to_string())),
        }
    }

    /// Parse a suite from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Suite> {
        let suite: Suite = serde_yaml::from_str(content)?;
        log::debug!(
            "Loaded suite {:?}: {} conditions, {} variables",
            suite.name,
            suite.conditions.len(),
            suite.variables.len()
        );
        Ok(suite)
    }

    /// Parse a suite from a JSON string
    pub fn parse_json(content: &str) -> Result<Suite> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Default for SuiteLoader {
    fn default() -> Self {
        Self::new()
    }
}
