// SPDX-License-Identifier: MIT

//! Typed errors for loading suites and parsing command-line input
//!
//! Condition parsing and evaluation never fail with an error; they signal
//! problems through `None` and `false`. Only the I/O edges use this type.

use thiserror::Error;

/// Top-level error type for condition-rs
#[derive(Debug, Error)]
pub enum ConditionError {
    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Suite file with an extension we cannot parse
    #[error("Unsupported suite format: {0}")]
    UnsupportedFormat(String),

    /// A `name=value` variable argument without `=` or with an empty name
    #[error("Invalid variable definition '{0}', expected name=value")]
    InvalidVariable(String),
}

impl ConditionError {
    /// Create an unsupported format error
    pub fn unsupported_format(ext: impl Into<String>) -> Self {
        Self::UnsupportedFormat(ext.into())
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;
