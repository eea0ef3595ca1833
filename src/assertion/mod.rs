// SPDX-License-Identifier: MIT

//! Assertion runner
//!
//! Resolves a batch of conditions once, substitutes each left operand and
//! evaluates the comparison, reporting one result per input condition.

use serde::Serialize;

use crate::expr::{execute, ParsedCondition};
use crate::resolver::{resolve, Resolution, VariableInfo};

/// Result of evaluating one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    /// The condition did not parse
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionResult {
    pub condition: String,
    pub parsed: Option<ParsedCondition>,
    /// Left operand after substitution
    pub actual: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl AssertionResult {
    pub fn is_passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionReport {
    pub results: Vec<AssertionResult>,
    pub resolution: Resolution,
}

impl AssertionReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
            .count()
    }

    pub fn invalid(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Invalid)
            .count()
    }

    /// True when every condition parsed and passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(AssertionResult::is_passed)
    }
}

/// Evaluate every condition against the variable list
pub fn run_assertions<S: AsRef<str>>(
    conditions: &[S],
    variables: &[VariableInfo],
) -> AssertionReport {
    let resolution = resolve(conditions, Some(variables));

    let results = conditions
        .iter()
        .map(|condition| evaluate_one(condition.as_ref(), &resolution))
        .collect();

    AssertionReport {
        results,
        resolution,
    }
}

fn evaluate_one(condition: &str, resolution: &Resolution) -> AssertionResult {
    let parsed = resolution.extra.matchs.get(condition).flatten().cloned();

    let Some(p) = parsed else {
        return AssertionResult {
            condition: condition.to_string(),
            parsed: None,
            actual: None,
            outcome: Outcome::Invalid,
        };
    };

    let actual = resolution.value_of(&p.left).to_string();
    let outcome = if execute(actual.as_str(), p.operator.as_str(), p.right.as_str()) {
        Outcome::Passed
    } else {
        let message = failure_message(&p, &actual, resolution);
        log::debug!("Assertion failed: {} ({})", condition, message);
        Outcome::Failed { message }
    };

    AssertionResult {
        condition: condition.to_string(),
        parsed: Some(p),
        actual: Some(actual),
        outcome,
    }
}

fn failure_message(parsed: &ParsedCondition, actual: &str, resolution: &Resolution) -> String {
    match resolution.variable(&parsed.left) {
        Some(var) if !var.failure_message.is_empty() => var.failure_message.clone(),
        _ => format!(
            "expected {} {} {}, got {}",
            parsed.left, parsed.operator, parsed.right, actual
        ),
    }
}
