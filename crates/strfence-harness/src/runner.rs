//! Fixture-driven verification runner.

use serde::{Deserialize, Serialize};

use crate::diff::render_diff;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};

/// Outcome of one executed fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Stable case identity: `campaign::family::operation::case`.
    pub trace_id: String,
    pub family: String,
    pub operation: String,
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Rendered divergence, present only on failure.
    pub diff: Option<String>,
}

/// Executes fixture sets and produces per-case verification results.
#[derive(Debug, Clone)]
pub struct TestRunner {
    campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Campaign label stamped into every trace id.
    #[must_use]
    pub fn campaign(&self) -> &str {
        &self.campaign
    }

    /// Run every case in the set.
    #[must_use]
    pub fn run(&self, set: &FixtureSet) -> Vec<VerificationResult> {
        set.cases
            .iter()
            .map(|case| self.execute(set, case))
            .collect()
    }

    fn execute(&self, set: &FixtureSet, case: &FixtureCase) -> VerificationResult {
        let actual = match execute_case(&case.operation, &case.inputs) {
            Ok(rendered) => rendered,
            Err(err) => format!("error: {err}"),
        };
        let passed = actual == case.expected;
        let diff = if passed {
            None
        } else {
            Some(render_diff(&case.expected, &actual))
        };

        VerificationResult {
            trace_id: format!(
                "{campaign}::{family}::{operation}::{case_name}",
                campaign = self.campaign,
                family = set.family,
                operation = case.operation,
                case_name = case.name
            ),
            family: set.family.clone(),
            operation: case.operation.clone(),
            case_name: case.name.clone(),
            passed,
            expected: case.expected.clone(),
            actual,
            diff,
        }
    }
}
