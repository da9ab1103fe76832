//! Aggregation of verification results into summary counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::runner::VerificationResult;

/// Per-operation aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRow {
    pub operation: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate_percent: f64,
}

/// A failed case, preserved for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureDetail {
    pub trace_id: String,
    pub operation: String,
    pub case_name: String,
    pub expected: String,
    pub actual: String,
}

/// Campaign-wide verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate_percent: f64,
    pub operations: Vec<OperationRow>,
    pub failures: Vec<FailureDetail>,
}

impl VerificationSummary {
    /// Aggregate raw results into totals and per-operation rows.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|result| result.passed).count();
        let failed = total - passed;

        let mut buckets: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for result in &results {
            let bucket = buckets.entry(result.operation.clone()).or_insert((0, 0));
            bucket.0 += 1;
            if result.passed {
                bucket.1 += 1;
            }
        }
        let operations = buckets
            .into_iter()
            .map(|(operation, (total, passed))| OperationRow {
                operation,
                total,
                passed,
                failed: total - passed,
                pass_rate_percent: ratio_percent(passed, total),
            })
            .collect();

        let failures = results
            .into_iter()
            .filter(|result| !result.passed)
            .map(|result| FailureDetail {
                trace_id: result.trace_id,
                operation: result.operation,
                case_name: result.case_name,
                expected: result.expected,
                actual: result.actual,
            })
            .collect();

        Self {
            total,
            passed,
            failed,
            pass_rate_percent: ratio_percent(passed, total),
            operations,
            failures,
        }
    }

    /// Returns true when no case failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn ratio_percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (numerator as f64 * 100.0) / denominator as f64
}
