//! Conformance report rendering.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// Top-level report payload written by the `verify` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    pub campaign: String,
    pub timestamp: String,
    pub fixture_sets: usize,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Serialize the report as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Render the report as markdown with summary and per-operation tables.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        use std::fmt::Write as _;

        writeln!(out, "# {}", self.title).ok();
        writeln!(out).ok();
        writeln!(out, "- Campaign: {}", self.campaign).ok();
        writeln!(out, "- Generated: {}", self.timestamp).ok();
        writeln!(out, "- Fixture sets: {}", self.fixture_sets).ok();
        writeln!(out).ok();

        writeln!(out, "## Summary").ok();
        writeln!(out).ok();
        writeln!(out, "| Metric | Value |").ok();
        writeln!(out, "|--------|------:|").ok();
        writeln!(out, "| total | {} |", self.summary.total).ok();
        writeln!(out, "| passed | {} |", self.summary.passed).ok();
        writeln!(out, "| failed | {} |", self.summary.failed).ok();
        writeln!(
            out,
            "| pass rate | {:.2}% |",
            self.summary.pass_rate_percent
        )
        .ok();
        writeln!(out).ok();

        writeln!(out, "## Per-Operation Results").ok();
        writeln!(out).ok();
        writeln!(out, "| Operation | total | passed | failed | pass rate |").ok();
        writeln!(out, "|-----------|------:|-------:|-------:|----------:|").ok();
        for row in &self.summary.operations {
            writeln!(
                out,
                "| {} | {} | {} | {} | {:.2}% |",
                row.operation, row.total, row.passed, row.failed, row.pass_rate_percent
            )
            .ok();
        }
        writeln!(out).ok();

        if !self.summary.failures.is_empty() {
            writeln!(out, "## Failures").ok();
            writeln!(out).ok();
            for failure in &self.summary.failures {
                writeln!(out, "### {}", failure.trace_id).ok();
                writeln!(out).ok();
                writeln!(out, "- operation: {}", failure.operation).ok();
                writeln!(out, "- case: {}", failure.case_name).ok();
                writeln!(out, "- expected: `{}`", failure.expected).ok();
                writeln!(out, "- actual: `{}`", failure.actual).ok();
                writeln!(out).ok();
            }
        }

        writeln!(
            out,
            "- Report digest: sha256:{}",
            sha256_hex(self.to_json().as_bytes())
        )
        .ok();
        out
    }
}

/// Lowercase hex SHA-256 digest of a byte buffer.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::Digest;
    hex_lower(&sha2::Sha256::digest(bytes))
}

fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut out, "{byte:02x}").ok();
    }
    out
}
