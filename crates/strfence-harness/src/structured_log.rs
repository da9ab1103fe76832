//! Structured logging contract for verification runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or an in-memory buffer.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.
//! - [`validate_log_file`]: validates an entire JSONL file.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome of a case or run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
/// Optional fields carry case context for verification workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Expected rendering, required alongside `actual` on failing outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Wall-clock duration of a run-level step (milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            campaign: None,
            family: None,
            operation: None,
            case: None,
            outcome: None,
            expected: None,
            actual: None,
            duration_ms: None,
            details: None,
        }
    }

    /// Set the campaign label.
    #[must_use]
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Set the operation family and operation name.
    #[must_use]
    pub fn with_operation(
        mut self,
        family: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        self.family = Some(family.into());
        self.operation = Some(operation.into());
        self
    }

    /// Set the case name.
    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    /// Set the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the expected/actual pair for divergence events.
    #[must_use]
    pub fn with_expectation(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }

    /// Set duration in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// Writes structured JSONL log entries to a file or an in-memory buffer.
pub struct LogEmitter {
    writer: Box<dyn Write>,
    seq: u64,
    campaign: String,
    run_id: String,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, campaign: &str, run_id: &str) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
            seq: 0,
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
        })
    }

    /// Create an emitter that writes to a Vec<u8> buffer (for testing).
    #[must_use]
    pub fn to_buffer(campaign: &str, run_id: &str) -> Self {
        Self {
            writer: Box::new(Vec::new()),
            seq: 0,
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
        }
    }

    /// Generate the next trace ID.
    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.campaign, self.run_id, self.seq)
    }

    /// Emit a log entry with auto-generated trace_id and campaign.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> std::io::Result<LogEntry> {
        let trace_id = self.next_trace_id();
        let entry = LogEntry::new(&trace_id, level, event).with_campaign(&self.campaign);
        let line = serde_json::to_string(&entry).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        Ok(entry)
    }

    /// Emit a fully-populated log entry.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<()> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.campaign.is_none() {
            entry.campaign = Some(self.campaign.clone());
        }
        let line = serde_json::to_string(&entry).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug)]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: field '{}': {}",
            self.line_number, self.field, self.message
        )
    }
}

/// Validate a single JSONL line against the schema.
///
/// Returns the parsed entry if valid, or a list of validation errors.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let mut errors = Vec::new();

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            errors.push(LogValidationError {
                line_number,
                field: "<json>".to_string(),
                message: format!("invalid JSON: {e}"),
            });
            return Err(errors);
        }
    };

    let obj = match value.as_object() {
        Some(o) => o,
        None => {
            errors.push(LogValidationError {
                line_number,
                field: "<root>".to_string(),
                message: "expected JSON object".to_string(),
            });
            return Err(errors);
        }
    };

    // Required fields
    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(LogValidationError {
                line_number,
                field: field.to_string(),
                message: "required field missing".to_string(),
            });
        }
    }

    // Validate level enum
    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !["trace", "debug", "info", "warn", "error"].contains(&level)
    {
        errors.push(LogValidationError {
            line_number,
            field: "level".to_string(),
            message: format!("invalid level: '{level}'"),
        });
    }

    // Validate outcome enum if present
    if let Some(outcome) = obj.get("outcome").and_then(|v| v.as_str())
        && !["pass", "fail", "error"].contains(&outcome)
    {
        errors.push(LogValidationError {
            line_number,
            field: "outcome".to_string(),
            message: format!("invalid outcome: '{outcome}'"),
        });
    }

    // Divergence contract:
    // failing outcomes must carry both sides of the comparison.
    if obj.get("outcome").and_then(|v| v.as_str()) == Some("fail") {
        for field in ["expected", "actual"] {
            match obj.get(field).and_then(|v| v.as_str()) {
                Some(rendered) if !rendered.is_empty() => {}
                _ => errors.push(LogValidationError {
                    line_number,
                    field: field.to_string(),
                    message: format!("failing outcomes must include non-empty {field}"),
                }),
            }
        }
    }

    // Validate trace_id format: should contain ::
    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && !trace_id.contains("::")
    {
        errors.push(LogValidationError {
            line_number,
            field: "trace_id".to_string(),
            message: format!(
                "trace_id should follow <campaign>::<run_id>::<seq> format, got: '{trace_id}'"
            ),
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // If validation passed, try full deserialization
    match serde_json::from_value::<LogEntry>(value) {
        Ok(entry) => Ok(entry),
        Err(e) => {
            errors.push(LogValidationError {
                line_number,
                field: "<deserialization>".to_string(),
                message: format!("failed to deserialize: {e}"),
            });
            Err(errors)
        }
    }
}

/// Validate an entire JSONL file.
///
/// Returns the total line count and any validation errors found.
pub fn validate_log_file(path: &Path) -> Result<(usize, Vec<LogValidationError>), std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn now_utc() -> String {
    // Coarse UTC formatting from the epoch, avoiding a calendar dependency.
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        1970 + secs / 31_557_600,
        (secs % 31_557_600) / 2_629_800 + 1,
        (secs % 2_629_800) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        millis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_serializes_required_fields() {
        let entry = LogEntry::new("verify::run-1::001", LogLevel::Info, "run_started");
        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["trace_id"], "verify::run-1::001");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "run_started");
        // Optional fields should be absent
        assert!(parsed.get("campaign").is_none());
        assert!(parsed.get("operation").is_none());
        assert!(parsed.get("outcome").is_none());
        assert!(parsed.get("expected").is_none());
    }

    #[test]
    fn log_entry_with_all_optional_fields() {
        let entry = LogEntry::new("verify::run-1::002", LogLevel::Error, "case_verified")
            .with_campaign("fixture-verify")
            .with_operation("strfence/copy", "copy")
            .with_case("copy_truncates")
            .with_outcome(Outcome::Fail)
            .with_expectation("len=3 dest=[116, 111, 111, 0]", "len=4 dest=[116, 111, 111, 108]")
            .with_duration_ms(2)
            .with_details(serde_json::json!({"capacity": 4}));

        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["campaign"], "fixture-verify");
        assert_eq!(parsed["family"], "strfence/copy");
        assert_eq!(parsed["operation"], "copy");
        assert_eq!(parsed["case"], "copy_truncates");
        assert_eq!(parsed["outcome"], "fail");
        assert_eq!(parsed["expected"], "len=3 dest=[116, 111, 111, 0]");
        assert_eq!(parsed["actual"], "len=4 dest=[116, 111, 111, 108]");
        assert_eq!(parsed["duration_ms"], 2);
        assert!(parsed["details"].is_object());
    }

    #[test]
    fn validate_valid_line() {
        let entry = LogEntry::new("verify::run-1::001", LogLevel::Info, "run_started");
        let json = entry.to_jsonl().unwrap();
        let result = validate_log_line(&json, 1);
        assert!(result.is_ok(), "Valid line should pass: {result:?}");
    }

    #[test]
    fn validate_missing_required_field() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","level":"info","event":"test"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(
            errors.iter().any(|e| e.field == "trace_id"),
            "Should report missing trace_id"
        );
    }

    #[test]
    fn validate_invalid_level() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","trace_id":"a::b::c","level":"critical","event":"test"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "level"));
    }

    #[test]
    fn validate_invalid_outcome() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","trace_id":"a::b::c","level":"info","event":"test","outcome":"flaky"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "outcome"));
    }

    #[test]
    fn validate_invalid_json() {
        let result = validate_log_line("not json at all", 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "<json>"));
    }

    #[test]
    fn validate_bad_trace_id_format() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","trace_id":"no-separator","level":"info","event":"test"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "trace_id"));
    }

    #[test]
    fn validate_failing_outcome_requires_expectation() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","trace_id":"a::b::001","level":"error","event":"case_verified","outcome":"fail"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.iter().any(|e| e.field == "expected"));
        assert!(errors.iter().any(|e| e.field == "actual"));
    }

    #[test]
    fn validate_failing_outcome_with_expectation_passes() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","trace_id":"a::b::001","level":"error","event":"case_verified","outcome":"fail","expected":"3","actual":"4"}"#;
        let result = validate_log_line(json, 1);
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn emitter_generates_sequential_trace_ids() {
        let mut emitter = LogEmitter::to_buffer("fixture-verify", "run-42");
        let e1 = emitter.emit(LogLevel::Info, "start").unwrap();
        let e2 = emitter.emit(LogLevel::Info, "end").unwrap();
        assert!(e1.trace_id.ends_with("::001"));
        assert!(e2.trace_id.ends_with("::002"));
        assert!(e1.trace_id.starts_with("fixture-verify::run-42::"));
        assert_eq!(e1.campaign.as_deref(), Some("fixture-verify"));
    }

    #[test]
    fn emitter_fills_empty_trace_id_and_campaign() {
        let mut emitter = LogEmitter::to_buffer("fixture-verify", "run-7");
        let entry = LogEntry::new("", LogLevel::Info, "case_verified").with_case("len_plain");
        emitter.emit_entry(entry).unwrap();
        emitter.flush().unwrap();
    }

    #[test]
    fn validate_log_file_counts_entries_and_errors() {
        let path = std::env::temp_dir().join(format!(
            "strfence_log_validate_{}.jsonl",
            std::process::id()
        ));
        let good = LogEntry::new("verify::run-1::001", LogLevel::Info, "run_started")
            .to_jsonl()
            .unwrap();
        let bad = r#"{"timestamp":"2026-01-01T00:00:00Z","level":"info","event":"orphan"}"#;
        std::fs::write(&path, format!("{good}\n\n{bad}\n")).unwrap();

        let (count, errors) = validate_log_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(count, 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "trace_id");
        assert_eq!(errors[0].line_number, 3);
    }

    #[test]
    fn roundtrip_deserialization() {
        let entry = LogEntry::new("verify::run-1::001", LogLevel::Warn, "slow_case")
            .with_operation("strfence/token", "tokenize")
            .with_duration_ms(25);
        let json = entry.to_jsonl().unwrap();
        let restored: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.trace_id, "verify::run-1::001");
        assert_eq!(restored.level, LogLevel::Warn);
        assert_eq!(restored.event, "slow_case");
        assert_eq!(restored.operation.as_deref(), Some("tokenize"));
        assert_eq!(restored.duration_ms, Some(25));
    }
}
