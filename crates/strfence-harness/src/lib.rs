//! Conformance harness for the strfence bounded string toolkit.
//!
//! Fixture files record operation invocations together with their expected
//! canonical renderings. The runner replays them against `strfence-core` and
//! reports divergences with per-case diffs, markdown/JSON reports, and
//! structured JSONL logs.

pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use exec::execute_case;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{TestRunner, VerificationResult};
pub use structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
pub use verify::VerificationSummary;
