//! Fixture definitions for conformance verification.
//!
//! A fixture file is a versioned JSON document holding recorded invocations of
//! one operation family. Buffers appear as arrays of byte values, absent
//! inputs as `null`, and printable terminated strings may be written as JSON
//! strings for readability (the executor appends the terminator).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single recorded invocation with its expected canonical rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Unique case name within its set.
    pub name: String,
    /// Operation under test, e.g. `"copy"` or `"compare_ci"`.
    pub operation: String,
    /// Named inputs keyed by parameter name.
    pub inputs: serde_json::Value,
    /// Rendering the executor must reproduce exactly.
    pub expected: String,
}

/// A versioned collection of cases for one operation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Fixture schema version, currently `"v1"`.
    pub version: String,
    /// Operation family label, e.g. `"strfence/copy"`.
    pub family: String,
    /// The recorded cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Parse a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the fixture set as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
