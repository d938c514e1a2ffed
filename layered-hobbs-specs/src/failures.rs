//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[known]]
//! fixture = "clauses.hobbs"
//! case = "C3"
//! reason = "object of the main verb is outside the searched branch"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (limitations of the algorithm).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name.
    pub fixture: String,
    /// Case reference (e.g., "C3" for the fourth case).
    pub case: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means nothing is expected to fail.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::load(path, e))?;
        toml::from_str(&content).map_err(|e| SpecError::load(path, e))
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, case_ref: &str) -> FailureState {
        if find(&self.known, fixture, case_ref).is_some() {
            return FailureState::Known;
        }
        if find(&self.pending, fixture, case_ref).is_some() {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    /// Format a case reference from its index.
    pub fn format_ref(case_idx: usize) -> String {
        format!("C{}", case_idx)
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, case_ref: &str) -> Option<&FailureEntry> {
        find(&self.known, fixture, case_ref)
            .or_else(|| find(&self.pending, fixture, case_ref))
    }
}

fn find<'a>(entries: &'a [FailureEntry], fixture: &str, case_ref: &str) -> Option<&'a FailureEntry> {
    entries
        .iter()
        .find(|e| e.fixture == fixture && e.case == case_ref)
}

/// Result of running the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    /// Total assertions checked.
    pub total: usize,
    /// Passed assertions.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Record a passed assertion.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed assertion with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }

    /// Add the counts of another run.
    pub fn merge(&mut self, other: &HarnessResult) {
        self.total += other.total;
        self.passed += other.passed;
        self.expected_failures += other.expected_failures;
        self.regressions += other.regressions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(fixture: &str, case: &str) -> FailureEntry {
        FailureEntry {
            fixture: fixture.to_string(),
            case: case.to_string(),
            reason: None,
            added: None,
        }
    }

    #[test]
    fn test_is_expected() {
        let failures = ExpectedFailures {
            known: vec![entry("a.hobbs", "C1")],
            pending: vec![entry("b.hobbs", "C0")],
        };

        assert_eq!(failures.is_expected("a.hobbs", "C1"), FailureState::Known);
        assert_eq!(failures.is_expected("b.hobbs", "C0"), FailureState::Pending);
        assert_eq!(failures.is_expected("a.hobbs", "C0"), FailureState::Regression);
        assert_eq!(failures.count(), 2);
        assert!(failures.get_entry("b.hobbs", "C0").is_some());
        assert!(failures.get_entry("b.hobbs", "C1").is_none());
    }

    #[test]
    fn test_format_ref() {
        assert_eq!(ExpectedFailures::format_ref(0), "C0");
        assert_eq!(ExpectedFailures::format_ref(12), "C12");
    }

    #[test]
    fn test_harness_result_record() {
        let mut result = HarnessResult::new();
        assert_eq!(result.exit_code(), 0);

        result.record_pass();
        result.record_failure(FailureState::Known);
        assert!(result.success());

        result.record_failure(FailureState::Regression);
        assert_eq!(result.total, 3);
        assert_eq!(result.expected_failures, 1);
        assert_eq!(result.regressions, 1);
        assert_eq!(result.exit_code(), 1);

        let mut sum = HarnessResult::new();
        sum.merge(&result);
        sum.merge(&result);
        assert_eq!(sum.total, 6);
        assert_eq!(sum.passed, 2);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "prior.hobbs"
case = "C2"
reason = "Awaiting implementation"
added = "2026-10-19"

[[known]]
fixture = "clauses.hobbs"
case = "C0"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(failures.is_expected("prior.hobbs", "C2"), FailureState::Pending);
        assert_eq!(failures.is_expected("clauses.hobbs", "C0"), FailureState::Known);
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = 3").unwrap();
        assert!(ExpectedFailures::load(file.path()).is_err());
    }
}
