//! Verification results and summaries.

use serde::{Deserialize, Serialize};

/// Outcome of verifying one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Qualified test name (`sub_suite/test_name` for nested fixtures).
    pub case_name: String,
    /// Fixture stem as spelled on disk.
    pub stem: String,
    /// Whether configurator output matched the expected script exactly.
    pub passed: bool,
    /// Expected script content.
    pub expected: String,
    /// Configurator output (or a rendered error when the invocation failed).
    pub actual: String,
    /// Rendered diff, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Aggregate counters over a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases executed.
    pub total: usize,
    /// Cases whose output matched.
    pub passed: usize,
    /// Cases that mismatched or errored.
    pub failed: usize,
}

impl VerificationSummary {
    /// Build a summary from individual results.
    #[must_use]
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    /// True when nothing failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate in percent; 100 for an empty run.
    #[must_use]
    pub fn pass_rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.passed as f64 * 100.0 / self.total as f64
    }
}
