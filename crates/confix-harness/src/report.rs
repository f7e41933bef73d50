//! Conformance report generation.

use serde::{Deserialize, Serialize};

use crate::verify::{VerificationResult, VerificationSummary};

/// Human- and machine-readable outcome of a verification campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign name.
    pub campaign: String,
    /// Description of the configurator under test.
    pub configurator: String,
    /// Timestamp string. Injectable so report generation can be reproducible.
    pub timestamp: String,
    /// Digest of the fixture corpus the run verified.
    pub corpus_digest: String,
    /// Aggregate counters.
    pub summary: VerificationSummary,
    /// Per-case results, sorted by case name.
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    /// Assemble a report. Results are sorted so output is diffable.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        campaign: impl Into<String>,
        configurator: impl Into<String>,
        timestamp: impl Into<String>,
        corpus_digest: impl Into<String>,
        mut results: Vec<VerificationResult>,
    ) -> Self {
        results.sort_by(|a, b| a.case_name.cmp(&b.case_name));
        let summary = VerificationSummary::from_results(&results);
        Self {
            title: title.into(),
            campaign: campaign.into(),
            configurator: configurator.into(),
            timestamp: timestamp.into(),
            corpus_digest: corpus_digest.into(),
            summary,
            results,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- campaign: {}\n", self.campaign));
        out.push_str(&format!("- configurator: {}\n", self.configurator));
        out.push_str(&format!("- timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- corpus digest: {}\n\n", self.corpus_digest));

        out.push_str("## Summary\n\n");
        out.push_str(&format!(
            "total: {}, passed: {}, failed: {} ({:.1}% pass rate)\n\n",
            self.summary.total,
            self.summary.passed,
            self.summary.failed,
            self.summary.pass_rate_percent()
        ));

        out.push_str("## Cases\n\n");
        out.push_str("| case | status |\n|------|--------|\n");
        for result in &self.results {
            let status = if result.passed { "pass" } else { "FAIL" };
            out.push_str(&format!("| {} | {} |\n", result.case_name, status));
        }

        let failures: Vec<&VerificationResult> =
            self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for result in failures {
                out.push_str(&format!("\n### {}\n\n", result.case_name));
                out.push_str("```\n");
                out.push_str(result.diff.as_deref().unwrap_or("(no diff rendered)"));
                if !result.diff.as_deref().unwrap_or("").ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
