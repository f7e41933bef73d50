//! Suite execution engine.

use confix_core::{Configurator, FixtureCase, FixtureDir};

use crate::diff;
use crate::verify::VerificationResult;

/// Runs every fixture in a scanned directory through a configurator.
pub struct SuiteRunner {
    /// Name of the verification campaign, recorded in reports and logs.
    pub campaign: String,
}

impl SuiteRunner {
    /// Create a new runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures depth-first and return one result per case.
    ///
    /// Execution is synchronous and single-threaded; each case runs to
    /// completion independently of the others.
    pub fn run(
        &self,
        fixtures: &FixtureDir,
        configurator: &dyn Configurator,
    ) -> Vec<VerificationResult> {
        fixtures
            .flatten()
            .into_iter()
            .map(|(qualified, case)| self.run_case(&qualified, case, configurator))
            .collect()
    }

    /// Verify a single fixture.
    ///
    /// This is the shared entry point every enumerated test delegates to: a
    /// full run produces exactly the result this method produces for each
    /// case in isolation.
    pub fn run_case(
        &self,
        qualified_name: &str,
        case: &FixtureCase,
        configurator: &dyn Configurator,
    ) -> VerificationResult {
        let before = match case.load_before() {
            Ok(content) => content,
            Err(err) => return Self::failed(qualified_name, case, String::new(), err.to_string()),
        };
        let actual = match configurator.configure(&before) {
            Ok(output) => output,
            Err(err) => {
                return Self::failed(
                    qualified_name,
                    case,
                    format!("error: {err}"),
                    err.to_string(),
                );
            }
        };
        let expected = match case.load_after() {
            Ok(content) => content,
            Err(err) => return Self::failed(qualified_name, case, actual, err.to_string()),
        };

        let passed = actual == expected;
        let rendered = (!passed).then(|| diff::render_diff(&expected, &actual));
        VerificationResult {
            case_name: qualified_name.to_string(),
            stem: case.stem.clone(),
            passed,
            expected,
            actual,
            diff: rendered,
        }
    }

    fn failed(
        qualified_name: &str,
        case: &FixtureCase,
        actual: String,
        reason: String,
    ) -> VerificationResult {
        VerificationResult {
            case_name: qualified_name.to_string(),
            stem: case.stem.clone(),
            passed: false,
            expected: String::new(),
            actual,
            diff: Some(reason),
        }
    }
}
