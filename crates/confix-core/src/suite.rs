//! Suite registry and completeness checking.
//!
//! A [`SuiteSpec`] is the programmatic counterpart of a generated test
//! enumeration: the set of test names the suite claims to cover, with nested
//! specs for subdirectories. Completeness holds when the registered names and
//! the fixtures on disk match in both directions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convention::to_snake_case;
use crate::fixture::FixtureDir;

/// Registered test names for one fixture directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSpec {
    /// Suite name. For nested specs this must equal the snake_case form of
    /// the subdirectory name.
    pub name: String,
    /// Registered test names, one per fixture.
    pub registered: Vec<String>,
    /// Nested suites for subdirectories.
    pub nested: Vec<SuiteSpec>,
}

impl SuiteSpec {
    /// Create an empty suite spec.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registered: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Register a test name.
    #[must_use]
    pub fn with_test(mut self, test_name: impl Into<String>) -> Self {
        self.registered.push(test_name.into());
        self
    }

    /// Attach a nested suite.
    #[must_use]
    pub fn with_nested(mut self, nested: Self) -> Self {
        self.nested.push(nested);
        self
    }

    /// Build a spec that exactly covers a scanned fixture directory.
    #[must_use]
    pub fn covering(name: impl Into<String>, scanned: &FixtureDir) -> Self {
        let mut spec = Self::new(name);
        for case in &scanned.cases {
            spec.registered.push(case.test_name.clone());
        }
        for sub in &scanned.subdirs {
            spec.nested.push(Self::covering(to_snake_case(&sub.name), sub));
        }
        spec
    }

    fn qualified_names(&self, prefix: &str, out: &mut BTreeSet<String>) {
        for name in &self.registered {
            if prefix.is_empty() {
                out.insert(name.clone());
            } else {
                out.insert(format!("{prefix}/{name}"));
            }
        }
        for nested in &self.nested {
            let sub_prefix = if prefix.is_empty() {
                nested.name.clone()
            } else {
                format!("{prefix}/{}", nested.name)
            };
            nested.qualified_names(&sub_prefix, out);
        }
    }
}

/// Outcome of comparing a suite spec with a scanned fixture directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Fixtures on disk with no registered test (qualified names).
    pub unregistered: Vec<String>,
    /// Registered tests with no fixture on disk (qualified names).
    pub orphaned: Vec<String>,
}

impl CompletenessReport {
    /// True when both directions are empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unregistered.is_empty() && self.orphaned.is_empty()
    }
}

/// Error raised when a suite enumeration is out of sync with its directory.
#[derive(Debug, Error)]
pub enum CompletenessError {
    /// The registered tests and the fixtures on disk differ.
    #[error(
        "suite '{suite}' is out of sync with {dir}: \
         fixtures without tests: [{unregistered}]; tests without fixtures: [{orphaned}]"
    )]
    OutOfSync {
        /// Suite name.
        suite: String,
        /// Scanned directory name.
        dir: String,
        /// Comma-joined unregistered fixture names.
        unregistered: String,
        /// Comma-joined orphaned test names.
        orphaned: String,
    },
}

/// Compare a suite spec against a scanned directory, both directions.
#[must_use]
pub fn check_completeness(spec: &SuiteSpec, scanned: &FixtureDir) -> CompletenessReport {
    let mut registered = BTreeSet::new();
    spec.qualified_names("", &mut registered);

    let on_disk: BTreeSet<String> = scanned.flatten().into_iter().map(|(name, _)| name).collect();

    CompletenessReport {
        unregistered: on_disk.difference(&registered).cloned().collect(),
        orphaned: registered.difference(&on_disk).cloned().collect(),
    }
}

/// Assert that every fixture has a registered test and vice versa.
///
/// This is the harness's "all files present" gate: any drift in either
/// direction fails loudly, listing every offending entry.
pub fn assert_all_fixtures_registered(
    spec: &SuiteSpec,
    scanned: &FixtureDir,
) -> Result<(), CompletenessError> {
    let report = check_completeness(spec, scanned);
    if report.is_complete() {
        return Ok(());
    }
    Err(CompletenessError::OutOfSync {
        suite: spec.name.clone(),
        dir: scanned.name.clone(),
        unregistered: report.unregistered.join(", "),
        orphaned: report.orphaned.join(", "),
    })
}
