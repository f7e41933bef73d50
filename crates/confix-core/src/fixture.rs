//! Fixture pairs and fixture sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convention::to_snake_case;

/// Error raised while reading fixture content.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A fixture file could not be read.
    #[error("failed reading fixture file {}: {source}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },
}

/// A single before/after fixture pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Shared stem of the pair, as spelled on disk.
    pub stem: String,
    /// Derived test identifier (snake_case).
    pub test_name: String,
    /// Path of the input script.
    pub before_path: PathBuf,
    /// Path of the expected-result script. May not exist on disk; the runner
    /// treats that as a verification failure.
    pub after_path: PathBuf,
}

impl FixtureCase {
    /// Read the input script.
    pub fn load_before(&self) -> Result<String, FixtureError> {
        read_fixture(&self.before_path)
    }

    /// Read the expected-result script.
    pub fn load_after(&self) -> Result<String, FixtureError> {
        read_fixture(&self.after_path)
    }

    /// Whether the expected-result file exists.
    #[must_use]
    pub fn has_after(&self) -> bool {
        self.after_path.is_file()
    }
}

fn read_fixture(path: &Path) -> Result<String, FixtureError> {
    std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A scanned fixture directory: its cases plus nested fixture directories.
///
/// Nested directories model nested suites; a case inside a subdirectory is
/// addressed by the `/`-joined qualified name of its enclosing sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDir {
    /// Directory path on disk.
    pub root: PathBuf,
    /// Base name of the directory.
    pub name: String,
    /// Fixture pairs directly inside this directory, sorted by stem.
    pub cases: Vec<FixtureCase>,
    /// Subdirectories that (transitively) contain fixtures, sorted by name.
    pub subdirs: Vec<FixtureDir>,
}

impl FixtureDir {
    /// Total number of cases, including nested directories.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len() + self.subdirs.iter().map(Self::case_count).sum::<usize>()
    }

    /// Depth-first traversal over all cases.
    ///
    /// Yields `(qualified_name, case)` where the qualified name is the case's
    /// test name prefixed with the snake_case names of the enclosing
    /// subdirectories (the scan root itself contributes no prefix).
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &FixtureCase)> {
        let mut out = Vec::with_capacity(self.case_count());
        self.collect_into("", &mut out);
        out
    }

    fn collect_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FixtureCase)>) {
        for case in &self.cases {
            let qualified = if prefix.is_empty() {
                case.test_name.clone()
            } else {
                format!("{prefix}/{}", case.test_name)
            };
            out.push((qualified, case));
        }
        for sub in &self.subdirs {
            let sub_name = to_snake_case(&sub.name);
            let sub_prefix = if prefix.is_empty() {
                sub_name
            } else {
                format!("{prefix}/{sub_name}")
            };
            sub.collect_into(&sub_prefix, out);
        }
    }

    /// Serialize the scanned set as a pretty JSON manifest.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a manifest produced by [`FixtureDir::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
