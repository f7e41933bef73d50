//! Fixture directory scanning.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::convention::FixtureConvention;
use crate::fixture::{FixtureCase, FixtureDir};

/// Error raised while scanning a fixture tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    #[error("fixture root {} is not a directory", .path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },
    /// A directory entry could not be read.
    #[error("io error under {}: {source}", .path.display())]
    Io {
        /// Directory being listed when the error occurred.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },
}

/// Scan a fixture tree rooted at `root`.
///
/// Files matching the convention's before pattern become cases; the paired
/// after path is derived whether or not the file exists yet. Subdirectories
/// are scanned recursively and kept only when they transitively contain at
/// least one case. Ordering is deterministic: cases by stem, subdirectories
/// by name.
pub fn scan_fixture_dir(
    root: &Path,
    convention: &FixtureConvention,
) -> Result<FixtureDir, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    scan_dir(root, convention)
}

fn scan_dir(dir: &Path, convention: &FixtureConvention) -> Result<FixtureDir, ScanError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .map(|entry| {
            entry.map(|e| e.path()).map_err(|source| ScanError::Io {
                path: dir.to_path_buf(),
                source,
            })
        })
        .collect::<Result<_, _>>()?;
    entries.sort();

    let mut cases = Vec::new();
    let mut subdirs = Vec::new();
    for path in entries {
        if path.is_dir() {
            let sub = scan_dir(&path, convention)?;
            if sub.case_count() > 0 {
                subdirs.push(sub);
            }
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(stem) = convention.parse_before(file_name) {
            cases.push(FixtureCase {
                stem: stem.to_string(),
                test_name: convention.test_name(stem),
                before_path: path.clone(),
                after_path: dir.join(convention.after_file_name(stem)),
            });
        }
    }

    Ok(FixtureDir {
        root: dir.to_path_buf(),
        name: dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string(),
        cases,
        subdirs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!("confix_scan_{tag}_{}", std::process::id()));
            let _ = std::fs::remove_dir_all(&root);
            std::fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn write(&self, rel: &str, content: &str) {
            let path = self.root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, content).unwrap();
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn scans_pairs_and_ignores_non_fixtures() {
        let tree = TempTree::new("pairs");
        tree.write("helloWorld_before.gradle", "apply plugin: 'android'\n");
        tree.write("helloWorld_after.gradle", "apply plugin: 'android'\n");
        tree.write("readme.md", "not a fixture\n");
        tree.write("orphan_after.gradle", "only the expected side\n");

        let scanned = scan_fixture_dir(&tree.root, &FixtureConvention::gradle()).unwrap();
        assert_eq!(scanned.case_count(), 1);
        assert_eq!(scanned.cases[0].stem, "helloWorld");
        assert_eq!(scanned.cases[0].test_name, "hello_world");
        assert!(scanned.cases[0].has_after());
    }

    #[test]
    fn scan_is_sorted_and_recursive() {
        let tree = TempTree::new("nested");
        tree.write("zeta_before.gradle", "");
        tree.write("alpha_before.gradle", "");
        tree.write("gradleExamples/gradleExample5_before.gradle", "");
        tree.write("gradleExamples/gradleExample0_before.gradle", "");
        tree.write("emptyDir/.keep", "");

        let scanned = scan_fixture_dir(&tree.root, &FixtureConvention::gradle()).unwrap();
        let stems: Vec<&str> = scanned.cases.iter().map(|c| c.stem.as_str()).collect();
        assert_eq!(stems, vec!["alpha", "zeta"]);
        // Subdirectory without fixtures is dropped; the one with fixtures is kept sorted.
        assert_eq!(scanned.subdirs.len(), 1);
        let nested: Vec<&str> = scanned.subdirs[0]
            .cases
            .iter()
            .map(|c| c.stem.as_str())
            .collect();
        assert_eq!(nested, vec!["gradleExample0", "gradleExample5"]);
    }

    #[test]
    fn before_without_after_still_scans() {
        let tree = TempTree::new("missing_after");
        tree.write("bare_before.gradle", "");
        let scanned = scan_fixture_dir(&tree.root, &FixtureConvention::gradle()).unwrap();
        assert_eq!(scanned.case_count(), 1);
        assert!(!scanned.cases[0].has_after());
    }

    #[test]
    fn missing_root_is_an_error() {
        let missing = std::env::temp_dir().join("confix_scan_does_not_exist");
        let err = scan_fixture_dir(&missing, &FixtureConvention::gradle()).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }

    #[test]
    fn empty_directory_scans_to_empty_set() {
        let tree = TempTree::new("empty");
        let scanned = scan_fixture_dir(&tree.root, &FixtureConvention::gradle()).unwrap();
        assert_eq!(scanned.case_count(), 0);
        assert!(scanned.cases.is_empty());
        assert!(scanned.subdirs.is_empty());
    }
}
