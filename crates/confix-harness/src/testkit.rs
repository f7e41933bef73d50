//! Test-support entry points called by generated suites.
//!
//! Everything here panics on failure and is meant to run inside `#[test]`
//! functions. A generated suite delegates each test to `run_fixture` in its
//! support module, which in turn binds a configurator and calls
//! [`verify_fixture`]; the per-set enumeration assertions call
//! [`assert_enumeration`].

use std::path::Path;

use confix_core::{Configurator, FixtureCase, FixtureConvention, scan_fixture_dir};

use crate::runner::SuiteRunner;

/// Verify a single fixture under the Gradle convention.
///
/// # Panics
///
/// Panics with the rendered diff when the configurator output does not match
/// the expected script, or when either side of the pair cannot be read.
pub fn verify_fixture(dir: &str, stem: &str, configurator: &dyn Configurator) {
    verify_fixture_with(dir, stem, &FixtureConvention::gradle(), configurator);
}

/// Verify a single fixture under a custom convention.
///
/// # Panics
///
/// Same contract as [`verify_fixture`].
pub fn verify_fixture_with(
    dir: &str,
    stem: &str,
    convention: &FixtureConvention,
    configurator: &dyn Configurator,
) {
    let dir_path = Path::new(dir);
    let test_name = convention.test_name(stem);
    let case = FixtureCase {
        stem: stem.to_string(),
        test_name: test_name.clone(),
        before_path: dir_path.join(convention.before_file_name(stem)),
        after_path: dir_path.join(convention.after_file_name(stem)),
    };
    let result = SuiteRunner::new("generated").run_case(&test_name, &case, configurator);
    assert!(
        result.passed,
        "fixture '{stem}' in {dir} failed verification:\n{}",
        result.diff.as_deref().unwrap_or("(no diff rendered)")
    );
}

/// Assert that the fixtures on disk match the generated enumeration.
///
/// `stems` and `subdirs` are the direct children the generated source claims
/// for `dir`, in sorted order; nested sets assert their own directories.
///
/// # Panics
///
/// Panics when the directory cannot be scanned or when either list drifted,
/// which means the suite source must be regenerated.
pub fn assert_enumeration(dir: &str, stems: &[&str], subdirs: &[&str]) {
    let scanned = scan_fixture_dir(Path::new(dir), &FixtureConvention::gradle())
        .unwrap_or_else(|err| panic!("failed scanning fixture dir {dir}: {err}"));
    let found_stems: Vec<&str> = scanned.cases.iter().map(|c| c.stem.as_str()).collect();
    let found_subdirs: Vec<&str> = scanned.subdirs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        found_stems, stems,
        "fixtures in {dir} drifted from the generated enumeration; regenerate the suite source"
    );
    assert_eq!(
        found_subdirs, subdirs,
        "subdirectories in {dir} drifted from the generated enumeration; regenerate the suite source"
    );
}
