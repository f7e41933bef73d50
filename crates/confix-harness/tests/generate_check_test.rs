//! The shipped generated suite must stay in sync with its fixture corpus.
//!
//! `android_gradle_suite.rs` is generator output; these tests regenerate it
//! from the current scan and fail on any drift, so editing the corpus without
//! regenerating cannot go unnoticed.

use std::path::{Path, PathBuf};

use confix_core::{FixtureConvention, scan_fixture_dir};
use confix_harness::generate::{GenerateOptions, StaleCheck, check_stale, render_suite_source};

const SUITE_SOURCE: &str = include_str!("android_gradle_suite.rs");
const FIXTURE_DIR: &str = "tests/testdata/android-gradle";

fn opts() -> GenerateOptions {
    GenerateOptions::new(FIXTURE_DIR, "tests/android_gradle_suite.rs")
}

fn scan() -> confix_core::FixtureDir {
    scan_fixture_dir(Path::new(FIXTURE_DIR), &FixtureConvention::gradle())
        .expect("testdata directory must scan")
}

#[test]
fn shipped_suite_matches_fresh_render() {
    let rendered = render_suite_source(&scan(), &opts());
    assert_eq!(
        rendered, SUITE_SOURCE,
        "android_gradle_suite.rs drifted from the renderer; regenerate it"
    );
}

#[test]
fn shipped_suite_is_not_stale() {
    assert!(matches!(
        check_stale(SUITE_SOURCE, &scan(), &opts()),
        StaleCheck::UpToDate
    ));
}

#[test]
fn suite_goes_stale_when_the_corpus_grows() {
    let root: PathBuf =
        std::env::temp_dir().join(format!("confix_stale_corpus_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("basic_before.gradle"), "a\n").unwrap();
    std::fs::write(root.join("basic_after.gradle"), "a\n").unwrap();

    let conv = FixtureConvention::gradle();
    let check_opts = GenerateOptions::new("fixtures", "suite.rs");
    let source = render_suite_source(&scan_fixture_dir(&root, &conv).unwrap(), &check_opts);

    std::fs::write(root.join("added_before.gradle"), "b\n").unwrap();
    match check_stale(&source, &scan_fixture_dir(&root, &conv).unwrap(), &check_opts) {
        StaleCheck::Stale { rendered } => assert!(rendered.contains("fn added() {")),
        StaleCheck::UpToDate => panic!("expected staleness after adding a fixture"),
    }
    let _ = std::fs::remove_dir_all(&root);
}
