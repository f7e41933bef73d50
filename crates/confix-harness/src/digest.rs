//! Corpus digests.
//!
//! A verification run is only meaningful relative to the exact fixture corpus
//! it ran against, so reports carry a blake3 digest over every qualified case
//! name and both sides of each pair.

use confix_core::{FixtureDir, FixtureError};

/// Compute the blake3 digest of a scanned fixture corpus.
///
/// Covers qualified case names, before-content, and after-content (when the
/// after file exists); any content or membership change produces a different
/// digest.
pub fn corpus_digest(fixtures: &FixtureDir) -> Result<String, FixtureError> {
    let mut hasher = blake3::Hasher::new();
    for (qualified, case) in fixtures.flatten() {
        hasher.update(qualified.as_bytes());
        hasher.update(b"\0");
        hasher.update(case.load_before()?.as_bytes());
        hasher.update(b"\0");
        if case.has_after() {
            hasher.update(case.load_after()?.as_bytes());
        }
        hasher.update(b"\0");
    }
    Ok(hasher.finalize().to_hex().to_string())
}
