//! Before/after fixture naming convention.
//!
//! A fixture pair is identified by a shared stem: `<stem>_before.gradle`
//! holds the input script and `<stem>_after.gradle` the expected result of
//! running the configurator over it. Stems are restricted to word characters
//! so every stem maps onto a usable test identifier.

use serde::{Deserialize, Serialize};

/// Naming convention binding a fixture stem to its before/after files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureConvention {
    /// Marker appended to the stem of the input file (e.g. `_before`).
    pub before_marker: String,
    /// Marker appended to the stem of the expected-result file (e.g. `_after`).
    pub after_marker: String,
    /// File extension without the dot (e.g. `gradle`).
    pub extension: String,
}

impl Default for FixtureConvention {
    fn default() -> Self {
        Self::gradle()
    }
}

impl FixtureConvention {
    /// The Gradle build-script convention: `<stem>_before.gradle` paired with
    /// `<stem>_after.gradle`.
    #[must_use]
    pub fn gradle() -> Self {
        Self {
            before_marker: String::from("_before"),
            after_marker: String::from("_after"),
            extension: String::from("gradle"),
        }
    }

    /// Build a custom convention.
    #[must_use]
    pub fn new(
        before_marker: impl Into<String>,
        after_marker: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            before_marker: before_marker.into(),
            after_marker: after_marker.into(),
            extension: extension.into(),
        }
    }

    /// Extract the stem from a before-file name.
    ///
    /// Returns `None` unless the name is exactly `<stem><before_marker>.<extension>`
    /// with a non-empty word-character stem.
    #[must_use]
    pub fn parse_before<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.parse_with_marker(file_name, &self.before_marker)
    }

    /// Extract the stem from an after-file name.
    #[must_use]
    pub fn parse_after<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.parse_with_marker(file_name, &self.after_marker)
    }

    fn parse_with_marker<'a>(&self, file_name: &'a str, marker: &str) -> Option<&'a str> {
        let stem = file_name
            .strip_suffix(&self.extension)?
            .strip_suffix('.')?
            .strip_suffix(marker)?;
        is_word_stem(stem).then_some(stem)
    }

    /// File name of the input script for `stem`.
    #[must_use]
    pub fn before_file_name(&self, stem: &str) -> String {
        format!("{stem}{}.{}", self.before_marker, self.extension)
    }

    /// File name of the expected-result script for `stem`.
    #[must_use]
    pub fn after_file_name(&self, stem: &str) -> String {
        format!("{stem}{}.{}", self.after_marker, self.extension)
    }

    /// Derive the test identifier for a fixture stem.
    ///
    /// Stems follow the camelCase habits of the fixture corpus; test names are
    /// snake_case so they can be used verbatim as Rust function names.
    #[must_use]
    pub fn test_name(&self, stem: &str) -> String {
        to_snake_case(stem)
    }
}

fn is_word_stem(stem: &str) -> bool {
    !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// camelCase → snake_case, preserving digits and existing underscores.
///
/// A leading digit gets an underscore prefix so the result is always a valid
/// identifier.
#[must_use]
pub fn to_snake_case(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in stem.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
