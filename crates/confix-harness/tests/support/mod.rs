//! Shared delegate for the generated android-gradle suite.
//!
//! Binds the generated tests to a configurator. The stub used here appends
//! the Kotlin Android plugin line when it is missing, which is enough to
//! exercise the harness end to end without the real engine.

use confix_core::{ConfigureError, Configurator};

const KOTLIN_PLUGIN_LINE: &str = "apply plugin: 'kotlin-android'";

/// Minimal stand-in for the external configuration engine.
pub struct KotlinPluginStub;

impl Configurator for KotlinPluginStub {
    fn describe(&self) -> &str {
        "kotlin-plugin-stub"
    }

    fn configure(&self, before: &str) -> Result<String, ConfigureError> {
        if before.lines().any(|line| line.trim() == KOTLIN_PLUGIN_LINE) {
            return Ok(before.to_string());
        }
        let mut out = before.to_string();
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(KOTLIN_PLUGIN_LINE);
        out.push('\n');
        Ok(out)
    }
}

/// Shared verification entry point for every generated test.
pub fn run_fixture(dir: &str, stem: &str) {
    confix_harness::testkit::verify_fixture(dir, stem, &KotlinPluginStub);
}
