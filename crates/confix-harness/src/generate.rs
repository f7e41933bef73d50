//! Generated-suite source rendering and staleness checking.
//!
//! The enumerated test file is generator output: one `#[test]` per fixture,
//! one enumeration assertion per fixture set, nested modules for nested
//! directories. `check_stale` re-renders from the current scan and compares,
//! so an edited corpus is caught before the stale enumeration can lie.

use confix_core::FixtureDir;
use confix_core::convention::to_snake_case;

/// Parameters for suite-source rendering.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Fixture directory path as it should appear in the generated source,
    /// relative to the consuming crate root.
    pub fixture_dir_label: String,
    /// Output file path used in the regeneration hint.
    pub output_label: String,
    /// Name of the sibling module providing `run_fixture`.
    pub support_mod: String,
}

impl GenerateOptions {
    /// Options with the conventional `support` module.
    #[must_use]
    pub fn new(fixture_dir_label: impl Into<String>, output_label: impl Into<String>) -> Self {
        Self {
            fixture_dir_label: fixture_dir_label.into(),
            output_label: output_label.into(),
            support_mod: String::from("support"),
        }
    }

    /// Override the support module name.
    #[must_use]
    pub fn with_support_mod(mut self, support_mod: impl Into<String>) -> Self {
        self.support_mod = support_mod.into();
        self
    }
}

/// Staleness verdict for an existing generated source.
#[derive(Debug, Clone)]
pub enum StaleCheck {
    /// The existing source matches a fresh render.
    UpToDate,
    /// The existing source no longer matches the fixture directory.
    Stale {
        /// What the source should look like now.
        rendered: String,
    },
}

/// Render the generated suite source for a scanned fixture directory.
///
/// The output is deterministic: cases and subdirectories appear in scan
/// order, which is sorted.
#[must_use]
pub fn render_suite_source(fixtures: &FixtureDir, opts: &GenerateOptions) -> String {
    let mut blocks = vec![
        format!(
            "// Generated by the confix harness. DO NOT EDIT MANUALLY.\n\
             // Regenerate with: harness generate --dir {} --output {}",
            opts.fixture_dir_label, opts.output_label
        ),
        format!("mod {};", opts.support_mod),
    ];
    blocks.extend(render_set(
        fixtures,
        &opts.fixture_dir_label,
        &opts.support_mod,
    ));
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

/// Blocks for one fixture set: dir constant, enumeration assertion, one test
/// per case, one nested module per subdirectory.
fn render_set(fixtures: &FixtureDir, dir_label: &str, support_mod: &str) -> Vec<String> {
    let mut blocks = vec![format!("const FIXTURE_DIR: &str = \"{dir_label}\";")];

    let stems = quoted_list(fixtures.cases.iter().map(|c| c.stem.as_str()));
    let subs = quoted_list(fixtures.subdirs.iter().map(|d| d.name.as_str()));
    blocks.push(format!(
        "#[test]\n\
         fn all_fixtures_present() {{\n\
         \x20   confix_harness::testkit::assert_enumeration(\n\
         \x20       FIXTURE_DIR,\n\
         \x20       &[{stems}],\n\
         \x20       &[{subs}],\n\
         \x20   );\n\
         }}"
    ));

    for case in &fixtures.cases {
        blocks.push(format!(
            "#[test]\n\
             fn {}() {{\n\
             \x20   crate::{support_mod}::run_fixture(FIXTURE_DIR, \"{}\");\n\
             }}",
            case.test_name, case.stem
        ));
    }

    for sub in &fixtures.subdirs {
        let sub_label = format!("{dir_label}/{}", sub.name);
        let inner = render_set(sub, &sub_label, support_mod).join("\n\n");
        blocks.push(format!(
            "mod {} {{\n{}\n}}",
            to_snake_case(&sub.name),
            indent_block(&inner)
        ));
    }
    blocks
}

fn quoted_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn indent_block(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compare an existing generated source with a fresh render.
///
/// Leading comment lines are ignored so the regeneration hint may differ
/// (absolute vs relative output paths) without flagging staleness.
#[must_use]
pub fn check_stale(existing: &str, fixtures: &FixtureDir, opts: &GenerateOptions) -> StaleCheck {
    let rendered = render_suite_source(fixtures, opts);
    if strip_header(existing) == strip_header(&rendered) {
        StaleCheck::UpToDate
    } else {
        StaleCheck::Stale { rendered }
    }
}

fn strip_header(source: &str) -> String {
    source
        .lines()
        .skip_while(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || trimmed.starts_with("//")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use confix_core::{FixtureConvention, scan_fixture_dir};
    use std::path::PathBuf;

    fn tree(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("confix_gen_{tag}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    fn write(root: &PathBuf, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn scan(root: &PathBuf) -> confix_core::FixtureDir {
        scan_fixture_dir(root, &FixtureConvention::gradle()).unwrap()
    }

    #[test]
    fn renders_tests_and_enumeration_assertion() {
        let root = tree("render");
        write(&root, "helloWorld_before.gradle", "");
        write(&root, "gradleExamples/gradleExample0_before.gradle", "");

        let opts = GenerateOptions::new("tests/testdata/demo", "tests/demo_suite.rs");
        let source = render_suite_source(&scan(&root), &opts);

        assert!(source.starts_with("// Generated by the confix harness."));
        assert!(source.contains("mod support;"));
        assert!(source.contains("const FIXTURE_DIR: &str = \"tests/testdata/demo\";"));
        assert!(source.contains("fn hello_world() {"));
        assert!(source.contains("crate::support::run_fixture(FIXTURE_DIR, \"helloWorld\");"));
        assert!(source.contains("mod gradle_examples {"));
        assert!(source.contains("    const FIXTURE_DIR: &str = \"tests/testdata/demo/gradleExamples\";"));
        assert!(source.contains("    fn gradle_example0() {"));
        assert!(source.contains("&[\"helloWorld\"],"));
        assert!(source.contains("&[\"gradleExamples\"],"));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn render_is_deterministic() {
        let root = tree("determinism");
        write(&root, "b_before.gradle", "");
        write(&root, "a_before.gradle", "");

        let opts = GenerateOptions::new("d", "o.rs");
        let first = render_suite_source(&scan(&root), &opts);
        let second = render_suite_source(&scan(&root), &opts);
        assert_eq!(first, second);
        // Sorted enumeration regardless of creation order.
        let a_pos = first.find("fn a()").unwrap();
        let b_pos = first.find("fn b()").unwrap();
        assert!(a_pos < b_pos);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn fresh_render_is_up_to_date() {
        let root = tree("fresh");
        write(&root, "a_before.gradle", "");

        let opts = GenerateOptions::new("d", "o.rs");
        let scanned = scan(&root);
        let source = render_suite_source(&scanned, &opts);
        assert!(matches!(
            check_stale(&source, &scanned, &opts),
            StaleCheck::UpToDate
        ));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn added_fixture_makes_source_stale() {
        let root = tree("stale");
        write(&root, "a_before.gradle", "");

        let opts = GenerateOptions::new("d", "o.rs");
        let source = render_suite_source(&scan(&root), &opts);

        write(&root, "b_before.gradle", "");
        match check_stale(&source, &scan(&root), &opts) {
            StaleCheck::Stale { rendered } => assert!(rendered.contains("fn b() {")),
            StaleCheck::UpToDate => panic!("expected stale after adding a fixture"),
        }
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn header_differences_do_not_flag_staleness() {
        let root = tree("header");
        write(&root, "a_before.gradle", "");

        let scanned = scan(&root);
        let source = render_suite_source(
            &scanned,
            &GenerateOptions::new("d", "/absolute/path/o.rs"),
        );
        assert!(matches!(
            check_stale(&source, &scanned, &GenerateOptions::new("d", "o.rs")),
            StaleCheck::UpToDate
        ));
        let _ = std::fs::remove_dir_all(&root);
    }
}
