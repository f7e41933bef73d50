//! CLI entrypoint for the confix conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use confix_core::{Configurator, FixtureConvention, scan_fixture_dir};
use confix_exec::CommandConfigurator;
use confix_harness::digest::corpus_digest;
use confix_harness::generate::{GenerateOptions, StaleCheck, check_stale, render_suite_source};
use confix_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, sha256_hex,
};
use confix_harness::{ConformanceReport, SuiteRunner};

/// Conformance tooling for build-script configurators.
#[derive(Debug, Parser)]
#[command(name = "harness")]
#[command(about = "Fixture conformance harness for build-script configurators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a fixture directory and print or export its JSON manifest.
    Scan {
        /// Fixture directory root.
        #[arg(long)]
        dir: PathBuf,
        /// Output path for the manifest (stdout when omitted).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render the generated suite source for a fixture directory.
    Generate {
        /// Fixture directory root.
        #[arg(long)]
        dir: PathBuf,
        /// Output path for the generated Rust source.
        #[arg(long)]
        output: PathBuf,
        /// Name of the support module providing `run_fixture`.
        #[arg(long, default_value = "support")]
        support_mod: String,
        /// Fixture directory label embedded in the source (defaults to --dir).
        #[arg(long)]
        dir_label: Option<String>,
    },
    /// Check an existing generated suite source for staleness.
    Check {
        /// Fixture directory root.
        #[arg(long)]
        dir: PathBuf,
        /// Generated suite source to check.
        #[arg(long)]
        suite: PathBuf,
        /// Name of the support module providing `run_fixture`.
        #[arg(long, default_value = "support")]
        support_mod: String,
        /// Fixture directory label embedded in the source (defaults to --dir).
        #[arg(long)]
        dir_label: Option<String>,
    },
    /// Run an external configurator over every fixture and report.
    Verify {
        /// Fixture directory root.
        #[arg(long)]
        dir: PathBuf,
        /// External configurator command. Receives the before-script on
        /// stdin and must emit the configured script on stdout.
        #[arg(long)]
        configurator: PathBuf,
        /// Additional argument passed to the configurator (repeatable).
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path (an artifact index is written alongside).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
        /// Campaign name recorded in reports and logs.
        #[arg(long, default_value = "fixture-verify")]
        campaign: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let convention = FixtureConvention::gradle();

    match cli.command {
        Command::Scan { dir, output } => {
            let scanned = scan_fixture_dir(&dir, &convention)?;
            eprintln!(
                "Scanned {}: {} fixture(s), corpus digest {}",
                dir.display(),
                scanned.case_count(),
                corpus_digest(&scanned)?
            );
            let manifest = scanned.to_json()?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, manifest)?;
                    eprintln!("Wrote manifest to {}", path.display());
                }
                None => println!("{manifest}"),
            }
        }
        Command::Generate {
            dir,
            output,
            support_mod,
            dir_label,
        } => {
            let scanned = scan_fixture_dir(&dir, &convention)?;
            let label = dir_label.unwrap_or_else(|| dir.display().to_string());
            let opts = GenerateOptions::new(label, output.display().to_string())
                .with_support_mod(support_mod);
            let source = render_suite_source(&scanned, &opts);
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, source)?;
            eprintln!(
                "Wrote generated suite for {} fixture(s) to {}",
                scanned.case_count(),
                output.display()
            );
        }
        Command::Check {
            dir,
            suite,
            support_mod,
            dir_label,
        } => {
            let scanned = scan_fixture_dir(&dir, &convention)?;
            let existing = std::fs::read_to_string(&suite)?;
            let label = dir_label.unwrap_or_else(|| dir.display().to_string());
            let opts = GenerateOptions::new(label, suite.display().to_string())
                .with_support_mod(support_mod);
            match check_stale(&existing, &scanned, &opts) {
                StaleCheck::UpToDate => {
                    eprintln!("OK: {} matches the fixture directory", suite.display());
                }
                StaleCheck::Stale { .. } => {
                    return Err(format!(
                        "generated suite {} is stale; regenerate with: \
                         harness generate --dir {} --output {}",
                        suite.display(),
                        dir.display(),
                        suite.display()
                    )
                    .into());
                }
            }
        }
        Command::Verify {
            dir,
            configurator,
            args,
            report,
            log,
            timestamp,
            campaign,
        } => {
            let scanned = scan_fixture_dir(&dir, &convention)?;
            eprintln!(
                "Verifying {} fixture(s) in {}",
                scanned.case_count(),
                dir.display()
            );

            let mut command = CommandConfigurator::new(&configurator);
            for arg in args {
                command = command.with_arg(arg);
            }

            let results = SuiteRunner::new(&campaign).run(&scanned, &command);
            let digest = corpus_digest(&scanned)?;
            let timestamp =
                timestamp.unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now()));
            let report_doc = ConformanceReport::new(
                "Configuration Conformance Report",
                &campaign,
                command.describe(),
                timestamp,
                digest,
                results,
            );

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            let mut artifact_paths = Vec::new();
            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json()?)?;
                eprintln!(
                    "Wrote report to {} and {}",
                    report_path.display(),
                    json_path.display()
                );
                artifact_paths.push(report_path);
                artifact_paths.push(json_path);
            }

            if let Some(log_path) = log {
                if let Some(parent) = log_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let run_id = format!("run-{}", std::process::id());
                let mut emitter = LogEmitter::to_file(&log_path, &campaign, &run_id)?;
                for result in &report_doc.results {
                    let level = if result.passed {
                        LogLevel::Info
                    } else {
                        LogLevel::Error
                    };
                    let outcome = if result.passed {
                        Outcome::Pass
                    } else {
                        Outcome::Fail
                    };
                    emitter.emit_entry(
                        LogEntry::new("", level, "case_verified")
                            .with_case(scanned.name.clone(), result.case_name.clone())
                            .with_configurator(command.describe())
                            .with_outcome(outcome),
                    )?;
                }
                let refs: Vec<String> = artifact_paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "verify_complete")
                        .with_outcome(if report_doc.summary.all_passed() {
                            Outcome::Pass
                        } else {
                            Outcome::Fail
                        })
                        .with_artifacts(refs)
                        .with_details(serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        })),
                )?;
                emitter.flush()?;

                let mut index = ArtifactIndex::new(&run_id, &campaign);
                for path in &artifact_paths {
                    let bytes = std::fs::read(path)?;
                    index.add(path.display().to_string(), "report", sha256_hex(&bytes));
                }
                let index_path = log_path.with_extension("index.json");
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!(
                    "Wrote log to {} and artifact index to {}",
                    log_path.display(),
                    index_path.display()
                );
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
    }

    Ok(())
}
