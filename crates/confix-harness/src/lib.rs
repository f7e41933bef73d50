//! Conformance testing harness for build-script configurators.
//!
//! This crate provides:
//! - Suite execution: run every before/after fixture through a configurator
//!   and compare against the expected result
//! - Diff rendering and conformance reports (markdown + JSON)
//! - Generated-suite source rendering with staleness checking
//! - Test-support entry points called by generated suites
//! - Structured JSONL logging with a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod diff;
pub mod digest;
pub mod generate;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod testkit;
pub mod verify;

pub use report::ConformanceReport;
pub use runner::SuiteRunner;
pub use verify::{VerificationResult, VerificationSummary};
