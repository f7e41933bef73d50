//! Core domain model for the confix configuration-conformance harness.
//!
//! This crate provides:
//! - [`FixtureConvention`]: the before/after file naming convention
//! - [`FixtureCase`] / [`FixtureDir`]: fixture pairs and (nested) fixture sets
//! - [`scan_fixture_dir`]: deterministic directory scanning
//! - [`SuiteSpec`] + completeness checking: every fixture has a test, every
//!   test has a fixture
//! - [`Configurator`]: the seam through which the external configuration
//!   engine is invoked

pub mod configure;
pub mod convention;
pub mod fixture;
pub mod scan;
pub mod suite;

pub use configure::{ConfigureError, Configurator};
pub use convention::FixtureConvention;
pub use fixture::{FixtureCase, FixtureDir, FixtureError};
pub use scan::{ScanError, scan_fixture_dir};
pub use suite::{
    CompletenessError, CompletenessReport, SuiteSpec, assert_all_fixtures_registered,
    check_completeness,
};
