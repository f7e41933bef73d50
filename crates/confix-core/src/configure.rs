//! The configurator seam.
//!
//! The engine that rewrites build scripts lives outside this workspace. The
//! harness reaches it through exactly one method: hand it the before-script,
//! get back the configured script or an error. Everything else (comparison,
//! diffing, reporting) belongs to the harness.

use thiserror::Error;

/// Error raised by a configurator invocation.
#[derive(Debug, Error)]
pub enum ConfigureError {
    /// The configurator refused to process the script.
    #[error("configurator rejected script: {reason}")]
    Rejected {
        /// Human-readable rejection reason.
        reason: String,
    },
    /// Io failure while talking to the configurator.
    #[error("configurator io: {0}")]
    Io(#[from] std::io::Error),
    /// The configurator produced output that is not UTF-8.
    #[error("configurator produced non-UTF-8 output")]
    NonUtf8Output,
    /// An external configurator process exited unsuccessfully.
    #[error("configurator exited with {status}: {stderr}")]
    Failed {
        /// Rendered exit status.
        status: String,
        /// Captured stderr.
        stderr: String,
    },
}

/// A build-script configurator.
pub trait Configurator {
    /// Short human-readable description, used in reports and logs.
    fn describe(&self) -> &str;

    /// Rewrite `before` into its configured form.
    fn configure(&self, before: &str) -> Result<String, ConfigureError>;
}

/// Plain functions and closures act as configurators, which keeps test stubs
/// cheap to write.
impl<F> Configurator for F
where
    F: Fn(&str) -> Result<String, ConfigureError>,
{
    fn describe(&self) -> &str {
        "fn"
    }

    fn configure(&self, before: &str) -> Result<String, ConfigureError> {
        self(before)
    }
}
