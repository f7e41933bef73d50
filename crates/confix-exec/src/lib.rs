//! Configurator execution adapters shared by harness tooling.
//!
//! This crate provides a stable seam so the harness does not depend on any
//! concrete configuration engine: the real engine runs as an external process
//! behind [`CommandConfigurator`], and [`ReplayConfigurator`] covers the
//! already-configured path.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use confix_core::{ConfigureError, Configurator};

/// Runs an external configurator executable.
///
/// Contract with the external program: the before-script arrives on stdin,
/// the configured script is expected on stdout, and a non-zero exit status
/// means the script was rejected.
#[derive(Debug, Clone)]
pub struct CommandConfigurator {
    program: PathBuf,
    args: Vec<String>,
    description: String,
}

impl CommandConfigurator {
    /// Create an adapter for `program`.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let description = format!("command:{}", program.display());
        Self {
            program,
            args: Vec::new(),
            description,
        }
    }

    /// Append a fixed argument passed on every invocation.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Configurator for CommandConfigurator {
    fn describe(&self) -> &str {
        &self.description
    }

    fn configure(&self, before: &str) -> Result<String, ConfigureError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Close stdin after writing so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(before.as_bytes())?;
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(ConfigureError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| ConfigureError::NonUtf8Output)
    }
}

/// Returns the input unchanged.
///
/// Models a script that needs no configuration; also serves as the built-in
/// smoke configurator for harness self-checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayConfigurator;

impl Configurator for ReplayConfigurator {
    fn describe(&self) -> &str {
        "replay"
    }

    fn configure(&self, before: &str) -> Result<String, ConfigureError> {
        Ok(before.to_string())
    }
}
