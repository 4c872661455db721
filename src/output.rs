// ABOUTME: Step outputs for the invoking CI workflow.
// ABOUTME: Appends NAME=value lines to the GITHUB_OUTPUT file, or prints them when unset.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes named values for later workflow steps to read.
#[derive(Debug, Clone, Default)]
pub struct StepOutputs {
    path: Option<PathBuf>,
}

impl StepOutputs {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Outputs that go to stdout only.
    pub fn stdout() -> Self {
        Self { path: None }
    }

    /// Record `name=value` for the workflow.
    ///
    /// Values must be single-line; multi-line values need the heredoc
    /// delimiter syntax, which nothing here produces.
    pub fn set(&self, name: &str, value: impl Display) -> io::Result<()> {
        let line = format!("{name}={value}");
        if line.contains('\n') || line.contains('\r') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output {name} must be a single line"),
            ));
        }

        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{line}")
            }
            None => {
                tracing::warn!("GITHUB_OUTPUT is not set, printing output {name} to stdout");
                println!("{line}");
                Ok(())
            }
        }
    }
}
