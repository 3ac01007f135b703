//! Error types for the script.
//!
//! Uses thiserror for derive macros. Errors fall into two groups: recognized ones that
//! end the run with a short message, and unclassified ones that end it with a full
//! diagnostic report.

use crate::exit_codes;
use std::fmt::Write as _;
use thiserror::Error;

/// Main error type for script operations.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The runtime requirements check did not pass.
    #[error("requirements check failed")]
    RequirementsNotMet,

    /// An operating-system level failure (file access, process spawn, ...).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A value supplied to the script was not acceptable.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An external command exited with a non-zero status.
    #[error("command '{command}' failed (exit code {status}): {stderr}", status = display_code(.code))]
    CommandFailed {
        /// The command line, shell-quoted.
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard output (trimmed).
        stdout: String,
        /// Captured standard error (trimmed).
        stderr: String,
    },

    /// The user interrupted the run.
    #[error("interrupted by user")]
    Interrupted,

    /// Anything the script does not classify itself.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

impl ScriptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScriptError::RequirementsNotMet => exit_codes::FAILURE,
            ScriptError::Io(_) => exit_codes::FAILURE,
            ScriptError::InvalidValue(_) => exit_codes::FAILURE,
            ScriptError::CommandFailed { .. } => exit_codes::UNEXPECTED,
            ScriptError::Interrupted => exit_codes::INTERRUPTED,
            ScriptError::Unexpected(_) => exit_codes::UNEXPECTED,
        }
    }

    /// Whether this error belongs to a category the script handles locally.
    ///
    /// Unrecognized errors get a full report on stderr regardless of verbosity.
    pub fn is_recognized(&self) -> bool {
        !matches!(
            self,
            ScriptError::CommandFailed { .. } | ScriptError::Unexpected(_)
        )
    }

    /// Render the error with its full cause chain, plus a backtrace when one was captured.
    pub fn report(&self) -> String {
        if let ScriptError::Unexpected(inner) = self {
            // anyhow's Debug output already includes the chain and backtrace.
            return format!("{:?}", inner);
        }

        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        if source.is_some() {
            out.push_str("\n\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            let _ = write!(out, "\n    {}: {}", depth, cause);
            depth += 1;
            source = cause.source();
        }
        out
    }
}

/// Result type alias for script operations.
pub type Result<T> = std::result::Result<T, ScriptError>;
