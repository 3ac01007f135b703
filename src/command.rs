//! External command runner.
//!
//! Runs one process synchronously with captured stdout/stderr. A non-zero exit is logged
//! together with the captured stderr and then returned to the caller as
//! [`ScriptError::CommandFailed`]; nothing is retried or swallowed here.

use crate::error::{Result, ScriptError};
use crate::interrupt::Interrupt;
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, error};

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error, untrimmed.
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Returns stdout lines, without the trailing newline.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Seam between the script body and process execution.
pub trait CommandRunner {
    /// Run `args[0]` with the remaining arguments, optionally inside `cwd`.
    fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput>;
}

/// Runs commands on the host, reporting a Ctrl+C that arrived while the child ran.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    interrupt: Interrupt,
}

impl SystemRunner {
    pub fn new(interrupt: Interrupt) -> Self {
        Self { interrupt }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput> {
        let result = run_command(args, cwd);
        // The child shares our process group, so Ctrl+C usually kills it too; report
        // the interrupt rather than the resulting failure.
        self.interrupt.check()?;
        result
    }
}

/// Run a command and return its captured output.
///
/// # Arguments
///
/// * `args` - Program followed by its arguments
/// * `cwd` - Working directory for the command, or the current one when `None`
///
/// # Returns
///
/// * `Ok(CommandOutput)` - On exit code 0
/// * `Err(ScriptError::CommandFailed)` - On non-zero exit, carrying stdout and stderr
/// * `Err(ScriptError::Io)` - When the process could not be started
/// * `Err(ScriptError::InvalidValue)` - When `args` is empty
///
/// # Examples
///
/// ```ignore
/// let output = run_command(&["ls", "-la"], None)?;
/// println!("{}", output.stdout);
/// ```
pub fn run_command<S: AsRef<str>>(args: &[S], cwd: Option<&Path>) -> Result<CommandOutput> {
    let Some((program, rest)) = args.split_first() else {
        return Err(ScriptError::InvalidValue(
            "cannot run an empty command".to_string(),
        ));
    };
    let program = program.as_ref();
    let command_line = shell_words::join(args);
    debug!("Running command: {}", command_line);

    let mut command = Command::new(program);
    command.args(rest.iter().map(|arg| arg.as_ref()));
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| {
        std::io::Error::new(e.kind(), format!("failed to execute '{}': {}", program, e))
    })?;
    let result = CommandOutput::from_output(&output);

    if output.status.success() {
        debug!("Command output: {}", result.stdout.trim());
        Ok(result)
    } else {
        error!(
            "Command failed: {} (exit code {})",
            command_line,
            result
                .status
                .map_or_else(|| "signal".to_string(), |c| c.to_string())
        );
        error!("stderr: {}", result.stderr.trim());
        Err(ScriptError::CommandFailed {
            command: command_line,
            code: result.status,
            stdout: result.stdout.trim().to_string(),
            stderr: result.stderr.trim().to_string(),
        })
    }
}
