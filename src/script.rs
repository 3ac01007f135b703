//! The script body.
//!
//! [`execute`] is the extension point: replace the placeholder log line with the
//! script's logic. Everything it needs arrives through [`Context`], which keeps the body
//! testable without a real process environment.

use crate::command::{CommandOutput, CommandRunner};
use crate::config::Config;
use crate::error::Result;
use crate::interrupt::Interrupt;
use std::path::Path;
use tracing::info;

/// Everything the script body may use.
pub struct Context<'a> {
    /// Configuration snapshot, empty when no usable file was found.
    pub config: &'a Config,
    /// Report intended actions instead of performing them.
    pub dry_run: bool,
    /// The user asked for verbose output.
    pub verbose: bool,
    interrupt: &'a Interrupt,
    runner: &'a dyn CommandRunner,
}

impl<'a> Context<'a> {
    pub fn new(
        config: &'a Config,
        dry_run: bool,
        verbose: bool,
        interrupt: &'a Interrupt,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            dry_run,
            verbose,
            interrupt,
            runner,
        }
    }

    /// Fails with `Interrupted` once Ctrl+C was pressed. Call it inside long loops.
    pub fn checkpoint(&self) -> Result<()> {
        self.interrupt.check()
    }

    /// The interrupt flag, for handing to worker code.
    pub fn interrupt(&self) -> &Interrupt {
        self.interrupt
    }

    /// Run an external command, or only log it in dry-run mode.
    ///
    /// Returns `Ok(None)` when the command was skipped because of `--dry-run`.
    pub fn run_command<S: AsRef<str>>(
        &self,
        args: &[S],
        cwd: Option<&Path>,
    ) -> Result<Option<CommandOutput>> {
        let args: Vec<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();

        if self.dry_run {
            info!("DRY RUN: would run {}", shell_words::join(&args));
            return Ok(None);
        }

        self.checkpoint()?;
        self.runner.run(&args, cwd).map(Some)
    }
}

/// Script logic.
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    ctx.checkpoint()?;

    // Use configuration values if available, e.g.:
    //
    // let timeout: u64 = ctx.config.get_or("timeout", 30);
    // if ctx.config.get_or("enable_feature", false) {
    //     info!("Feature enabled via configuration");
    // }
    //
    // Run external commands through the context so --dry-run is honored:
    //
    // if let Some(output) = ctx.run_command(&["ls", "-la"], None)? {
    //     for line in output.lines() {
    //         println!("{}", line);
    //     }
    // }
    //
    // Print extra detail only when asked for:
    //
    // if ctx.verbose {
    //     println!("{} config entries", ctx.config.len());
    // }

    info!("Script logic not yet implemented");
    Ok(())
}
