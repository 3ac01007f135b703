//! Top-level orchestration.
//!
//! Sequence: requirements check, configuration load, dry-run notice, script body.
//! Every failure ends up in [`App::run`], which logs it according to its category and
//! maps it to the process exit code.

use crate::cli::Cli;
use crate::command::CommandRunner;
use crate::config::load_config;
use crate::error::{Result, ScriptError};
use crate::exit_codes;
use crate::interrupt::Interrupt;
use crate::meta;
use crate::requirements;
use crate::script::{self, Context};
use tracing::{debug, error, info, warn};


type Body = fn(&Context<'_>) -> Result<()>;

/// One run of the script with its collaborators injected.
pub struct App<'a> {
    cli: &'a Cli,
    interrupt: &'a Interrupt,
    runner: &'a dyn CommandRunner,
    requirements: fn() -> bool,
    body: Body,
}

impl<'a> App<'a> {
    pub fn new(cli: &'a Cli, interrupt: &'a Interrupt, runner: &'a dyn CommandRunner) -> Self {
        Self {
            cli,
            interrupt,
            runner,
            requirements: requirements::check_requirements,
            body: script::execute,
        }
    }

    /// Replace the requirements check.
    pub fn with_requirements(mut self, check: fn() -> bool) -> Self {
        self.requirements = check;
        self
    }

    /// Replace the script body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Run the script and return the process exit code.
    pub fn run(&self) -> i32 {
        info!("Starting {}", meta::SCRIPT_NAME);

        match self.execute() {
            Ok(()) => {
                info!("{} completed successfully", meta::SCRIPT_NAME);
                exit_codes::SUCCESS
            }
            Err(err) => self.handle_error(err),
        }
    }

    fn execute(&self) -> Result<()> {
        if !(self.requirements)() {
            error!("Requirements check failed");
            return Err(ScriptError::RequirementsNotMet);
        }
        self.interrupt.check()?;

        let config = load_config(&self.cli.config);
        debug!("Loaded config with {} entries", config.len());

        if self.cli.dry_run {
            info!("DRY RUN MODE - No changes will be made");
        }
        self.interrupt.check()?;

        let ctx = Context::new(
            &config,
            self.cli.dry_run,
            self.cli.verbose,
            self.interrupt,
            self.runner,
        );
        (self.body)(&ctx)?;

        self.interrupt.check()
    }

    fn handle_error(&self, err: ScriptError) -> i32 {
        match &err {
            ScriptError::Interrupted => warn!("Script interrupted by user"),
            // Already logged by `execute`.
            ScriptError::RequirementsNotMet => {}
            e if e.is_recognized() => {
                error!("Handled error: {}", e);
                if self.cli.verbose {
                    eprintln!("{}", e.report());
                }
            }
            e => {
                error!("Unexpected error: {}", e);
                eprintln!("{}", e.report());
            }
        }
        err.exit_code()
    }
}
