//! Entry point for {{SCRIPT_NAME}}.
//!
//! Parses arguments, installs logging and the Ctrl+C handler, then runs the script and
//! exits with the code it reports.

use script_template::app::App;
use script_template::cli::Cli;
use script_template::command::SystemRunner;
use script_template::exit_codes;
use script_template::interrupt::Interrupt;
use script_template::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let interrupt = Interrupt::install();
    let runner = SystemRunner::new(interrupt.clone());

    let code = App::new(&cli, &interrupt, &runner).run();
    ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::FAILURE as u8))
}
