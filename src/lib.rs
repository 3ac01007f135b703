//! {{SCRIPT_NAME}} - {{DESCRIPTION}}
//!
//! Created from template on {{DATE}} by {{AUTHOR}}.
//!
//! The binary parses arguments, sets up logging, checks requirements, loads an optional
//! JSON configuration and hands over to [`script::execute`], where the script's own
//! logic goes.

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod interrupt;
pub mod logging;
pub mod meta;
pub mod requirements;
pub mod script;

#[cfg(test)]
mod test_support;
