//! Exit code constants for the script.
//!
//! - 0: Success
//! - 1: Recognized failure (requirements not met, I/O or value errors)
//! - 2: Argument parsing failure (emitted by clap itself)
//! - 70: Unclassified failure (see `sysexits.h` `EX_SOFTWARE`)
//! - 130: Interrupted by the user (128 + SIGINT)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Recognized failure: requirements not met, or an I/O or value error.
pub const FAILURE: i32 = 1;

/// An error the script does not know how to classify.
pub const UNEXPECTED: i32 = 70;

/// The user interrupted the script (Ctrl+C).
pub const INTERRUPTED: i32 = 130;
