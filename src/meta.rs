//! Script identity.
//!
//! The `{{...}}` tokens below are replaced verbatim by the project generator. Everything
//! else in the crate reads the script's name, description, author and creation date from
//! here, so a generator only has to touch this file and `Cargo.toml`.

use std::path::PathBuf;

/// Name of the script, also used for the default configuration file name.
pub const SCRIPT_NAME: &str = "{{SCRIPT_NAME}}";

/// One-line description shown in `--help`.
pub const DESCRIPTION: &str = "{{DESCRIPTION}}";

/// Author credited in `--help`.
pub const AUTHOR: &str = "{{AUTHOR}}";

/// Date the script was generated.
pub const DATE: &str = "{{DATE}}";

/// Footer for `--help` with an example invocation.
pub const USAGE_EXAMPLE: &str = "Example usage: {{SCRIPT_NAME}} --verbose";

/// Default configuration file: `<config dir>/{{SCRIPT_NAME}}.json`.
///
/// The config dir is `$XDG_CONFIG_HOME` when set, otherwise `~/.config`. Falls back to
/// the current directory when no home directory can be determined.
pub fn default_config_path() -> PathBuf {
    config_dir().join(format!("{}.json", SCRIPT_NAME))
}

fn config_dir() -> PathBuf {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    }
}
