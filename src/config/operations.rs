//! Config loading.

use super::model::Config;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error, warn};

/// Load the configuration from a JSON file.
///
/// Every failure degrades to an empty configuration:
///
/// * missing file - warning, defaults are used
/// * unreadable file (permissions, not a file, invalid UTF-8) - error
/// * invalid JSON, or JSON that is not an object - error
///
/// # Arguments
///
/// * `path` - Path to the configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Config::default();
        }
        Err(e) => {
            error!(
                "Error reading configuration file {}: {}",
                path.display(),
                e
            );
            return Config::default();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(values)) => {
            debug!("Loaded configuration from {}", path.display());
            Config::from_map(values)
        }
        Ok(other) => {
            error!(
                "Invalid configuration file {}: expected a JSON object, found {}",
                path.display(),
                json_kind(&other)
            );
            Config::default()
        }
        Err(e) => {
            error!(
                "Invalid JSON in configuration file {}: {}",
                path.display(),
                e
            );
            Config::default()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
