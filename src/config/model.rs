//! Config struct definition and typed accessors.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Immutable snapshot of the configuration file: a JSON object keyed by string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: Map<String, Value>,
}

impl Config {
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value for `key` deserialized into `T`, or `default` when absent.
    ///
    /// A value of the wrong shape also yields `default`, with a warning.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            None => default,
            Some(value) => match T::deserialize(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Ignoring configuration key '{}': {}", key, e);
                    default
                }
            },
        }
    }

    /// Nested object under `key` deserialized into `T`.
    ///
    /// Returns `None` when the key is absent or does not match `T`.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match T::deserialize(value) {
            Ok(section) => Some(section),
            Err(e) => {
                warn!("Ignoring configuration section '{}': {}", key, e);
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
