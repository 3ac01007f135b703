//! Configuration for the script.
//!
//! The configuration is an optional JSON object read once at startup. It has no schema;
//! the script body pulls values out with [`Config::get_or`] and [`Config::section`].
//! A missing, unreadable or malformed file never fails the run, it yields an empty
//! configuration instead.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::load_config;
