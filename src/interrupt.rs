//! Ctrl+C handling.
//!
//! The handler only flips a flag. Long-running code polls it through
//! [`Interrupt::check`], which turns a pending interrupt into
//! [`ScriptError::Interrupted`] (exit code 130). A second Ctrl+C exits immediately
//! with the same code, for loops that never reach a checkpoint.

use crate::error::{Result, ScriptError};
use crate::exit_codes;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "the user pressed Ctrl+C" flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag that is never set by a signal. Useful for tests and embedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the process-wide Ctrl+C handler and return its flag.
    ///
    /// Installation failure is logged and leaves the default signal behavior in place.
    pub fn install() -> Self {
        let interrupt = Self::new();
        let flag = Arc::clone(&interrupt.flag);

        let installed = ctrlc::set_handler(move || {
            if flag.swap(true, Ordering::SeqCst) {
                std::process::exit(exit_codes::INTERRUPTED);
            }
        });
        if let Err(e) = installed {
            tracing::warn!("Could not install interrupt handler: {}", e);
        }

        interrupt
    }

    /// Mark the run as interrupted.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Checkpoint: fails with `Interrupted` once the flag is set.
    pub fn check(&self) -> Result<()> {
        if self.is_triggered() {
            Err(ScriptError::Interrupted)
        } else {
            Ok(())
        }
    }
}
