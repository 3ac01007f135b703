//! Runtime requirements check.
//!
//! Verifies that the binary was built with a supported toolchain and that every
//! external program the script depends on can be found on `PATH`.

use regex::Regex;
use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{debug, error, warn};

/// `rustc --version` output captured by the build script. Empty when unknown.
pub const TOOLCHAIN_VERSION: &str = env!("SCRIPT_TOOLCHAIN_VERSION");

/// Oldest supported toolchain. Keep in sync with `rust-version` in `Cargo.toml`.
pub const MINIMUM_TOOLCHAIN: Version = Version::new(1, 85, 0);

/// External programs that must be on `PATH`.
///
/// Add entries here when the script shells out, e.g. `&["git", "rsync"]`.
pub const REQUIRED_PROGRAMS: &[&str] = &[];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid")
});

/// A `MAJOR.MINOR.PATCH` version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the first `MAJOR.MINOR[.PATCH]` from `text`.
    ///
    /// Accepts bare versions (`1.85`) as well as tool output such as
    /// `rustc 1.85.0 (4d91de4e4 2025-02-17)`. A missing patch component is 0.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check if all requirements are met for this build and environment.
pub fn check_requirements() -> bool {
    check_with(
        Version::parse(TOOLCHAIN_VERSION),
        MINIMUM_TOOLCHAIN,
        REQUIRED_PROGRAMS,
        std::env::var_os("PATH").as_deref(),
    )
}

/// Requirements check with every input supplied by the caller.
///
/// An unknown toolchain version only produces a warning.
pub fn check_with(
    toolchain: Option<Version>,
    minimum: Version,
    programs: &[&str],
    search_path: Option<&OsStr>,
) -> bool {
    match toolchain {
        Some(version) if version < minimum => {
            error!(
                "Rust {} or higher is required (built with {})",
                minimum, version
            );
            return false;
        }
        Some(version) => debug!("Toolchain {} satisfies minimum {}", version, minimum),
        None => warn!("Could not determine the toolchain version, skipping version check"),
    }

    let mut satisfied = true;
    for program in programs {
        if find_program(program, search_path).is_none() {
            error!("Required program '{}' was not found on PATH", program);
            satisfied = false;
        }
    }

    if satisfied {
        debug!("All requirements satisfied");
    }
    satisfied
}

/// Locate `name` in the directories of `search_path`.
///
/// Only executable files count. Relative directories in `search_path` are resolved
/// against the current directory.
pub fn find_program(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let search_path = search_path?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(name, Some(search_path), cwd).ok()
}
