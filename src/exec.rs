//! Process execution and executable lookup.
//!
//! Both concerns sit behind traits so that the reconciler can be driven by
//! in-memory doubles in tests.
use std::ffi::OsString;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result};

/// Directories searched after `$PATH`; the `a2*` helpers live in `/usr/sbin`.
const SYSTEM_BIN_DIRS: [&str; 3] = ["/sbin", "/usr/sbin", "/usr/local/sbin"];

/// Result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Runs external programs.
pub trait Executor: Debug + Send + Sync {
    /// Run `program` with `args` and capture its output.
    ///
    /// A non-zero exit status is reported through [`ExecResult::success`],
    /// not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run_unchecked(&self, program: &Path, args: &[&str]) -> Result<ExecResult>;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_unchecked(&self, program: &Path, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {}", program.display()))?;

        Ok(ExecResult::from(output))
    }
}

/// Locates executables by name.
pub trait BinaryLookup: Debug + Send + Sync {
    /// Return the full path of `program`, or `None` if it cannot be found.
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// [`BinaryLookup`] over an ordered list of directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Search exactly `dirs`, in order.
    #[must_use]
    pub const fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Search `$PATH`, then the system administrator directories.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH"))
    }

    /// Build a search path from a `PATH`-style value, appending any of
    /// `/sbin`, `/usr/sbin` and `/usr/local/sbin` that it lacks.
    #[must_use]
    pub fn from_path_var(path: Option<OsString>) -> Self {
        let mut dirs: Vec<PathBuf> = path
            .as_deref()
            .map(|p| std::env::split_paths(p).collect())
            .unwrap_or_default();
        dirs.retain(|d| !d.as_os_str().is_empty());
        for extra in SYSTEM_BIN_DIRS {
            let extra = PathBuf::from(extra);
            if !dirs.contains(&extra) {
                dirs.push(extra);
            }
        }
        Self::new(dirs)
    }

    /// Directories searched, in order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl BinaryLookup for SearchPath {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let joined = std::env::join_paths(&self.dirs).ok()?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        which::which_in(program, Some(joined), cwd).ok()
    }
}
