//! Domain-specific error types for the Apache2 configuration toggler.
//!
//! Internal modules return typed errors ([`RequestError`], [`ResourceError`])
//! and the binary renders the top-level [`Apache2ConfigError`] into the
//! failure payload at the process boundary.
//!
//! # Error hierarchy
//!
//! ```text
//! Apache2ConfigError
//! ├── Request(RequestError)   — invalid configuration name
//! └── Resource(ResourceError) — missing tool, failed command, spawn failure
//! ```

use thiserror::Error;

use crate::resources::apache_conf::Action;

/// Top-level error type.
///
/// Both variants are transparent: the rendered message is exactly the inner
/// error's message, which is what ends up in the `msg` field of the report.
#[derive(Error, Debug)]
pub enum Apache2ConfigError {
    /// The request could not be built from the supplied parameters.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Enabling or disabling the configuration failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Errors raised while validating a request.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The configuration name is not safe to pass as a single argument.
    #[error("Invalid configuration name '{name}': {reason}")]
    InvalidName {
        /// The rejected name, as supplied.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },
}

/// Errors raised while enabling or disabling a configuration.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The tool could not be located on the search path.
    #[error(
        "{tool} not found. Perhaps this system does not use {tool} to manage apache configuration."
    )]
    ToolNotFound {
        /// Name of the missing executable.
        tool: &'static str,
    },

    /// The tool ran and exited non-zero without reporting the desired state.
    #[error("Failed to {action} config {name}: {stdout}")]
    CommandFailed {
        /// Action that was attempted.
        action: Action,
        /// Configuration name passed to the tool.
        name: String,
        /// Captured standard output, kept verbatim for diagnosis.
        stdout: String,
    },

    /// The tool was found but could not be started.
    #[error("Failed to execute {tool}")]
    Execution {
        /// Name of the executable that failed to start.
        tool: &'static str,
        /// Underlying spawn error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The "already in state" pattern could not be compiled.
    #[error("Invalid output pattern: {0}")]
    Pattern(#[from] regex::Error),
}
