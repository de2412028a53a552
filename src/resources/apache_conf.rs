//! Apache2 configuration fragment resource (`a2enconf` / `a2disconf`).
use std::fmt;

use regex::Regex;

use super::{Applicable, ResourceChange};
use crate::error::ResourceError;
use crate::exec::{BinaryLookup, ExecResult, Executor};
use crate::request::ConfName;

/// The toggle performed against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enable a configuration with `a2enconf`.
    Enable,
    /// Disable a configuration with `a2disconf`.
    Disable,
}

impl Action {
    /// Name of the external tool that performs this action.
    #[must_use]
    pub const fn tool(self) -> &'static str {
        match self {
            Self::Enable => "a2enconf",
            Self::Disable => "a2disconf",
        }
    }

    /// Word the tools print after `<name> already` when nothing needs doing.
    #[must_use]
    pub const fn settled_word(self) -> &'static str {
        match self {
            Self::Enable => "enabled",
            Self::Disable => "disabled",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enable => write!(f, "enable"),
            Self::Disable => write!(f, "disable"),
        }
    }
}

/// Pattern matching the tools' "nothing to do" line for `name`.
///
/// The tools print e.g. `Conf php5-fpm already enabled`. The match is
/// case-sensitive and may occur anywhere in multi-line output.
fn settled_pattern(action: Action, name: &ConfName) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\b{} already {}",
        regex::escape(name.as_str()),
        action.settled_word()
    ))
}

/// Decide what a finished `a2enconf`/`a2disconf` run means.
///
/// The "already enabled/disabled" marker takes precedence over the exit
/// status; otherwise a non-zero (or missing) exit code is a failure.
///
/// Matching depends on the tools' exact English wording.
///
/// # Errors
///
/// Returns [`ResourceError::CommandFailed`] if the tool failed without
/// reporting that the configuration was already in the requested state.
pub fn classify(
    action: Action,
    name: &ConfName,
    result: &ExecResult,
) -> Result<ResourceChange, ResourceError> {
    if settled_pattern(action, name)?.is_match(&result.stdout) {
        return Ok(ResourceChange::AlreadyCorrect);
    }
    if !result.success {
        return Err(ResourceError::CommandFailed {
            action,
            name: name.to_string(),
            stdout: result.stdout.clone(),
        });
    }
    Ok(ResourceChange::Applied)
}

/// An Apache2 configuration fragment that can be enabled or disabled.
#[derive(Debug)]
pub struct ApacheConfResource<'a> {
    /// Configuration name as understood by `a2enconf`.
    pub name: ConfName,
    lookup: &'a dyn BinaryLookup,
    executor: &'a dyn Executor,
}

impl<'a> ApacheConfResource<'a> {
    /// Create a new configuration resource.
    #[must_use]
    pub const fn new(
        name: ConfName,
        lookup: &'a dyn BinaryLookup,
        executor: &'a dyn Executor,
    ) -> Self {
        Self {
            name,
            lookup,
            executor,
        }
    }

    /// Resolve the tool for `action`, run it on this configuration, and
    /// classify the result.
    fn toggle(&self, action: Action) -> Result<ResourceChange, ResourceError> {
        let tool = action.tool();
        let Some(path) = self.lookup.resolve(tool) else {
            tracing::debug!("{tool} not found on search path");
            return Err(ResourceError::ToolNotFound { tool });
        };
        tracing::debug!("running {} {}", path.display(), self.name);

        let result = self
            .executor
            .run_unchecked(&path, &[self.name.as_str()])
            .map_err(|e| ResourceError::Execution {
                tool,
                source: e.into(),
            })?;
        tracing::debug!(
            "{tool} exited with {:?}: {}",
            result.code,
            result.stdout.trim_end()
        );
        if !result.stderr.trim().is_empty() {
            tracing::debug!("{tool} stderr: {}", result.stderr.trim_end());
        }

        classify(action, &self.name, &result)
    }
}

impl Applicable for ApacheConfResource<'_> {
    fn description(&self) -> String {
        format!("apache2 conf {}", self.name)
    }

    fn apply(&self) -> Result<ResourceChange, ResourceError> {
        self.toggle(Action::Enable)
    }

    fn remove(&self) -> Result<ResourceChange, ResourceError> {
        self.toggle(Action::Disable)
    }
}
