//! Idempotent state reconciliation for one configuration fragment.
//!
//! [`Reconciler::apply`] picks `a2enconf` or `a2disconf` from the desired
//! state, runs it once, and reports whether the host changed.
use serde::Serialize;

use crate::error::ResourceError;
use crate::exec::{BinaryLookup, Executor};
use crate::request::{DesiredState, Request};
use crate::resources::apache_conf::ApacheConfResource;
use crate::resources::{Applicable, ResourceChange};

/// What a successful reconciliation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The configuration was already in the desired state.
    Success,
    /// The configuration was enabled.
    Enabled,
    /// The configuration was disabled.
    Disabled,
}

/// Result of a successful reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the host configuration was modified.
    pub changed: bool,
    /// What happened.
    pub status: Status,
}

impl Outcome {
    /// Map a resource change for `state` onto an outcome.
    #[must_use]
    pub const fn from_change(state: DesiredState, change: ResourceChange) -> Self {
        match (change, state) {
            (ResourceChange::AlreadyCorrect, _) => Self {
                changed: false,
                status: Status::Success,
            },
            (ResourceChange::Applied, DesiredState::Present) => Self {
                changed: true,
                status: Status::Enabled,
            },
            (ResourceChange::Applied, DesiredState::Absent) => Self {
                changed: true,
                status: Status::Disabled,
            },
        }
    }
}

/// Drives a single enable/disable through the injected collaborators.
#[derive(Debug)]
pub struct Reconciler<'a> {
    lookup: &'a dyn BinaryLookup,
    executor: &'a dyn Executor,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler using `lookup` to find tools and `executor` to run them.
    #[must_use]
    pub const fn new(lookup: &'a dyn BinaryLookup, executor: &'a dyn Executor) -> Self {
        Self { lookup, executor }
    }

    /// Bring the configuration named in `request` into the requested state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ToolNotFound`] if the tool cannot be located
    /// (nothing is executed), [`ResourceError::CommandFailed`] if it exits
    /// non-zero without reporting the desired state, and
    /// [`ResourceError::Execution`] if it cannot be started.
    pub fn apply(&self, request: &Request) -> Result<Outcome, ResourceError> {
        let resource = ApacheConfResource::new(request.name.clone(), self.lookup, self.executor);
        tracing::debug!("reconciling {} to {}", resource.description(), request.state);

        let change = match request.state {
            DesiredState::Present => resource.apply()?,
            DesiredState::Absent => resource.remove()?,
        };
        let outcome = Outcome::from_change(request.state, change);

        match outcome.status {
            Status::Success => tracing::info!("{} already {}", request.name, request.state),
            Status::Enabled => tracing::info!("enabled {}", request.name),
            Status::Disabled => tracing::info!("disabled {}", request.name),
        }
        Ok(outcome)
    }
}
