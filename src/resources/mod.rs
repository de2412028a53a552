//! Idempotent resource primitives (apply + remove pattern).
pub mod apache_conf;

use crate::error::ResourceError;

/// Interface for resources that can be described, applied, and removed.
///
/// Both operations are idempotent: re-running them against a host that is
/// already in the requested state reports [`ResourceChange::AlreadyCorrect`].
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Bring the resource into existence on the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the required tool is missing or reports a failure.
    fn apply(&self) -> Result<ResourceChange, ResourceError>;

    /// Remove the resource, undoing a previous `apply()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the required tool is missing or reports a failure.
    fn remove(&self) -> Result<ResourceChange, ResourceError>;
}

/// Result of applying a resource change.
///
/// # Examples
///
/// ```
/// use apache2_config::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// let noop = ResourceChange::AlreadyCorrect;
///
/// assert_eq!(applied, ResourceChange::Applied);
/// assert_ne!(applied, noop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceChange {
    /// The host was modified.
    Applied,
    /// The host was already in the requested state (no change made).
    AlreadyCorrect,
}
