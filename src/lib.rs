//! Idempotent toggling of Apache2 configuration fragments.
//!
//! Wraps the Debian `a2enconf` / `a2disconf` helpers: a [`request::Request`]
//! names a configuration and its desired state, and a
//! [`reconcile::Reconciler`] runs the matching tool once, reading its output
//! to decide whether the host actually changed.
//!
//! - **[`request`]** — validated input
//! - **[`resources`]** — the idempotent enable/disable primitive
//! - **[`reconcile`]** — state reconciliation and its outcome
//! - **[`report`]** — the JSON payload printed by the binary
//! - **[`exec`]** — process execution and executable lookup seams
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod error;
pub mod exec;
pub mod logging;
pub mod reconcile;
pub mod report;
pub mod request;
pub mod resources;
