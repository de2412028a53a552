//! JSON report written to stdout at the end of a run.
use std::process::ExitCode;

use serde::Serialize;

use crate::error::Apache2ConfigError;
use crate::reconcile::{Outcome, Status};

/// Final payload of a run.
///
/// # Examples
///
/// ```
/// use apache2_config::reconcile::{Outcome, Status};
/// use apache2_config::report::Report;
///
/// let report = Report::from_outcome(Outcome { changed: true, status: Status::Enabled });
/// assert_eq!(report.to_json().unwrap(), r#"{"changed":true,"result":"Enabled"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// The host is in the desired state.
    Done {
        /// Whether this run modified the host.
        changed: bool,
        /// What happened.
        result: Status,
    },
    /// The run failed.
    Failed {
        /// Always `true`.
        failed: bool,
        /// Human-readable failure message.
        msg: String,
    },
}

impl Report {
    /// Report a successful reconciliation.
    #[must_use]
    pub const fn from_outcome(outcome: Outcome) -> Self {
        Self::Done {
            changed: outcome.changed,
            result: outcome.status,
        }
    }

    /// Report a failure.
    #[must_use]
    pub fn from_error(error: &Apache2ConfigError) -> Self {
        Self::Failed {
            failed: true,
            msg: error.to_string(),
        }
    }

    /// Whether this report describes a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Process exit code for this report.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Serialize to a single-line JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Result<Outcome, Apache2ConfigError>> for Report {
    fn from(result: Result<Outcome, Apache2ConfigError>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(e) => Self::from_error(&e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{RequestError, ResourceError};
    use crate::resources::apache_conf::Action;

    #[test]
    fn noop_payload() {
        let report = Report::from(Ok::<_, Apache2ConfigError>(Outcome {
            changed: false,
            status: Status::Success,
        }));
        insta::assert_snapshot!(report.to_json().unwrap(), @r#"{"changed":false,"result":"Success"}"#);
        assert!(!report.is_failure());
    }

    #[test]
    fn disabled_payload() {
        let report = Report::from_outcome(Outcome {
            changed: true,
            status: Status::Disabled,
        });
        insta::assert_snapshot!(report.to_json().unwrap(), @r#"{"changed":true,"result":"Disabled"}"#);
    }

    #[test]
    fn command_failure_payload() {
        let err: Apache2ConfigError = ResourceError::CommandFailed {
            action: Action::Enable,
            name: "bogus".to_string(),
            stdout: "ERROR: Conf bogus does not exist!\n".to_string(),
        }
        .into();
        let report = Report::from(Err::<Outcome, _>(err));
        assert!(report.is_failure());
        insta::assert_snapshot!(
            report.to_json().unwrap(),
            @r#"{"failed":true,"msg":"Failed to enable config bogus: ERROR: Conf bogus does not exist!\n"}"#
        );
    }

    #[test]
    fn invalid_name_payload() {
        let err: Apache2ConfigError = RequestError::InvalidName {
            name: "a;b".to_string(),
            reason: "unsupported character ';'".to_string(),
        }
        .into();
        let value: serde_json::Value =
            serde_json::from_str(&Report::from_error(&err).to_json().unwrap()).unwrap();
        assert_eq!(value["failed"], true);
        assert_eq!(
            value["msg"],
            "Invalid configuration name 'a;b': unsupported character ';'"
        );
    }

    #[test]
    fn only_errors_are_failures() {
        let ok = Report::from_outcome(Outcome {
            changed: true,
            status: Status::Enabled,
        });
        assert!(!ok.is_failure());

        let failed: Apache2ConfigError = ResourceError::ToolNotFound { tool: "a2enconf" }.into();
        let report = Report::from_error(&failed);
        assert!(report.is_failure());
        assert!(matches!(report, Report::Failed { failed: true, .. }));
    }
}
