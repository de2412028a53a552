//! Validated input for a single reconciliation.
use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Desired state of a configuration fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DesiredState {
    /// The configuration should be enabled.
    #[default]
    Present,
    /// The configuration should be disabled.
    Absent,
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Name of an Apache configuration fragment, safe to pass as one argument.
///
/// Accepts ASCII alphanumerics and `.`, `_`, `-`, `+`, `@`. A leading `-`
/// or `.` is rejected so the name is never read as an option or a hidden
/// file.
///
/// # Examples
///
/// ```
/// use apache2_config::request::ConfName;
///
/// let name: ConfName = "php5-fpm".parse().unwrap();
/// assert_eq!(name.as_str(), "php5-fpm");
///
/// assert!("--quiet".parse::<ConfName>().is_err());
/// assert!("two words".parse::<ConfName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfName(String);

impl ConfName {
    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '@')
}

impl FromStr for ConfName {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RequestError::InvalidName {
            name: s.to_string(),
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.starts_with('-') || s.starts_with('.') {
            return Err(invalid("must not start with '-' or '.'"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        if let Some(bad) = s.chars().find(|c| !is_name_char(*c)) {
            return Err(invalid(&format!("unsupported character '{bad}'")));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ConfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A configuration name paired with the state it should end up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Configuration to toggle.
    pub name: ConfName,
    /// State to reconcile towards.
    pub state: DesiredState,
}

impl Request {
    /// Validate `name` and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidName`] if `name` is empty or contains
    /// characters that are not allowed in a configuration name.
    pub fn new(name: &str, state: DesiredState) -> Result<Self, RequestError> {
        Ok(Self {
            name: name.parse()?,
            state,
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn reason(name: &str) -> String {
        match name.parse::<ConfName>() {
            Err(RequestError::InvalidName { reason, .. }) => reason,
            Ok(n) => panic!("expected '{n}' to be rejected"),
        }
    }

    #[test]
    fn accepts_typical_names() {
        for name in ["php5-fpm", "php7.4-fpm", "security", "other-vhosts-access-log", "c++_x@1"] {
            assert!(name.parse::<ConfName>().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(reason(""), "must not be empty");
    }

    #[test]
    fn rejects_option_like_name() {
        assert_eq!(reason("-q"), "must not start with '-' or '.'");
        assert_eq!(reason(".hidden"), "must not start with '-' or '.'");
    }

    #[test]
    fn rejects_whitespace() {
        assert_eq!(reason("php5 fpm"), "must not contain whitespace");
        assert_eq!(reason("php5\nfpm"), "must not contain whitespace");
    }

    #[test]
    fn rejects_shell_metacharacters() {
        assert_eq!(reason("a;rm"), "unsupported character ';'");
        assert_eq!(reason("$(id)"), "unsupported character '$'");
        assert_eq!(reason("../etc"), "must not start with '-' or '.'");
        assert_eq!(reason("conf/x"), "unsupported character '/'");
    }

    #[test]
    fn desired_state_defaults_to_present() {
        assert_eq!(DesiredState::default(), DesiredState::Present);
    }

    #[test]
    fn desired_state_display_matches_cli_values() {
        assert_eq!(DesiredState::Present.to_string(), "present");
        assert_eq!(DesiredState::Absent.to_string(), "absent");
    }

    #[test]
    fn request_new_validates_name() {
        let request = Request::new("php5-fpm", DesiredState::Absent).unwrap();
        assert_eq!(request.name.as_str(), "php5-fpm");
        assert_eq!(request.state, DesiredState::Absent);
        assert!(Request::new("", DesiredState::Present).is_err());
    }
}
