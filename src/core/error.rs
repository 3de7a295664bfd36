//! Configuration and transition errors.

use thiserror::Error;

/// Errors raised while obtaining or checking a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No configuration supplied")]
    Missing,

    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("Initial state '{0}' is not a configured state")]
    UnknownInitialState(String),
}

/// Errors returned by state machine operations.
///
/// A trigger whose event has no rule from the current state is reported as
/// `InvalidState` with `requested: None`, the same kind as a direct change
/// to an unknown state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid state: {}", .requested.as_deref().unwrap_or("<unresolved>"))]
    InvalidState { requested: Option<String> },
}

impl MachineError {
    pub(crate) fn invalid_state(requested: Option<&str>) -> Self {
        Self::InvalidState {
            requested: requested.map(str::to_string),
        }
    }

    /// Returns true for `InvalidState`, whatever its cause.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_message_names_target() {
        let err = MachineError::invalid_state(Some("nowhere"));
        assert_eq!(err.to_string(), "Invalid state: nowhere");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn unresolved_trigger_has_placeholder_message() {
        let err = MachineError::invalid_state(None);
        assert_eq!(err.to_string(), "Invalid state: <unresolved>");
    }

    #[test]
    fn config_error_converts_into_machine_error() {
        let err: MachineError = ConfigError::Missing.into();
        assert_eq!(err, MachineError::Config(ConfigError::Missing));
        assert!(!err.is_invalid_state());
        assert_eq!(err.to_string(), "No configuration supplied");
    }
}
