//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Initial state '{0}' is not defined")]
    UnknownInitialState(String),

    #[error("Transition '{event}' from '{from}' targets undefined state '{target}'")]
    UnknownTarget {
        from: String,
        event: String,
        target: String,
    },
}
