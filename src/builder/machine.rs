//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Configuration, StateDef};
use crate::runtime::StateMachine;
use indexmap::IndexMap;

/// Builder for constructing state machines with a fluent API.
///
/// By default the builder only checks that an initial state and at least
/// one state were given. [`StateMachineBuilder::strict`] additionally
/// requires the initial state and every transition target to be defined.
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
    history_limit: Option<usize>,
    strict: bool,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with no transitions unless added separately.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition. Declares `from` if it is not declared yet.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .insert(event.into(), to.into());
        self
    }

    /// Bound the undo stack.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Reject undefined initial states and transition targets at build time.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build just the configuration.
    pub fn configuration(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = Configuration::from_parts(initial, self.states);
        if self.strict {
            check_strict(&config)?;
        }
        Ok(config)
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let history_limit = self.history_limit;
        let machine = StateMachine::new(self.configuration()?);

        Ok(match history_limit {
            Some(limit) => machine.with_history_limit(limit),
            None => machine,
        })
    }
}

fn check_strict(config: &Configuration) -> Result<(), BuildError> {
    if !config.contains(config.initial()) {
        return Err(BuildError::UnknownInitialState(config.initial().to_string()));
    }

    for (from, def) in config.states() {
        for (event, target) in def.transitions() {
            if !config.contains(target) {
                return Err(BuildError::UnknownTarget {
                    from: from.clone(),
                    event: event.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(())
}
