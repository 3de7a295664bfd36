//! State machine driving a configuration with undo/redo history.

use crate::core::{ConfigError, Configuration, History, MachineError};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const VIA_DIRECT: &str = "direct";
const VIA_RESET: &str = "reset";

/// Finite-state machine over string state identifiers.
///
/// Every successful forward change (`change_state`, `trigger`, `reset`)
/// pushes the state being left onto the undo stack and clears the redo
/// stack. A failed change leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDef};
/// use rewind::StateMachine;
///
/// let config = Configuration::new("off")
///     .with_state("off", StateDef::new().on("switchOn", "on"))
///     .with_state("on", StateDef::new().on("switchOff", "off"));
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("switchOn").unwrap();
/// assert_eq!(machine.state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "off");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Configuration>,
    state: String,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at the configuration's initial state.
    ///
    /// The initial state is not checked here; if it is not configured, the
    /// first `reset` (or any transition back to it) fails instead. Call
    /// [`Configuration::validate`] beforehand to fail fast.
    pub fn new(config: Configuration) -> Self {
        Self::shared(Arc::new(config))
    }

    /// Create a machine over a configuration shared with other machines.
    pub fn shared(config: Arc<Configuration>) -> Self {
        let state = config.initial().to_string();
        Self {
            config,
            state,
            history: History::new(),
        }
    }

    /// Create a machine from an untyped JSON configuration.
    ///
    /// Fails with [`ConfigError::Missing`] for `null`.
    pub fn from_value(value: Value) -> Result<Self, MachineError> {
        Ok(Self::new(Configuration::from_value(value)?))
    }

    /// Create a machine from JSON configuration text.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Ok(Self::new(Configuration::from_json(json)?))
    }

    pub(crate) fn from_parts(config: Arc<Configuration>, state: String, history: History) -> Self {
        Self {
            config,
            state,
            history,
        }
    }

    /// Bound the undo stack to `limit` entries, dropping the oldest first.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let undo = self.history.undo_stack().to_vec();
        let redo = self.history.redo_stack().to_vec();
        self.history = History::from_stacks(undo, redo, Some(limit));
        self
    }

    /// Current state identifier.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn config(&self) -> &Arc<Configuration> {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Move directly to `target`, bypassing event rules.
    ///
    /// Fails with [`MachineError::InvalidState`] if `target` is not a
    /// configured state.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        self.apply(target, VIA_DIRECT)
    }

    /// Fire `event` from the current state.
    ///
    /// An event with no rule from the current state fails exactly like a
    /// change to an unknown state.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self.config.resolve(&self.state, event).map(str::to_string);
        match target {
            Some(target) => self.apply(&target, event),
            None => {
                debug!(from = %self.state, event, "no transition for event");
                Err(MachineError::invalid_state(None))
            }
        }
    }

    /// Return to the initial state, recording history like any other change.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial().to_string();
        self.apply(&initial, VIA_RESET)
    }

    /// Configured state identifiers in authored order.
    ///
    /// With an event, only the states that define a transition for it.
    /// `None` and `Some("")` both list every state.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            Some(event) => self.config.states_handling(event),
            None => self.config.state_ids().collect(),
        }
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.state) {
            Some(previous) => {
                debug!(from = %self.state, to = %previous, "undo");
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone change. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.state) {
            Some(next) => {
                debug!(from = %self.state, to = %next, "redo");
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::trace!(state = %self.state, "history cleared");
    }

    fn apply(&mut self, target: &str, via: &str) -> Result<(), MachineError> {
        if !self.config.contains(target) {
            debug!(from = %self.state, requested = target, via, "rejected transition to unknown state");
            return Err(MachineError::invalid_state(Some(target)));
        }

        let previous = std::mem::replace(&mut self.state, target.to_string());
        debug!(from = %previous, to = %self.state, via, "state changed");
        self.history.record(previous);
        Ok(())
    }
}

impl From<Configuration> for StateMachine {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

impl TryFrom<Option<Configuration>> for StateMachine {
    type Error = MachineError;

    fn try_from(config: Option<Configuration>) -> Result<Self, Self::Error> {
        config
            .map(Self::new)
            .ok_or(MachineError::Config(ConfigError::Missing))
    }
}
