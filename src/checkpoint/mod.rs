//! Checkpoint and resume of a machine's runtime state.
//!
//! A checkpoint captures where a machine is and how it got there (current
//! state plus both history stacks) so it can be picked up again after a
//! restart. The configuration itself is not part of a checkpoint; resuming
//! requires the caller to supply it again.

use crate::core::{Configuration, History};
use crate::runtime::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's runtime state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the configuration the machine ran against
    pub initial: String,

    /// Current state of the machine
    pub current_state: String,

    /// Undo stack, most recent last
    pub undo: Vec<String>,

    /// Redo stack, most recent last
    pub redo: Vec<String>,

    /// Undo capacity bound, if any
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the checkpoint against the configuration it will resume on.
    ///
    /// Every recorded state must be configured. The configured initial state
    /// is accepted even when undefined, since a machine reports it until its
    /// first successful change.
    pub fn validate(&self, config: &Configuration) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.initial != config.initial() {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint initial state '{}' does not match configured '{}'",
                self.initial,
                config.initial()
            )));
        }

        let known = |id: &str| config.contains(id) || id == config.initial();
        let recorded = std::iter::once(&self.current_state)
            .chain(&self.undo)
            .chain(&self.redo);
        for id in recorded {
            if !known(id.as_str()) {
                return Err(CheckpointError::ValidationFailed(format!(
                    "state '{id}' is not configured"
                )));
            }
        }

        Ok(())
    }
}

impl StateMachine {
    /// Capture the current state and history.
    pub fn checkpoint(&self) -> Checkpoint {
        let history = self.history();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial: self.config().initial().to_string(),
            current_state: self.state().to_string(),
            undo: history.undo_stack().to_vec(),
            redo: history.redo_stack().to_vec(),
            history_limit: history.limit(),
        }
    }

    /// Rebuild a machine from a checkpoint.
    ///
    /// The checkpoint is validated against `config` first.
    pub fn resume(
        config: Arc<Configuration>,
        checkpoint: Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(&config)?;
        tracing::debug!(
            id = %checkpoint.id,
            state = %checkpoint.current_state,
            undo = checkpoint.undo.len(),
            redo = checkpoint.redo.len(),
            "resuming from checkpoint"
        );

        let history = History::from_stacks(checkpoint.undo, checkpoint.redo, checkpoint.history_limit);
        Ok(Self::from_parts(config, checkpoint.current_state, history))
    }
}
