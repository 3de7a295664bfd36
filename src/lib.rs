//! Rewind: a declarative finite-state machine with undo/redo history
//!
//! A machine is described by a [`Configuration`]: an initial state and, for
//! each state, the events it reacts to and where they lead. A
//! [`StateMachine`] tracks one current state over that configuration and
//! keeps linear history, so every change can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable, insertion-ordered state definitions
//! - **Transitions**: Direct (`change_state`), event-driven (`trigger`) or `reset`
//! - **History**: Undo and redo stacks; any forward change invalidates redo
//! - **Checkpoints**: Serializable snapshots of runtime state
//!
//! # Example
//!
//! ```rust
//! use rewind::{fsm_config, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: "off",
//!     states: {
//!         "off" => { "switchOn" => "on" },
//!         "on" => { "switchOff" => "off" },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("switchOn").unwrap();
//! machine.trigger("switchOff").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "on");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "off");
//!
//! // Events without a rule from the current state are rejected.
//! assert!(machine.trigger("switchOff").is_err());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{ConfigError, Configuration, History, MachineError, StateDef};
pub use runtime::StateMachine;
