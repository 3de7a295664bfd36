//! Core data of the state machine.
//!
//! This module contains the plain-data half of the engine:
//! - Declarative configuration (`Configuration`, `StateDef`)
//! - Undo/redo history stacks
//! - Error types shared by every operation
//!
//! Nothing in here knows about a current state; the runtime in
//! [`crate::runtime`] drives these types.

mod config;
mod error;
mod history;

pub use config::{Configuration, StateDef};
pub use error::{ConfigError, MachineError};
pub use history::History;
