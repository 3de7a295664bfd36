//! The running state machine.
//!
//! Where [`crate::core`] holds plain data, this module owns the single
//! mutable piece of the engine: a [`StateMachine`] tracking its current
//! state and undo/redo history against a shared, immutable configuration.

mod machine;

pub use machine::StateMachine;
