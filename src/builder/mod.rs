//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a configuration macro for
//! creating state machines without spelling out every `StateDef`.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
