//! Linear undo/redo history over state identifiers.
//!
//! History is two stacks, most-recent-last. Recording a forward change
//! pushes the state being left onto the undo stack and invalidates every
//! redo entry. Undo and redo are mirror images: each pops one stack and
//! pushes the current state onto the other.

use serde::{Deserialize, Serialize};

/// Undo and redo stacks for a state machine.
///
/// Unbounded by default. With a limit, the oldest undo entries are dropped
/// once the undo stack would grow past it.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new();
/// history.record("off");
///
/// // Currently "on"; undo hands back "off" and remembers "on" for redo.
/// assert_eq!(history.undo("on").as_deref(), Some("off"));
/// assert_eq!(history.redo("off").as_deref(), Some("on"));
/// assert!(history.redo("on").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
    #[serde(default)]
    limit: Option<usize>,
}

impl History {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` undo entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub(crate) fn from_stacks(undo: Vec<String>, redo: Vec<String>, limit: Option<usize>) -> Self {
        let mut history = Self { undo, redo, limit };
        history.trim();
        history
    }

    /// Record a forward change away from `previous`.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, previous: impl Into<String>) {
        self.redo.clear();
        self.undo.push(previous.into());
        self.trim();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to adopt, or `None` (leaving both stacks untouched)
    /// if there is nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo.pop()?;
        self.redo.push(current.to_string());
        Some(previous)
    }

    /// Step forward again from `current`. Mirror of [`History::undo`].
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(current.to_string());
        self.trim();
        Some(next)
    }

    /// Drop both stacks. The limit is kept.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Previously visited states, most recent last.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// Undone states, most recent last.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            if self.undo.len() > limit {
                let excess = self.undo.len() - limit;
                self.undo.drain(..excess);
                tracing::trace!(dropped = excess, limit, "trimmed undo history");
            }
        }
    }
}
