//! Snapshot undo/redo history.
//!
//! Every saved state is a full clone, so nothing done to the live model
//! afterwards can reach a stored entry. The top of the undo stack is always
//! the current state; undo needs at least one entry below it.

use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use uuid::Uuid;

/// One stored snapshot.
#[derive(Debug, Clone)]
pub struct HistoryEntry<T> {
    pub state: T,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// What observers see after each change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_count: usize,
    pub redo_count: usize,
    pub undo_description: Option<String>,
    pub redo_description: Option<String>,
}

/// Handle returned by [`UndoManager::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change callback. Errors are logged and otherwise ignored.
pub type ChangeCallback = Box<dyn FnMut(&HistoryStatus) -> anyhow::Result<()> + Send>;

/// Bounded undo/redo stacks of state snapshots.
pub struct UndoManager<T> {
    undo_stack: Vec<HistoryEntry<T>>,
    redo_stack: Vec<HistoryEntry<T>>,
    max_history: usize,
    observers: Vec<(ObserverId, ChangeCallback)>,
}

impl<T: Clone> UndoManager<T> {
    /// Creates a manager keeping at most `max_history` entries (minimum 1).
    pub fn new(max_history: usize) -> Self {
        let max_history = max_history.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_history),
            redo_stack: Vec::new(),
            max_history,
            observers: Vec::new(),
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Records a snapshot of `state` as the new current state.
    ///
    /// Clears the redo stack and drops the oldest entries beyond
    /// `max_history`.
    pub fn save_state(&mut self, state: &T, description: impl Into<String>) {
        let description = description.into();
        tracing::debug!(description = %description, depth = self.undo_stack.len() + 1, "History saved");

        self.undo_stack.push(HistoryEntry {
            state: state.clone(),
            description,
            timestamp: Utc::now(),
        });
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_history {
            let excess = self.undo_stack.len() - self.max_history;
            self.undo_stack.drain(..excess);
        }

        self.notify();
    }

    /// Steps back one entry and returns the state to restore.
    pub fn undo(&mut self) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        let entry = self.undo_stack.pop()?;
        tracing::debug!(description = %entry.description, "Undo");
        self.redo_stack.push(entry);
        let restored = self.undo_stack.last().map(|e| e.state.clone());
        self.notify();
        restored
    }

    /// Re-applies the most recently undone entry and returns its state.
    pub fn redo(&mut self) -> Option<T> {
        let entry = self.redo_stack.pop()?;
        tracing::debug!(description = %entry.description, "Redo");
        let restored = entry.state.clone();
        self.undo_stack.push(entry);
        self.notify();
        Some(restored)
    }

    /// Runs `edit` on `state` and records the result as a single entry.
    ///
    /// If `edit` fails, `state` is put back as it was and nothing is
    /// recorded.
    pub fn batch<R, E>(
        &mut self,
        state: &mut T,
        description: impl Into<String>,
        edit: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Result<R, E> {
        let before = state.clone();
        match edit(state) {
            Ok(result) => {
                self.save_state(state, description);
                Ok(result)
            }
            Err(e) => {
                *state = before;
                Err(e)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of available undo steps.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len().saturating_sub(1)
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Number of stored snapshots, including the current one.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Description of the edit that undo would revert.
    pub fn undo_description(&self) -> Option<&str> {
        if self.can_undo() {
            self.undo_stack.last().map(|e| e.description.as_str())
        } else {
            None
        }
    }

    /// Description of the edit that redo would re-apply.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.description.as_str())
    }

    /// The current (most recent) snapshot.
    pub fn current(&self) -> Option<&HistoryEntry<T>> {
        self.undo_stack.last()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        tracing::debug!("History cleared");
        self.notify();
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_count: self.undo_count(),
            redo_count: self.redo_count(),
            undo_description: self.undo_description().map(str::to_string),
            redo_description: self.redo_description().map(str::to_string),
        }
    }

    /// Registers a callback run after every save, undo, redo and clear.
    pub fn on_change<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&HistoryStatus) -> anyhow::Result<()> + Send + 'static,
    {
        let id = ObserverId::new();
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Unregisters a callback. Returns false if the id is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let status = self.status();
        for (id, callback) in self.observers.iter_mut() {
            match panic::catch_unwind(AssertUnwindSafe(|| callback(&status))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!(observer = %id, "History observer failed: {:#}", e),
                Err(_) => tracing::warn!(observer = %id, "History observer panicked"),
            }
        }
    }
}

impl<T: Clone> Default for UndoManager<T> {
    fn default() -> Self {
        Self::new(pathplanner_core::constants::DEFAULT_MAX_HISTORY)
    }
}

impl<T> fmt::Debug for UndoManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoManager")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("max_history", &self.max_history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
