//! Append-only in-memory message log.
//!
//! The log is the user-facing diagnostic trace for the hero service: every
//! operation appends one line describing its outcome. Handles are cheap to
//! clone and share one underlying buffer, so the application creates a
//! single log at startup and passes clones to whoever needs to read or
//! write it. Entries are ordered by append time and are never removed.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to an ordered, append-only message buffer.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message. Completion order across concurrent callers is
    /// the append order.
    pub fn add(&self, message: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.into());
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
