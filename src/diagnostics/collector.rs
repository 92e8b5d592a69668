// SPDX-License-Identifier: MPL-2.0
//! Activity log owned by the application.
//!
//! Receives [`UserAction`]s from the update loop and keeps the most recent
//! ones. When the log is full the oldest action is evicted and counted, so
//! an inspection dump can tell how much history is missing.

use std::collections::VecDeque;

use super::{BufferCapacity, UserAction};

#[derive(Debug, Clone)]
pub struct ActivityLog {
    recent: VecDeque<UserAction>,
    capacity: BufferCapacity,
    evicted: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity.value()),
            capacity,
            evicted: 0,
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        if self.recent.len() == self.capacity.value() {
            self.recent.pop_front();
            self.evicted += 1;
        }
        self.recent.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.capacity
    }

    /// Actions dropped to stay within capacity.
    #[must_use]
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Recorded actions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UserAction> {
        self.recent.iter()
    }

    /// Most recent action, if any.
    #[must_use]
    pub fn last(&self) -> Option<&UserAction> {
        self.recent.back()
    }

    /// Serializes the recorded actions as a JSON array.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.recent)
    }
}
