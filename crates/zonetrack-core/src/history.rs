//! Bounded FIFO log of recent samples across all vehicles.

use std::collections::VecDeque;

use zonetrack_types::HistoryEntry;

/// Default capacity of the history window.
pub const DEFAULT_CAPACITY: usize = 1000;

/// A global sliding window over the most recent samples.
///
/// Append-only from the caller's point of view: once the window is full,
/// each append evicts the oldest entry. Eviction is strict FIFO by arrival
/// order and ignores `vehicle_id` entirely; this is one shared window, not a
/// per-vehicle one. Iteration yields oldest first, preserving arrival order
/// for future analytics readers.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Create a log with the default capacity of 1000 entries.
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create a log with an explicit capacity.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append an entry, evicting from the head if the window is over
    /// capacity afterwards.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity of the window.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
