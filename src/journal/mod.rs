// SPDX-License-Identifier: MPL-2.0
//! Session alert journal.
//!
//! A bounded, in-memory record of the noteworthy alerts (warnings, errors,
//! grid incidents, fraud alerts) raised since startup. Operators browse it
//! on the Journal screen after a toast has expired. It is deliberately not
//! persisted; the journal dies with the process.

use crate::alerts::Kind;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Default number of entries kept when the configuration is silent.
pub const DEFAULT_CAPACITY: usize = 200;

/// One recorded alert.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    at: DateTime<Local>,
    kind: Kind,
    title: Option<String>,
    message: String,
}

impl JournalEntry {
    #[must_use]
    pub fn at(&self) -> DateTime<Local> {
        self.at
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Bounded ring of [`JournalEntry`] values, oldest evicted first.
#[derive(Debug)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    /// Creates an empty journal holding at most `capacity` entries.
    /// A zero capacity is raised to one so `record` always lands somewhere.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry stamped with the local wall-clock time, evicting the
    /// oldest entry when full.
    pub fn record(&mut self, kind: Kind, title: Option<&str>, message: &str) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry {
            at: Local::now(),
            kind,
            title: title.map(str::to_owned),
            message: message.to_owned(),
        });
    }

    /// Entries newest first, the order the Journal screen shows them.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
