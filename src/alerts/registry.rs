// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of live notifications.
//!
//! The registry is the single owner of notification state. Feature code
//! creates entries through the per-kind helpers (or [`Registry::custom`])
//! and never splices the collection directly; the presenter only reads it.
//! Creation order is queue order: new entries append at the back.

use super::kind::Kind;
use super::notification::{Notification, NotificationId, NotificationSpec, Options};
use crate::journal::Journal;

/// Owner of all live notifications plus the session journal fed by them.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Notification>,
    next_seq: u64,
    max_active: usize,
    journal: Journal,
}

impl Registry {
    /// Creates an empty registry.
    ///
    /// `max_active` caps the number of concurrently live entries (see
    /// [`Registry::set_max_active`]); `journal_capacity` bounds the session
    /// journal.
    #[must_use]
    pub fn new(max_active: usize, journal_capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
            max_active: max_active.max(1),
            journal: Journal::new(journal_capacity),
        }
    }

    /// Adds a fully-specified notification and returns its id.
    ///
    /// Never fails: an empty message is stored as-is, and defaults cover
    /// whatever the spec leaves out. Warning, error, grid, and fraud entries
    /// are also recorded in the session journal.
    pub fn custom(&mut self, spec: NotificationSpec) -> NotificationId {
        self.next_seq += 1;
        let id = NotificationId::from_seq(self.next_seq);
        let notification = Notification::from_spec(id, spec);

        if notification.kind().journaled() {
            self.journal.record(
                notification.kind(),
                notification.title(),
                notification.message(),
            );
        }

        self.entries.push(notification);
        self.enforce_cap();
        id
    }

    /// Adds a notification of `kind` with the given options.
    pub fn notify(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        options: Options,
    ) -> NotificationId {
        self.custom(NotificationSpec::new(kind, message).with_options(options))
    }

    pub fn success(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Success, message, options)
    }

    pub fn error(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Error, message, options)
    }

    pub fn warning(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Warning, message, options)
    }

    pub fn info(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Info, message, options)
    }

    pub fn grid(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Grid, message, options)
    }

    pub fn fraud(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.notify(Kind::Fraud, message, options)
    }

    /// Removes a notification if it is still present.
    ///
    /// Returns whether anything was removed; dismissing an unknown or
    /// already-dismissed id is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id() != id);
        self.entries.len() < before
    }

    /// Drops every live notification. Used at navigation and logout
    /// boundaries; the journal keeps its records.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Live notifications in creation order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Updates the live-entry cap. Applies to subsequent creations; existing
    /// surplus entries run out their own lifecycles.
    pub fn set_max_active(&mut self, max_active: usize) {
        self.max_active = max_active.max(1);
    }

    #[must_use]
    pub fn max_active(&self) -> usize {
        self.max_active
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    /// Evicts oldest non-persistent entries while over the cap. Persistent
    /// entries are never evicted, so a burst of persistent alerts may hold
    /// the count above `max_active` until dismissed.
    fn enforce_cap(&mut self) {
        while self.entries.len() > self.max_active {
            let Some(index) = self.entries.iter().position(|n| !n.is_persistent()) else {
                break;
            };
            self.entries.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::notification::Action;
    use std::time::Duration;

    fn registry() -> Registry {
        Registry::new(8, 50)
    }

    #[test]
    fn ids_are_unique_and_ascending() {
        let mut alerts = registry();
        let a = alerts.success("Zone Dixinn mise à jour", Options::default());
        let b = alerts.info("sync done", Options::default());
        let c = alerts.info("sync done", Options::default());

        assert!(a < b && b < c);
        assert_eq!(alerts.len(), 3);
    }

    #[test]
    fn creation_order_is_queue_order() {
        let mut alerts = registry();
        alerts.success("first", Options::default());
        alerts.error("second", Options::default());
        alerts.grid("third", Options::default());

        let messages: Vec<&str> = alerts.iter().map(Notification::message).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn per_kind_helpers_resolve_default_durations() {
        let mut alerts = registry();
        let ok = alerts.success("Zone Dixinn mise à jour", Options::default());
        let err = alerts.error("Échec réseau", Options::default());
        let fraud = alerts.fraud("Meter 88 bypass suspected", Options::default());

        assert_eq!(alerts.get(ok).unwrap().kind(), Kind::Success);
        assert_eq!(
            alerts.get(ok).unwrap().duration(),
            Duration::from_millis(4000)
        );
        assert_eq!(
            alerts.get(err).unwrap().duration(),
            Duration::from_millis(6000)
        );
        assert_eq!(
            alerts.get(fraud).unwrap().duration(),
            Duration::from_millis(8000)
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut alerts = registry();
        let id = alerts.info("going away", Options::default());

        assert!(alerts.dismiss(id));
        assert!(!alerts.dismiss(id));
        assert!(!alerts.contains(id));

        // An id that never existed is equally harmless.
        assert!(!alerts.dismiss(NotificationId::from_seq(9999)));
    }

    #[test]
    fn dismissing_one_leaves_the_others_in_order() {
        let mut alerts = registry();
        let a = alerts.info("a", Options::default());
        let b = alerts.info("b", Options::default());
        let c = alerts.info("c", Options::default());

        alerts.dismiss(b);
        let remaining: Vec<NotificationId> = alerts.iter().map(Notification::id).collect();
        assert_eq!(remaining, [a, c]);
    }

    #[test]
    fn clear_all_empties_the_registry_but_not_the_journal() {
        let mut alerts = registry();
        alerts.error("recorded", Options::default());
        alerts.success("not recorded", Options::default());

        alerts.clear_all();
        assert!(alerts.is_empty());
        assert_eq!(alerts.journal().len(), 1);
    }

    #[test]
    fn cap_evicts_the_oldest_non_persistent_entry() {
        let mut alerts = Registry::new(2, 50);
        let a = alerts.info("oldest", Options::default());
        let b = alerts.info("middle", Options::default());
        let c = alerts.info("newest", Options::default());

        assert_eq!(alerts.len(), 2);
        assert!(!alerts.contains(a));
        assert!(alerts.contains(b) && alerts.contains(c));
    }

    #[test]
    fn cap_never_evicts_persistent_entries() {
        let mut alerts = Registry::new(2, 50);
        let pinned_a = alerts.grid("outage zone 4", Options::default().persistent());
        let pinned_b = alerts.fraud("pinned case", Options::default().persistent());
        let transient = alerts.info("squeezed out", Options::default());

        // Both persistent entries survive; the transient one was the only
        // eviction candidate.
        assert!(alerts.contains(pinned_a) && alerts.contains(pinned_b));
        assert!(!alerts.contains(transient));
    }

    #[test]
    fn persistent_overflow_is_allowed() {
        let mut alerts = Registry::new(1, 50);
        alerts.warning("a", Options::default().persistent());
        alerts.warning("b", Options::default().persistent());

        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn journal_records_only_noteworthy_kinds() {
        let mut alerts = registry();
        alerts.success("quiet", Options::default());
        alerts.info("quiet", Options::default());
        alerts.warning("loud", Options::default());
        alerts.error("loud", Options::default());
        alerts.grid("loud", Options::default());
        alerts.fraud("loud", Options::default());

        assert_eq!(alerts.journal().len(), 4);
    }

    #[test]
    fn custom_carries_title_actions_and_persistence() {
        let mut alerts = registry();
        let spec = NotificationSpec::new(Kind::Fraud, "Meter 88 bypass suspected").with_options(
            Options::default()
                .with_title("Fraud alert")
                .persistent()
                .with_action(Action::new("Details", || {}).keep_open()),
        );
        let id = alerts.custom(spec);

        let n = alerts.get(id).unwrap();
        assert_eq!(n.title(), Some("Fraud alert"));
        assert!(n.is_persistent());
        assert_eq!(n.actions().len(), 1);
    }
}
