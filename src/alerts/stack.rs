// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle for the toast stack.
//!
//! The registry decides WHAT is alive; this module decides HOW each entry is
//! currently shown. Per entry it tracks a phase machine (entering, active,
//! exiting) and an independent countdown, all driven by instants supplied by
//! the caller. Registry removal on expiry or dismissal is deferred until the
//! exit transition has played out, which is why [`AlertStack::tick`] hands
//! the finished ids back to the update loop instead of touching the registry
//! itself.

use super::countdown::Countdown;
use super::notification::NotificationId;
use super::registry::Registry;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Length of the slide-in transition after creation.
pub const ENTRY_DURATION: Duration = Duration::from_millis(500);
/// Length of the slide-out transition before removal.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering { until: Instant },
    Active,
    Exiting { until: Instant },
}

#[derive(Debug)]
struct Slot {
    phase: Phase,
    /// `None` for persistent notifications; they never expire on their own.
    countdown: Option<Countdown>,
}

/// Per-notification presentation state, keyed by id.
#[derive(Debug, Default)]
pub struct AlertStack {
    slots: HashMap<NotificationId, Slot>,
}

impl AlertStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles presentation state with the registry.
    ///
    /// New registry entries get a slot starting in the entering phase, with
    /// their countdown anchored at `now`. Slots whose notification is gone
    /// (dismissed directly, evicted by the cap, or swept by `clear_all`) are
    /// dropped, so no countdown ever outlives its notification. Call this
    /// after every registry mutation.
    pub fn sync(&mut self, registry: &Registry, now: Instant) {
        self.slots.retain(|id, _| registry.contains(*id));

        for notification in registry.iter() {
            self.slots
                .entry(notification.id())
                .or_insert_with(|| Slot {
                    phase: Phase::Entering {
                        until: now + ENTRY_DURATION,
                    },
                    countdown: (!notification.is_persistent())
                        .then(|| Countdown::new(now, notification.duration())),
                });
        }
    }

    /// Advances every phase machine one step.
    ///
    /// Returns the ids whose exit transition finished; the caller dismisses
    /// those from the registry and then re-syncs.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut finished = Vec::new();

        for (id, slot) in &mut self.slots {
            if let Phase::Entering { until } = slot.phase {
                if now >= until {
                    slot.phase = Phase::Active;
                }
            }

            match slot.phase {
                // The countdown runs from creation, so an entry still
                // sliding in can expire too.
                Phase::Entering { .. } | Phase::Active => {
                    if slot
                        .countdown
                        .is_some_and(|countdown| countdown.is_expired(now))
                    {
                        slot.phase = Phase::Exiting {
                            until: now + EXIT_DURATION,
                        };
                    }
                }
                Phase::Exiting { until } => {
                    if now >= until {
                        finished.push(*id);
                    }
                }
            }
        }

        finished.sort_unstable();
        finished
    }

    /// Starts the exit transition for one entry, as after a dismiss press or
    /// an action that closes its toast. Harmless for unknown ids, and a
    /// no-op if the entry is already on its way out.
    pub fn begin_exit(&mut self, id: NotificationId, now: Instant) {
        if let Some(slot) = self.slots.get_mut(&id) {
            if !matches!(slot.phase, Phase::Exiting { .. }) {
                slot.phase = Phase::Exiting {
                    until: now + EXIT_DURATION,
                };
            }
        }
    }

    /// Fraction of the time-to-live still remaining, for the countdown ring.
    /// `None` for persistent entries and unknown ids.
    #[must_use]
    pub fn progress(&self, id: NotificationId, now: Instant) -> Option<f32> {
        self.slots
            .get(&id)?
            .countdown
            .map(|countdown| countdown.fraction_remaining(now))
    }

    #[must_use]
    pub fn is_entering(&self, id: NotificationId, now: Instant) -> bool {
        matches!(
            self.slots.get(&id).map(|slot| slot.phase),
            Some(Phase::Entering { until }) if now < until
        )
    }

    #[must_use]
    pub fn is_exiting(&self, id: NotificationId) -> bool {
        matches!(
            self.slots.get(&id).map(|slot| slot.phase),
            Some(Phase::Exiting { .. })
        )
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether anything here still moves on its own. False once every slot
    /// is a persistent entry sitting in the active phase, which lets the
    /// subscription shut the shared tick off.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.slots.values().any(|slot| {
            !matches!(slot.phase, Phase::Active) || slot.countdown.is_some()
        })
    }
}
