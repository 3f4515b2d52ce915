// SPDX-License-Identifier: MPL-2.0
//! Single-slot confirmation gate.
//!
//! A request/response primitive for "are you sure" moments: a caller hands
//! over a question and a continuation, the operator answers through the
//! modal, and the continuation runs exactly once on an affirmative answer.
//! At most one request is ever open. A second request replaces the first
//! outright and the superseded continuation is dropped without running;
//! stacking destructive questions an operator has stopped reading would be
//! worse than withdrawing the stale one.

use std::fmt;
use std::time::{Duration, Instant};

/// Length of the dialog's leave transition after resolution.
pub const LEAVE_DURATION: Duration = Duration::from_millis(200);

/// Visual weight of the confirmation, mapped to button styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmKind {
    Info,
    #[default]
    Warning,
    /// Destructive commands (load shedding, meter cutoffs).
    Danger,
}

/// One question for the operator, with the continuation to run on "yes".
pub struct ConfirmRequest {
    title: String,
    message: String,
    kind: ConfirmKind,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
    on_confirm: Option<Box<dyn FnOnce() + Send>>,
}

impl ConfirmRequest {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ConfirmKind::default(),
            confirm_label: None,
            cancel_label: None,
            on_confirm: Some(Box::new(on_confirm)),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ConfirmKind) -> Self {
        self.kind = kind;
        self
    }

    /// Overrides the localized default confirm button label.
    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Overrides the localized default cancel button label.
    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ConfirmKind {
        self.kind
    }

    #[must_use]
    pub fn confirm_label(&self) -> Option<&str> {
        self.confirm_label.as_deref()
    }

    #[must_use]
    pub fn cancel_label(&self) -> Option<&str> {
        self.cancel_label.as_deref()
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("pending", &self.on_confirm.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
enum GateState {
    #[default]
    Closed,
    Open(ConfirmRequest),
    /// Resolved; the card is animating out and still rendered.
    Leaving {
        request: ConfirmRequest,
        until: Instant,
    },
}

/// Owner of the one-and-only confirmation slot.
#[derive(Debug, Default)]
pub struct ConfirmGate {
    state: GateState,
}

impl ConfirmGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate with `request`, replacing whatever was there.
    pub fn request(&mut self, request: ConfirmRequest) {
        self.state = GateState::Open(request);
    }

    /// Affirmative resolution: closes the gate through the leave transition
    /// and runs the continuation exactly once.
    ///
    /// The continuation is taken out and the state switched BEFORE it runs,
    /// so a panicking continuation still leaves the gate resolved. No-op
    /// unless the gate is open.
    pub fn resolve_confirm(&mut self, now: Instant) {
        if let GateState::Open(mut request) = std::mem::take(&mut self.state) {
            let continuation = request.on_confirm.take();
            self.state = GateState::Leaving {
                request,
                until: now + LEAVE_DURATION,
            };
            if let Some(continuation) = continuation {
                continuation();
            }
        }
    }

    /// Negative resolution: closes through the leave transition without
    /// running the continuation. Covers the cancel button, the backdrop
    /// click, and the Escape key. No-op unless the gate is open.
    pub fn resolve_cancel(&mut self, now: Instant) {
        if let GateState::Open(request) = std::mem::take(&mut self.state) {
            self.state = GateState::Leaving {
                request,
                until: now + LEAVE_DURATION,
            };
        }
    }

    /// Finishes the leave transition once its window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let GateState::Leaving { until, .. } = self.state {
            if now >= until {
                self.state = GateState::Closed;
            }
        }
    }

    /// True only while a request awaits an answer. False the moment the
    /// gate resolves, even though the card is still animating out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open(_))
    }

    /// The request to render: present while open and while leaving.
    #[must_use]
    pub fn current(&self) -> Option<&ConfirmRequest> {
        match &self.state {
            GateState::Closed => None,
            GateState::Open(request) | GateState::Leaving { request, .. } => Some(request),
        }
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.state, GateState::Leaving { .. })
    }

    /// Whether the subscription tick is still needed to finish a transition.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_leaving()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_request(title: &str, hits: &Arc<AtomicUsize>) -> ConfirmRequest {
        let counter = Arc::clone(hits);
        ConfirmRequest::new(title, "Proceed?", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn confirm_runs_the_continuation_once_and_closes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("Load shedding", &hits));
        assert!(gate.is_open());

        gate.resolve_confirm(now);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!gate.is_open());
        assert!(gate.is_leaving());
        assert!(gate.current().is_some());

        gate.tick(now + LEAVE_DURATION);
        assert!(gate.current().is_none());
    }

    #[test]
    fn cancel_never_runs_the_continuation() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("Cutoff", &hits));
        gate.resolve_cancel(now);
        gate.tick(now + LEAVE_DURATION);

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(gate.current().is_none());
    }

    #[test]
    fn a_second_request_replaces_the_first() {
        let first_hits = Arc::new(AtomicUsize::new(0));
        let second_hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("First", &first_hits));
        gate.request(counting_request("Second", &second_hits));

        // Exactly one request is open, and it is the newer one.
        assert!(gate.is_open());
        assert_eq!(gate.current().map(ConfirmRequest::title), Some("Second"));

        gate.resolve_confirm(now);
        assert_eq!(first_hits.load(Ordering::SeqCst), 0);
        assert_eq!(second_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolving_a_closed_gate_is_a_no_op() {
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.resolve_confirm(now);
        gate.resolve_cancel(now);
        gate.tick(now);
        assert!(!gate.is_open());
        assert!(gate.current().is_none());
    }

    #[test]
    fn resolving_twice_runs_the_continuation_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("Once", &hits));
        gate.resolve_confirm(now);
        // A stray second press while the card animates out.
        gate.resolve_confirm(now + Duration::from_millis(50));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn requesting_while_leaving_reopens_immediately() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("Old", &hits));
        gate.resolve_cancel(now);
        assert!(gate.is_leaving());

        gate.request(counting_request("New", &hits));
        assert!(gate.is_open());
        assert_eq!(gate.current().map(ConfirmRequest::title), Some("New"));
    }

    #[test]
    fn leave_transition_holds_until_its_window_elapses() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut gate = ConfirmGate::new();
        let now = Instant::now();

        gate.request(counting_request("Hold", &hits));
        gate.resolve_cancel(now);

        gate.tick(now + Duration::from_millis(199));
        assert!(gate.is_leaving());
        assert!(gate.needs_tick());

        gate.tick(now + LEAVE_DURATION);
        assert!(!gate.is_leaving());
        assert!(!gate.needs_tick());
    }

    #[test]
    fn labels_and_kind_pass_through() {
        let request = ConfirmRequest::new("Délestage", "Confirmer le délestage de la zone 4 ?", || {})
            .with_kind(ConfirmKind::Danger)
            .with_confirm_label("Délester")
            .with_cancel_label("Annuler");

        assert_eq!(request.kind(), ConfirmKind::Danger);
        assert_eq!(request.confirm_label(), Some("Délester"));
        assert_eq!(request.cancel_label(), Some("Annuler"));
        assert_eq!(request.title(), "Délestage");
    }
}
