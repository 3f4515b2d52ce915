// SPDX-License-Identifier: MPL-2.0
//! Notification records and their creation inputs.
//!
//! A [`Notification`] is immutable once created: identity, kind, payload,
//! time-to-live, and actions are fixed at creation time. Everything that
//! changes over its visible life (entry/exit phases, remaining time) lives
//! in the presenter, not here.

use super::kind::Kind;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identity of a notification within one registry.
///
/// Assigned by the registry from a monotonically increasing sequence and
/// never reused, so a stale id held across a dismissal stays harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) const fn from_seq(seq: u64) -> Self {
        Self(seq)
    }

    /// Raw sequence value, for display and logging.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An inline button rendered on a toast card.
///
/// The callback is shared rather than consumed: an action that opts out of
/// closing its toast can be pressed again while the toast is still up.
#[derive(Clone)]
pub struct Action {
    label: String,
    primary: bool,
    close_on_press: bool,
    on_press: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Creates a secondary action that closes its toast when pressed.
    pub fn new(label: impl Into<String>, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            primary: false,
            close_on_press: true,
            on_press: Arc::new(on_press),
        }
    }

    /// Marks this action as the visually emphasized one.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Leaves the toast up after the action is pressed; it then runs out its
    /// own timer or waits for manual dismissal.
    #[must_use]
    pub fn keep_open(mut self) -> Self {
        self.close_on_press = false;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    #[must_use]
    pub fn closes_on_press(&self) -> bool {
        self.close_on_press
    }

    /// Runs the caller-supplied callback. Panics are not caught here; they
    /// propagate to the hosting application.
    pub fn invoke(&self) {
        (self.on_press)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("primary", &self.primary)
            .field("close_on_press", &self.close_on_press)
            .finish_non_exhaustive()
    }
}

/// Optional parts of a notification, for the per-kind creation helpers.
///
/// `Options::default()` means "all defaults": no title, kind-derived
/// duration, auto-expiring, no actions.
#[derive(Debug, Default)]
pub struct Options {
    pub title: Option<String>,
    pub duration: Option<Duration>,
    pub persistent: bool,
    pub actions: Vec<Action>,
}

impl Options {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the kind-derived time-to-live.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Suppresses auto-expiry; the notification stays until dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// Fully-specified creation input for [`Registry::custom`].
///
/// [`Registry::custom`]: super::registry::Registry::custom
#[derive(Debug)]
pub struct NotificationSpec {
    pub kind: Kind,
    pub message: String,
    pub options: Options,
}

impl NotificationSpec {
    #[must_use]
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// A live notification, as stored by the registry.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    duration: Duration,
    persistent: bool,
    actions: Vec<Action>,
}

impl Notification {
    pub(crate) fn from_spec(id: NotificationId, spec: NotificationSpec) -> Self {
        let NotificationSpec {
            kind,
            message,
            options,
        } = spec;
        Self {
            id,
            kind,
            title: options.title,
            message,
            duration: options.duration.unwrap_or_else(|| kind.default_duration()),
            persistent: options.persistent,
            actions: options.actions,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Human-readable payload. May be empty; an empty message is a caller
    /// mistake, not an engine error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Time-to-live once visible. Ignored while [`is_persistent`] is true.
    ///
    /// [`is_persistent`]: Notification::is_persistent
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }
}
