// SPDX-License-Identifier: MPL-2.0
//! In-app notification engine.
//!
//! Three cooperating pieces, composed by the application root:
//!
//! - [`registry::Registry`] owns the ordered collection of live
//!   notifications and assigns identity and defaults.
//! - [`stack::AlertStack`] owns the presentation lifecycle of each entry
//!   (entering, ticking countdown, exiting) without ever mutating the
//!   registry itself.
//! - [`confirm::ConfirmGate`] is the single-slot yes/no modal primitive
//!   with a caller-supplied continuation.
//!
//! All timing flows through caller-supplied [`std::time::Instant`]s, so the
//! whole engine is drivable from tests with a fabricated clock.

pub mod confirm;
pub mod countdown;
pub mod kind;
pub mod notification;
pub mod registry;
pub mod stack;

pub use confirm::{ConfirmGate, ConfirmKind, ConfirmRequest};
pub use countdown::Countdown;
pub use kind::Kind;
pub use notification::{Action, Notification, NotificationId, NotificationSpec, Options};
pub use registry::Registry;
pub use stack::AlertStack;
