// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop from outside the widget tree: a shared
//! animation heartbeat and the keyboard shortcuts of the confirmation
//! dialog. Both shut off completely while nothing needs them, so an idle
//! console wakes up for nothing.

use super::Message;
use crate::ui::confirm_dialog;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval of the animation heartbeat. Transitions run for 200-500 ms, so
/// 50 ms keeps them smooth without a per-frame subscription.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates the periodic tick subscription driving toast countdowns, entry
/// and exit transitions, and the dialog leave transition.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription for the confirmation dialog: Escape
/// cancels, Enter confirms. Only installed while a request is awaiting an
/// answer, so the keys keep their normal meaning everywhere else.
pub fn create_confirm_key_subscription(confirm_open: bool) -> Subscription<Message> {
    if confirm_open {
        event::listen_with(|event, status, _window_id| {
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
                return None;
            };

            match status {
                event::Status::Ignored => match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        Some(Message::Confirm(confirm_dialog::Message::Cancel))
                    }
                    keyboard::Key::Named(keyboard::key::Named::Enter) => {
                        Some(Message::Confirm(confirm_dialog::Message::Confirm))
                    }
                    _ => None,
                },
                event::Status::Captured => None,
            }
        })
    } else {
        Subscription::none()
    }
}
