// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that the single
//! `App::update` entrypoint routes to. Each handler runs the screen's own
//! `update` to obtain a domain event, then applies that event to the alert
//! engine through the [`UpdateContext`]. The current instant is passed in by
//! the caller, never read here, which keeps every handler drivable from
//! tests with a fabricated clock.

use super::config::{self, Config};
use super::{Message, Screen};
use crate::alerts::{
    Action, AlertStack, ConfirmGate, ConfirmKind, ConfirmRequest, Kind, NotificationSpec, Options,
    Registry,
};
use crate::i18n::fluent::I18n;
use crate::ui::confirm_dialog;
use crate::ui::journal_screen::{self, Event as JournalEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::operations::{self, Event as OperationsEvent, OperatorCommand};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::toast;
use iced::Task;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

/// How long the simulated load-shedding run takes before reporting back.
const LOAD_SHED_DURATION: Duration = Duration::from_millis(1500);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub screen: &'a mut Screen,
    pub alerts: &'a mut Registry,
    pub stack: &'a mut AlertStack,
    pub gate: &'a mut ConfirmGate,
    pub operations: &'a mut operations::State,
    pub settings: &'a mut settings::State,
}

/// Fluent key of the sample payload raised for `kind`.
#[must_use]
pub fn sample_message_key(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "demo-success-message",
        Kind::Error => "demo-error-message",
        Kind::Warning => "demo-warning-message",
        Kind::Info => "demo-info-message",
        Kind::Grid => "demo-grid-message",
        Kind::Fraud => "demo-fraud-message",
    }
}

/// Handles navigation bar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::NavigateTo(screen) => {
            *ctx.screen = screen;
        }
    }
    Task::none()
}

/// Handles operations screen messages.
///
/// Raising events mutate the registry and re-sync the presentation stack;
/// the load-shedding request only opens the confirmation gate, with a
/// continuation that queues the command for [`handle_confirm_message`].
pub fn handle_operations_message(
    ctx: &mut UpdateContext<'_>,
    message: &operations::Message,
    now: Instant,
) -> Task<Message> {
    match operations::update(message) {
        OperationsEvent::RaiseSample(kind) => {
            let payload = ctx.i18n.tr(sample_message_key(kind));
            ctx.alerts.notify(kind, payload, Options::default());
            sync_presentation(ctx, now);
        }
        OperationsEvent::RaiseGridIncident => {
            let counter = ctx.operations.acknowledge_counter();
            let spec = NotificationSpec::new(Kind::Grid, ctx.i18n.tr("demo-grid-message"))
                .with_options(
                    Options::default()
                        .with_title(ctx.i18n.tr("demo-grid-title"))
                        .persistent()
                        .with_action(
                            Action::new(ctx.i18n.tr("demo-grid-ack"), move || {
                                counter.fetch_add(1, Ordering::Relaxed);
                            })
                            .primary(),
                        ),
                );
            ctx.alerts.custom(spec);
            sync_presentation(ctx, now);
        }
        OperationsEvent::RaiseFraudAlert => {
            let counter = ctx.operations.details_counter();
            let spec = NotificationSpec::new(Kind::Fraud, ctx.i18n.tr("demo-fraud-message"))
                .with_options(
                    Options::default()
                        .with_title(ctx.i18n.tr("demo-fraud-title"))
                        .with_action(
                            Action::new(ctx.i18n.tr("demo-fraud-details"), move || {
                                counter.fetch_add(1, Ordering::Relaxed);
                            })
                            .keep_open(),
                        ),
                );
            ctx.alerts.custom(spec);
            sync_presentation(ctx, now);
        }
        OperationsEvent::RequestLoadShed => {
            let sender = ctx.operations.command_sender();
            let request = ConfirmRequest::new(
                ctx.i18n.tr("confirm-load-shed-title"),
                ctx.i18n.tr("confirm-load-shed-message"),
                move || {
                    // The receiver lives in the operations state; a send
                    // failure only happens during shutdown.
                    let _ = sender.send(OperatorCommand::LoadShed);
                },
            )
            .with_kind(ConfirmKind::Danger)
            .with_confirm_label(ctx.i18n.tr("confirm-load-shed-confirm"));
            ctx.gate.request(request);
        }
        OperationsEvent::ClearAll => {
            ctx.alerts.clear_all();
            sync_presentation(ctx, now);
        }
    }
    Task::none()
}

/// Handles journal screen messages.
pub fn handle_journal_message(
    ctx: &mut UpdateContext<'_>,
    message: &journal_screen::Message,
) -> Task<Message> {
    match journal_screen::update(message) {
        JournalEvent::Clear => {
            ctx.alerts.journal_mut().clear();
        }
    }
    Task::none()
}

/// Handles settings screen messages. Preference events mutate the config
/// and are written through to disk immediately.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
    now: Instant,
) -> Task<Message> {
    match settings::update(message, ctx.settings) {
        SettingsEvent::None => {}
        SettingsEvent::LanguageSelected(locale) => {
            ctx.config.general.language = Some(locale.to_string());
            ctx.i18n.set_locale(locale);
            persist_config(ctx, now);
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            ctx.config.general.theme_mode = mode;
            persist_config(ctx, now);
        }
        SettingsEvent::MaxActiveChanged(value) => {
            ctx.config.alerts.max_active = Some(value);
            ctx.alerts.set_max_active(value as usize);
            persist_config(ctx, now);
        }
    }
    Task::none()
}

/// Handles toast overlay messages.
///
/// Both dismissal and a closing action only start the exit transition;
/// registry removal is deferred to [`handle_tick`] once the transition has
/// played out.
pub fn handle_toast_message(
    ctx: &mut UpdateContext<'_>,
    message: toast::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        toast::Message::Dismiss(id) => {
            ctx.stack.begin_exit(id, now);
        }
        toast::Message::Action { id, index } => {
            let closes = match ctx.alerts.get(id).and_then(|n| n.action(index)) {
                Some(action) => {
                    action.invoke();
                    action.closes_on_press()
                }
                // Stale press on a toast that is already gone.
                None => false,
            };
            if closes {
                ctx.stack.begin_exit(id, now);
            }
        }
    }
    Task::none()
}

/// Handles confirmation dialog messages.
///
/// An affirmative answer runs the continuation inside the gate and then
/// schedules whatever commands it queued. Cancel and the backdrop click
/// resolve negatively without running anything.
pub fn handle_confirm_message(
    ctx: &mut UpdateContext<'_>,
    message: confirm_dialog::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        confirm_dialog::Message::Confirm => {
            ctx.gate.resolve_confirm(now);
            schedule_queued_commands(ctx)
        }
        confirm_dialog::Message::Cancel | confirm_dialog::Message::Backdrop => {
            ctx.gate.resolve_cancel(now);
            Task::none()
        }
    }
}

/// Handles completion of the simulated load-shedding run.
pub fn handle_load_shed_completed(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let payload = ctx.i18n.tr("demo-load-shed-done");
    ctx.alerts.success(payload, Options::default());
    sync_presentation(ctx, now);
    Task::none()
}

/// Advances every transition one step and finalizes removals whose exit
/// animation has finished.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.gate.tick(now);

    for id in ctx.stack.tick(now) {
        ctx.alerts.dismiss(id);
    }
    sync_presentation(ctx, now);

    Task::none()
}

/// Reconciles the presentation stack after a registry mutation.
fn sync_presentation(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.stack.sync(ctx.alerts, now);
}

/// Turns the commands queued by confirmation continuations into background
/// tasks.
fn schedule_queued_commands(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let tasks = ctx
        .operations
        .drain_commands()
        .into_iter()
        .map(|command| match command {
            OperatorCommand::LoadShed => Task::perform(tokio::time::sleep(LOAD_SHED_DURATION), |_| {
                Message::LoadShedCompleted
            }),
        });
    Task::batch(tasks)
}

/// Writes the current config to disk. A failed write surfaces as a warning
/// toast; the preference still applies to the running session.
fn persist_config(ctx: &mut UpdateContext<'_>, now: Instant) {
    // Skipped under test to keep the real config directory untouched.
    if cfg!(test) {
        return;
    }
    if config::save(ctx.config).is_err() {
        let payload = ctx.i18n.tr("config-save-warning");
        ctx.alerts.warning(payload, Options::default());
        sync_presentation(ctx, now);
    }
}
