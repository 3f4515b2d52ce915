// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the public crate API the way the
//! application shell does, with a hand-advanced clock.

use grid_sentry::alerts::confirm::LEAVE_DURATION;
use grid_sentry::alerts::stack::EXIT_DURATION;
use grid_sentry::alerts::{
    AlertStack, ConfirmGate, ConfirmKind, ConfirmRequest, Kind, NotificationSpec, Options,
    Registry,
};
use grid_sentry::app::config::{self, Config};
use grid_sentry::i18n::fluent::I18n;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Mirrors one pass of the application tick handler: expire and finish
/// transitions, then drop the finished entries from the registry.
fn drive_tick(alerts: &mut Registry, stack: &mut AlertStack, now: Instant) {
    for id in stack.tick(now) {
        alerts.dismiss(id);
    }
    stack.sync(alerts, now);
}

#[test]
fn toast_lifecycle_from_raise_to_removal() {
    let mut alerts = Registry::new(8, 100);
    let mut stack = AlertStack::new();
    let start = Instant::now();

    let id = alerts.success("Zone Dixinn updated", Options::default());
    stack.sync(&alerts, start);
    assert!(stack.is_entering(id, start));
    assert!(stack.needs_tick());

    // Past the 4 s success countdown the toast flips into its exit phase
    // but stays in the registry until the transition ends.
    let expired = start + Kind::Success.default_duration() + Duration::from_millis(1);
    drive_tick(&mut alerts, &mut stack, expired);
    assert!(stack.is_exiting(id));
    assert!(alerts.contains(id));

    let gone = expired + EXIT_DURATION + Duration::from_millis(1);
    drive_tick(&mut alerts, &mut stack, gone);
    assert!(!alerts.contains(id));
    assert!(stack.is_idle());

    // Success toasts leave no trace in the journal.
    assert!(alerts.journal().is_empty());
}

#[test]
fn noteworthy_kinds_survive_in_the_journal() {
    let mut alerts = Registry::new(8, 100);
    let mut stack = AlertStack::new();
    let start = Instant::now();

    let id = alerts.grid("Feeder F-12 opened", Options::default());
    stack.sync(&alerts, start);

    let gone = start + Kind::Grid.default_duration() + EXIT_DURATION + Duration::from_millis(2);
    drive_tick(&mut alerts, &mut stack, gone);
    drive_tick(&mut alerts, &mut stack, gone + Duration::from_millis(1));

    assert!(alerts.is_empty());
    let entry = alerts.journal().iter_newest_first().next().expect("expected an entry");
    assert_eq!(entry.kind(), Kind::Grid);
    assert_eq!(entry.message(), "Feeder F-12 opened");
}

#[test]
fn cap_eviction_spares_persistent_alerts() {
    let mut alerts = Registry::new(2, 100);

    let pinned = alerts.custom(
        NotificationSpec::new(Kind::Fraud, "Meter 88 bypass suspected")
            .with_options(Options::default().persistent()),
    );
    let first = alerts.info("First reading", Options::default());
    let second = alerts.info("Second reading", Options::default());

    assert_eq!(alerts.len(), 2);
    assert!(alerts.contains(pinned));
    assert!(!alerts.contains(first));
    assert!(alerts.contains(second));
}

#[test]
fn confirmation_delivers_the_command_exactly_once() {
    let mut gate = ConfirmGate::new();
    let (sender, receiver) = mpsc::channel();
    let now = Instant::now();

    gate.request(
        ConfirmRequest::new("Confirm load shedding", "Shed 40 MW from sector 7?", move || {
            let _ = sender.send("load-shed");
        })
        .with_kind(ConfirmKind::Danger),
    );
    assert!(gate.is_open());

    gate.resolve_confirm(now);
    assert_eq!(receiver.try_recv(), Ok("load-shed"));
    assert!(receiver.try_recv().is_err());

    // The dialog lingers for its leave transition, then clears fully.
    assert!(gate.is_leaving());
    gate.tick(now + LEAVE_DURATION + Duration::from_millis(1));
    assert!(gate.current().is_none());
    assert!(!gate.needs_tick());
}

#[test]
fn cancelled_confirmation_never_fires() {
    let mut gate = ConfirmGate::new();
    let (sender, receiver) = mpsc::channel::<&str>();

    gate.request(ConfirmRequest::new("Confirm", "Sure?", move || {
        let _ = sender.send("never");
    }));
    gate.resolve_cancel(Instant::now());

    assert!(!gate.is_open());
    assert!(receiver.try_recv().is_err());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config");

    let reloaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &reloaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn journal_keeps_rendered_payloads_across_locale_switches() {
    let mut i18n = I18n::new(Some("en-US"), &Config::default());
    let mut alerts = Registry::new(8, 100);

    let english = i18n.tr("demo-grid-message");
    alerts.grid(english.clone(), Options::default());

    let french_locale = "fr".parse().expect("valid locale");
    i18n.set_locale(french_locale);

    // Payloads are rendered when raised; a later locale switch must not
    // rewrite history.
    let entry = alerts.journal().iter_newest_first().next().expect("expected an entry");
    assert_eq!(entry.message(), english);
    assert_ne!(i18n.tr("demo-grid-message"), english);
}
