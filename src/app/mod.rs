// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! alert engine.
//!
//! The `App` struct wires together the domains (alert registry, presentation
//! stack, confirmation gate, localization, settings) and translates messages
//! into side effects like config persistence. This file intentionally keeps
//! policy decisions (window sizing, startup flags, subscription gating)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::alerts::{AlertStack, ConfirmGate, Kind, Options, Registry};
use crate::i18n::fluent::I18n;
use crate::ui::operations::State as OperationsState;
use crate::ui::settings::State as SettingsState;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges the screens, localization, and
/// the alert engine.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    /// Owner of all live notifications and the session journal.
    alerts: Registry,
    /// Presentation lifecycle (entry, countdown, exit) per notification.
    stack: AlertStack,
    /// Single-slot confirmation modal.
    gate: ConfirmGate,
    operations: OperationsState,
    settings: SettingsState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("live_alerts", &self.alerts.len())
            .field("confirm_open", &self.gate.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure, but flags are consumed once; the
    // RefCell<Option<_>> bridges the two.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            alerts: Registry::new(
                config.alerts.effective_max_active(),
                config.alerts.effective_journal_capacity(),
            ),
            stack: AlertStack::new(),
            gate: ConfirmGate::new(),
            operations: OperationsState::new(),
            settings: SettingsState::new(config.alerts.effective_max_active()),
            config,
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the
    /// startup `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            i18n: I18n::new(flags.lang.as_deref(), &config),
            alerts: Registry::new(
                config.alerts.effective_max_active(),
                config.alerts.effective_journal_capacity(),
            ),
            settings: SettingsState::new(config.alerts.effective_max_active()),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            let payload = app.i18n.tr(&key);
            app.alerts.warning(payload, Options::default());
        }

        // A sample raised through the flag behaves exactly like one raised
        // from the operations screen, unknown names included.
        if let Some(kind_name) = flags.raise.as_deref() {
            let kind = Kind::from_name(kind_name);
            let payload = app.i18n.tr(update::sample_message_key(kind));
            app.alerts.notify(kind, payload, Options::default());
        }

        app.stack.sync(&app.alerts, Instant::now());

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.alerts.is_empty() {
            self.i18n.tr("app-title")
        } else {
            let count = self.alerts.len().to_string();
            self.i18n
                .tr_with_args("app-title-alerts", &[("count", &count)])
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.stack.needs_tick() || self.gate.needs_tick(),
        );
        let keys_sub = subscription::create_confirm_key_subscription(self.gate.is_open());

        Subscription::batch([tick_sub, keys_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            screen: &mut self.screen,
            alerts: &mut self.alerts,
            stack: &mut self.stack,
            gate: &mut self.gate,
            operations: &mut self.operations,
            settings: &mut self.settings,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Operations(operations_message) => {
                update::handle_operations_message(&mut ctx, &operations_message, now)
            }
            Message::Journal(journal_message) => {
                update::handle_journal_message(&mut ctx, &journal_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message, now)
            }
            Message::Toast(toast_message) => {
                update::handle_toast_message(&mut ctx, toast_message, now)
            }
            Message::Confirm(confirm_message) => {
                update::handle_confirm_message(&mut ctx, confirm_message, now)
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::LoadShedCompleted => update::handle_load_shed_completed(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            alerts: &self.alerts,
            stack: &self.stack,
            gate: &self.gate,
            operations: &self.operations,
            settings: &self.settings,
            theme_mode: self.config.general.theme_mode,
            now: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::confirm_dialog;
    use crate::ui::journal_screen;
    use crate::ui::navbar;
    use crate::ui::operations;
    use crate::ui::settings;
    use crate::ui::theming::ThemeMode;
    use crate::ui::toast;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn first_id(app: &App) -> crate::alerts::NotificationId {
        app.alerts.iter().next().expect("expected an alert").id()
    }

    #[test]
    fn new_starts_on_operations_screen_with_nothing_live() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Operations);
            assert!(app.alerts.is_empty());
            assert!(app.stack.is_idle());
            assert!(!app.gate.is_open());
        });
    }

    #[test]
    fn corrupt_config_raises_a_startup_warning() {
        with_temp_config_dir(|config_dir| {
            fs::write(config_dir.join("settings.toml"), "not [valid toml")
                .expect("failed to write config");

            let (app, _task) = App::new(Flags::default());

            let warning = app.alerts.iter().next().expect("expected a warning");
            assert_eq!(warning.kind(), Kind::Warning);
            assert_eq!(warning.message(), app.i18n.tr("config-load-warning"));
        });
    }

    #[test]
    fn configured_cap_and_capacity_flow_into_the_registry() {
        with_temp_config_dir(|config_dir| {
            fs::write(
                config_dir.join("settings.toml"),
                "[alerts]\nmax_active = 3\njournal_capacity = 25\n",
            )
            .expect("failed to write config");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.alerts.max_active(), 3);
            assert_eq!(app.alerts.journal().capacity(), 25);
            assert_eq!(app.settings.max_active_input(), "3");
        });
    }

    #[test]
    fn raise_flag_seeds_a_sample_alert() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                raise: Some("fraud".to_string()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);

            let alert = app.alerts.iter().next().expect("expected a sample");
            assert_eq!(alert.kind(), Kind::Fraud);
            assert_eq!(alert.message(), app.i18n.tr("demo-fraud-message"));
            assert!(!app.stack.is_idle());
        });
    }

    #[test]
    fn unknown_raise_kind_falls_back_to_info() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                raise: Some("definitely-not-a-kind".to_string()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);

            assert_eq!(app.alerts.iter().next().unwrap().kind(), Kind::Info);
        });
    }

    #[test]
    fn lang_flag_overrides_the_locale() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                lang: Some("fr".to_string()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);

            assert_eq!(app.i18n.current_locale().to_string(), "fr");
        });
    }

    #[test]
    fn navbar_message_switches_screens() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ScreenSelected(
            Screen::Settings,
        )));

        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn toast_lifecycle_runs_through_the_update_loop() {
        let mut app = App::default();

        let _ = app.update(Message::Operations(operations::Message::RaiseSample(
            Kind::Success,
        )));
        let id = first_id(&app);

        let _ = app.update(Message::Toast(toast::Message::Dismiss(id)));
        assert!(app.alerts.contains(id));
        assert!(app.stack.is_exiting(id));

        // The exit transition runs 300 ms; 350 ms later the entry is gone.
        let _ = app.update(Message::Tick(
            Instant::now() + Duration::from_millis(350),
        ));
        assert!(!app.alerts.contains(id));
        assert!(app.stack.is_idle());
    }

    #[tokio::test]
    async fn confirm_flow_runs_through_the_update_loop() {
        let mut app = App::default();

        let _ = app.update(Message::Operations(operations::Message::RequestLoadShed));
        assert!(app.gate.is_open());

        let _ = app.update(Message::Confirm(confirm_dialog::Message::Confirm));
        assert!(!app.gate.is_open());
        assert!(app.gate.is_leaving());

        let _ = app.update(Message::Tick(
            Instant::now() + Duration::from_millis(250),
        ));
        assert!(app.gate.current().is_none());

        let _ = app.update(Message::LoadShedCompleted);
        let toast = app.alerts.iter().next().expect("expected a toast");
        assert_eq!(toast.kind(), Kind::Success);
        assert_eq!(toast.message(), app.i18n.tr("demo-load-shed-done"));
    }

    #[test]
    fn escape_resolution_leaves_no_queued_command() {
        let mut app = App::default();

        let _ = app.update(Message::Operations(operations::Message::RequestLoadShed));
        let _ = app.update(Message::Confirm(confirm_dialog::Message::Cancel));

        assert!(!app.gate.is_open());
        assert!(app.operations.drain_commands().is_empty());
    }

    #[test]
    fn title_reflects_the_live_alert_count() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("app-title"));

        let _ = app.update(Message::Operations(operations::Message::RaiseSample(
            Kind::Info,
        )));

        assert_eq!(
            app.title(),
            app.i18n.tr_with_args("app-title-alerts", &[("count", "1")])
        );
    }

    #[test]
    fn theme_follows_the_configured_mode() {
        let mut app = App::default();

        app.config.general.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);

        app.config.general.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn settings_submission_updates_the_registry_cap() {
        let mut app = App::default();

        let _ = app.update(Message::Settings(settings::Message::MaxActiveInputChanged(
            "5".to_string(),
        )));
        let _ = app.update(Message::Settings(settings::Message::MaxActiveSubmitted));

        assert_eq!(app.alerts.max_active(), 5);
        assert_eq!(app.config.alerts.max_active, Some(5));
    }

    #[test]
    fn journal_clear_message_empties_the_journal() {
        let mut app = App::default();

        let _ = app.update(Message::Operations(operations::Message::RaiseSample(
            Kind::Error,
        )));
        assert_eq!(app.alerts.journal().len(), 1);

        let _ = app.update(Message::Journal(journal_screen::Message::Clear));
        assert!(app.alerts.journal().is_empty());
    }
}
