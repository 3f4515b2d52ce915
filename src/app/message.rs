// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::confirm_dialog;
use crate::ui::journal_screen;
use crate::ui::navbar;
use crate::ui::operations;
use crate::ui::settings;
use crate::ui::toast;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Operations(operations::Message),
    Journal(journal_screen::Message),
    Settings(settings::Message),
    Toast(toast::Message),
    Confirm(confirm_dialog::Message),
    /// Shared heartbeat for toast countdowns and transition phases. Only
    /// subscribed while something is animating.
    Tick(Instant),
    /// The simulated load-shedding run finished in the background.
    LoadShedCompleted,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GRID_SENTRY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional alert kind name to raise as a sample right after startup.
    /// Unknown names fall back to an info alert.
    pub raise: Option<String>,
}
