// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and system theme detection.

use dark_light;
use serde::{Deserialize, Serialize};

/// The operator's theme preference, persisted in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes, in the order the settings picker lists them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The iced theme this mode resolves to right now.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Fluent key for the localized mode label in the settings picker.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }
}
