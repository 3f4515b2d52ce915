// SPDX-License-Identifier: MPL-2.0
//! Alert taxonomy.
//!
//! Every notification carries a [`Kind`] from a closed set. The kind decides
//! the default time-to-live and the visual treatment. Business meaning stays
//! with the caller; the engine only reads the tables below.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Classification of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Operation completed as requested.
    Success,
    /// Operation failed; operators get extra reading time.
    Error,
    /// Something needs attention but nothing failed yet.
    Warning,
    /// Neutral information.
    Info,
    /// Grid incident feed (outages, load shedding, substation events).
    Grid,
    /// Fraud detection feed; longest-lived of the auto-expiring kinds.
    Fraud,
}

impl Kind {
    /// All kinds, in display order.
    pub const ALL: [Kind; 6] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Grid,
        Kind::Fraud,
    ];

    /// Default time-to-live for a non-persistent notification of this kind.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Kind::Error => Duration::from_millis(6000),
            Kind::Fraud => Duration::from_millis(8000),
            Kind::Success | Kind::Warning | Kind::Info | Kind::Grid => {
                Duration::from_millis(4000)
            }
        }
    }

    /// Accent color used for the toast border, glyph, and journal badge.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
            Kind::Grid => palette::GRID_500,
            Kind::Fraud => palette::FRAUD_500,
        }
    }

    /// Short glyph rendered in the toast card and journal rows.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "\u{2713}",  // ✓
            Kind::Error => "\u{2715}",    // ✕
            Kind::Warning => "!",
            Kind::Info => "i",
            Kind::Grid => "\u{26A1}",     // ⚡
            Kind::Fraud => "\u{26A0}",    // ⚠
        }
    }

    /// Stable lowercase name, the inverse of [`Kind::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Grid => "grid",
            Kind::Fraud => "fraud",
        }
    }

    /// Fluent key for the localized kind label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Kind::Success => "kind-success",
            Kind::Error => "kind-error",
            Kind::Warning => "kind-warning",
            Kind::Info => "kind-info",
            Kind::Grid => "kind-grid",
            Kind::Fraud => "kind-fraud",
        }
    }

    /// Parses a kind name leniently.
    ///
    /// Unrecognized names resolve to [`Kind::Info`]: a caller passing a bad
    /// name is a caller bug, and a mislabeled notification beats a lost one.
    #[must_use]
    pub fn from_name(name: &str) -> Kind {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            "grid" => Kind::Grid,
            "fraud" => Kind::Fraud,
            _ => Kind::Info,
        }
    }

    /// Whether notifications of this kind are recorded in the session journal.
    #[must_use]
    pub fn journaled(self) -> bool {
        matches!(self, Kind::Error | Kind::Warning | Kind::Grid | Kind::Fraud)
    }
}
