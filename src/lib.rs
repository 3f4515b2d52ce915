// SPDX-License-Identifier: MPL-2.0
//! `grid_sentry` is an operator alert console for an electricity-grid
//! administration team, built with the Iced GUI framework.
//!
//! It centers on an in-app alert engine (toast stack, confirmation gate,
//! session journal) and demonstrates internationalization with Fluent,
//! persisted settings, and modular UI design.

#![doc(html_root_url = "https://docs.rs/grid_sentry/0.1.0")]

pub mod alerts;
pub mod app;
pub mod error;
pub mod i18n;
pub mod journal;
pub mod ui;
