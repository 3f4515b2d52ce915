// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`operations`] - Operator console that raises alerts and commands
//! - [`journal_screen`] - Session journal of noteworthy alerts
//! - [`settings`] - Application preferences and configuration
//!
//! # Overlays
//!
//! - [`toast`] - The toast stack layered over every screen
//! - [`confirm_dialog`] - Modal confirmation for destructive commands
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with screen tabs and alert badge
//! - [`countdown_ring`] - Canvas widget drawing a toast's remaining time

pub mod confirm_dialog;
pub mod countdown_ring;
pub mod design_tokens;
pub mod journal_screen;
pub mod navbar;
pub mod operations;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod toast;
