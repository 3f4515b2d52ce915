// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application chrome.
//!
//! Screen titles, buttons, and settings labels are localized through the
//! Fluent system. Notification payloads are NOT: the engine treats titles
//! and messages as already-rendered strings supplied by the caller.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation catalogs
//! - Runtime language switching
//! - Fallback to the default locale when translations are missing

pub mod fluent;
