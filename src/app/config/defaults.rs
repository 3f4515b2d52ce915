// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Alert Stack**: How many toasts may be on screen at once
//! - **Journal**: In-memory retention for noteworthy alerts

// ==========================================================================
// Alert Stack Defaults
// ==========================================================================

/// Default number of simultaneously visible toasts.
pub const DEFAULT_MAX_ACTIVE: u32 = 8;

/// Minimum allowed toast cap. One slot must always be available so that
/// errors can still surface.
pub const MIN_MAX_ACTIVE: u32 = 1;

/// Maximum allowed toast cap.
pub const MAX_MAX_ACTIVE: u32 = 32;

// ==========================================================================
// Journal Defaults
// ==========================================================================

/// Default number of journal entries kept in memory.
pub const DEFAULT_JOURNAL_CAPACITY: u32 = 200;

/// Minimum journal retention.
pub const MIN_JOURNAL_CAPACITY: u32 = 10;

/// Maximum journal retention.
pub const MAX_JOURNAL_CAPACITY: u32 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Alert stack validation
    assert!(MIN_MAX_ACTIVE > 0);
    assert!(MAX_MAX_ACTIVE >= MIN_MAX_ACTIVE);
    assert!(DEFAULT_MAX_ACTIVE >= MIN_MAX_ACTIVE);
    assert!(DEFAULT_MAX_ACTIVE <= MAX_MAX_ACTIVE);

    // Journal validation
    assert!(MIN_JOURNAL_CAPACITY > 0);
    assert!(MAX_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY <= MAX_JOURNAL_CAPACITY);
};
