// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the application config directory.
//!
//! GridSentry keeps no on-disk state besides `settings.toml`, so this module
//! only resolves the configuration directory.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`GRID_SENTRY_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GridSentry";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GRID_SENTRY_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// This should be called once at application startup, before any path
/// resolution functions are called. The CLI override takes priority over
/// the environment variable and the platform default.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `GRID_SENTRY_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/GridSentry/`
///    - macOS: `~/Library/Application Support/GridSentry/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\GridSentry\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 3. `GRID_SENTRY_CONFIG_DIR` environment variable (if set and non-empty)
/// 4. Platform-specific config directory (with app name appended)
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Lock shared by every test that mutates `GRID_SENTRY_CONFIG_DIR`; the
/// variable is process-global, so touching it from parallel tests races.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: OnceLock<std::sync::Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
