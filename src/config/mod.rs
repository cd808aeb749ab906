//! Toolkit Configuration Module
//!
//! Provides analysis and report tuning loaded from a TOML file, replacing
//! hardcoded window sizes and thresholds with operator-tunable values.
//!
//! ## Loading Order
//!
//! 1. `ENERGY_TOOLKIT_CONFIG` environment variable (path to TOML file)
//! 2. `toolkit_config.toml` in the current working directory
//! 3. Built-in defaults (see [`defaults`])
//!
//! ## Usage
//!
//! ```ignore
//! // In main():
//! config::init(ToolkitConfig::load());
//!
//! // Anywhere in the codebase:
//! let window = config::get().analysis.moving_average_window;
//! ```

mod toolkit_config;
pub mod defaults;
pub mod validation;

pub use toolkit_config::*;

use std::sync::OnceLock;

/// Global toolkit configuration, initialized once at startup.
static TOOLKIT_CONFIG: OnceLock<ToolkitConfig> = OnceLock::new();

/// Initialize the global toolkit configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: ToolkitConfig) {
    if TOOLKIT_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global toolkit configuration.
///
/// Falls back to built-in defaults if `init()` was never called.
pub fn get() -> &'static ToolkitConfig {
    TOOLKIT_CONFIG.get_or_init(ToolkitConfig::default)
}
