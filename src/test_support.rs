//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{FolioConfig, resolve};
use crate::core::state::App;

/// Creates a test App from the default config, light mode.
pub fn test_app() -> App {
    let resolved = resolve(&FolioConfig::default(), None);
    App::from_config(&resolved, false)
}
