//! Routed Anecdotes Server Library
//!
//! Hosts the compiled single-page app. Every path without a matching file is
//! answered with `index.html`, so client-side routes survive a reload.
//!
//! # Modules
//!
//! - [`router`] - axum router with SPA fallback and health check

use std::path::Path;

use anecdotes_core::AppConfig;
use color_eyre::eyre::{Result, WrapErr};

pub mod router;

pub use router::create_router;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration file with environment overrides.
///
/// A missing file is reported and replaced by defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::warn!(?path, "configuration file not found, using defaults");
    }

    AppConfig::load_with_env(path)
        .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()))
}
