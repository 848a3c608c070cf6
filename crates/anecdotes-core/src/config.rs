//! Application configuration management.

use std::{net::SocketAddr, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    anecdote::{Anecdote, default_seeds},
    error::{CoreError, Result},
    store::AnecdoteStore,
};

/// Main configuration structure for Routed Anecdotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page settings.
    #[serde(default)]
    pub app: PageConfig,

    /// Static file server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Anecdotes the session starts with.
    #[serde(default = "default_seeds")]
    pub anecdotes: Vec<Anecdote>,
}

/// Page-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Heading and document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Seconds a notification stays visible.
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout_secs: u64,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Directory holding the compiled site.
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

/// Longest notification timeout, in seconds.
///
/// Browser timers take an `i32` millisecond delay.
pub const MAX_NOTIFICATION_TIMEOUT_SECS: u64 = i32::MAX as u64 / 1000;

// Default value functions
fn default_title() -> String {
    "Software anecdotes".to_string()
}

fn default_notification_timeout() -> u64 {
    5
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            notification_timeout_secs: default_notification_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: PageConfig::default(),
            server: ServerConfig::default(),
            anecdotes: default_seeds(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `ANECDOTES__SECTION__KEY` environment overrides.
    ///
    /// A missing file is not an error here; defaults and the environment apply.
    #[cfg(feature = "env")]
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_with_env_prefix(path, "ANECDOTES")
    }

    #[cfg(feature = "env")]
    fn load_with_env_prefix(path: &Path, prefix: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(prefix).separator("__"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.app.title.trim().is_empty() {
            return Err(CoreError::config("app.title cannot be empty"));
        }

        if self.app.notification_timeout_secs == 0 {
            return Err(CoreError::config(
                "app.notification_timeout_secs must be greater than zero",
            ));
        }

        if self.app.notification_timeout_secs > MAX_NOTIFICATION_TIMEOUT_SECS {
            return Err(CoreError::config(format!(
                "app.notification_timeout_secs must be at most {MAX_NOTIFICATION_TIMEOUT_SECS}"
            )));
        }

        // Surfaces duplicate ids before the first render.
        AnecdoteStore::from_seeds(self.anecdotes.clone())?;

        if self.anecdotes.is_empty() {
            tracing::warn!("no seed anecdotes configured, the list starts empty");
        }

        Ok(())
    }

    /// How long a notification stays visible.
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.app.notification_timeout_secs)
    }

    /// A store holding the configured seeds.
    pub fn store(&self) -> Result<AnecdoteStore> {
        AnecdoteStore::from_seeds(self.anecdotes.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::anecdote::AnecdoteId;

    fn create_test_config() -> String {
        r#"
[app]
title = "Programming wisdom"
notification_timeout_secs = 3

[server]
addr = "0.0.0.0:8080"
site_root = "dist"

[[anecdotes]]
id = 10
content = "Any fool can write code that a computer can understand"
author = "Martin Fowler"
info = "https://martinfowler.com"

[[anecdotes]]
id = 11
content = "Debugging is twice as hard as writing the code in the first place"
author = "Brian Kernighan"
info = "https://en.wikiquote.org/wiki/Brian_Kernighan"
votes = 4
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("anecdotes.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = AppConfig::load(&config_path).expect("load config");

        assert_eq!(config.app.title, "Programming wisdom");
        assert_eq!(config.notification_timeout(), Duration::from_secs(3));
        assert_eq!(config.server.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.server.site_root, "dist");
        assert_eq!(config.anecdotes.len(), 2);
        assert_eq!(config.anecdotes[1].votes, 4);
    }

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_toml_str("").expect("parse empty config");

        assert_eq!(config.app.title, "Software anecdotes");
        assert_eq!(config.notification_timeout(), Duration::from_secs(5));
        assert_eq!(config.server.addr, default_addr());
        assert_eq!(config.server.site_root, "target/site");
        assert_eq!(config.anecdotes, default_seeds());
    }

    #[test]
    fn test_store_from_config() {
        let config = AppConfig::from_toml_str(&create_test_config()).expect("parse");
        let mut store = config.store().expect("store");

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.add_new(Default::default()).expect("ids left"),
            AnecdoteId::new(12)
        );
    }

    #[test]
    fn test_config_rejects_duplicate_ids() {
        let content = r#"
[[anecdotes]]
id = 1
content = "a"
author = "x"
info = "y"

[[anecdotes]]
id = 1
content = "b"
author = "x"
info = "y"
"#;
        let err = AppConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { .. }));
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = AppConfig::from_toml_str("[app]\ntitle = \"  \"\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let result = AppConfig::from_toml_str("[app]\nnotification_timeout_secs = 0\n");
        assert!(result.unwrap_err().to_string().contains("greater than zero"));
    }

    #[test]
    fn test_config_validation_timeout_upper_bound() {
        let result = AppConfig::from_toml_str("[app]\nnotification_timeout_secs = 3000000\n");
        assert!(result.unwrap_err().to_string().contains("at most 2147483"));

        let edge = format!("[app]\nnotification_timeout_secs = {MAX_NOTIFICATION_TIMEOUT_SECS}\n");
        let config = AppConfig::from_toml_str(&edge).expect("largest timeout accepted");
        let millis = config.notification_timeout().as_millis();
        assert!(i32::try_from(millis).is_ok());

        let over = format!(
            "[app]\nnotification_timeout_secs = {}\n",
            MAX_NOTIFICATION_TIMEOUT_SECS + 1
        );
        assert!(AppConfig::from_toml_str(&over).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = AppConfig::from_toml_str("[app\ntitle =");
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_not_found() {
        let result = AppConfig::load(Path::new("/nonexistent/anecdotes.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_load_with_env_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("anecdotes.toml");
        std::fs::write(&config_path, "[app]\ntitle = \"From file\"\n").expect("write");

        // SAFETY: the prefix is unique to this test.
        unsafe { std::env::set_var("ANECDOTES_TEST_ENV__APP__TITLE", "From env") };
        let config =
            AppConfig::load_with_env_prefix(&config_path, "ANECDOTES_TEST_ENV").expect("load");
        unsafe { std::env::remove_var("ANECDOTES_TEST_ENV__APP__TITLE") };

        assert_eq!(config.app.title, "From env");
        assert_eq!(config.app.notification_timeout_secs, 5);
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_load_with_env_missing_file_uses_defaults() {
        let config = AppConfig::load_with_env_prefix(
            Path::new("/nonexistent/anecdotes.toml"),
            "ANECDOTES_TEST_MISSING",
        )
        .expect("defaults apply");

        assert_eq!(config.app.title, "Software anecdotes");
        assert_eq!(config.anecdotes, default_seeds());
    }
}
