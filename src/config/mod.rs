use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// URL of the remote fixture feed document.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for the feed request. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Feed file used instead of the snapshot compiled into the binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundled_feed_path: Option<String>,
}

fn default_feed_url() -> String {
    constants::DEFAULT_FEED_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: default_feed_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            bundled_feed_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `REDLENS_FEED_URL` - Override feed URL
    /// - `REDLENS_LOG_FILE` - Override log file path
    /// - `REDLENS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    /// - `REDLENS_BUNDLED_FEED` - Read the bundled snapshot from this file
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_stored().await?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the config file as stored, without environment overrides.
    /// Use this before editing and saving the file.
    pub async fn load_stored() -> Result<Self, AppError> {
        Self::load_stored_from_path(&get_config_path()).await
    }

    /// Like [`Config::load_stored`] for a custom path; defaults when the file is absent.
    pub async fn load_stored_from_path(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            debug!("No config file at {path}, using defaults");
            Ok(Config::default())
        }
    }

    /// Applies `REDLENS_*` environment overrides on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(feed_url) = std::env::var(env_vars::FEED_URL) {
            self.feed_url = feed_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(bundled) = std::env::var(env_vars::BUNDLED_FEED) {
            self.bundled_feed_path = Some(bundled);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.feed_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows the effective defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Feed URL:");
        println!("{}", config.feed_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Bundled Feed:");
        match &config.bundled_feed_path {
            Some(path) => println!("{path}"),
            None => println!("(Built-in snapshot)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
feed_url = "https://feed.example.com/matches.json"
log_file_path = "/custom/log/path"
http_timeout_seconds = 5
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.feed_url, "https://feed.example.com/matches.json");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.bundled_feed_path, None);
    }

    #[tokio::test]
    async fn test_config_load_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.feed_url, constants::DEFAULT_FEED_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("redlens");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        Config::default().save_to_path(&config_path_str).await.unwrap();

        assert!(config_dir.exists());
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            feed_url: "https://feed.example.com/matches.json".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 15,
            bundled_feed_path: Some("/opt/redlens/matches.json".to_string()),
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("feed_url") && content.contains("https://feed.example.com"),
            "Content should contain the feed url. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_config_optional_fields_not_serialized() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(!toml_string.contains("bundled_feed_path"));
        assert!(toml_string.contains("http_timeout_seconds = 10"));
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let invalid_content = r#"
feed_url = "https://feed.example.com
"#;
        let result: Result<Config, _> = toml::from_str(invalid_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("redlens"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("redlens"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::FEED_URL, "https://mirror.example.com/feed.json");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "3");
            std::env::set_var(env_vars::BUNDLED_FEED, "/tmp/snapshot.json");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::FEED_URL);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::BUNDLED_FEED);
        }

        assert_eq!(config.feed_url, "https://mirror.example.com/feed.json");
        assert_eq!(config.http_timeout_seconds, 3);
        assert_eq!(
            config.bundled_feed_path,
            Some("/tmp/snapshot.json".to_string())
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_stored_config_ignores_env_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        tokio::fs::write(&config_path, "feed_url = \"https://feed.example.com/matches.json\"\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env_vars::FEED_URL, "https://mirror.example.com/feed.json");
        }
        let stored = Config::load_stored_from_path(&config_path_str).await;
        let missing = Config::load_stored_from_path(
            &temp_dir.path().join("absent.toml").to_string_lossy(),
        )
        .await;
        unsafe {
            std::env::remove_var(env_vars::FEED_URL);
        }

        assert_eq!(stored.unwrap().feed_url, "https://feed.example.com/matches.json");
        assert_eq!(missing.unwrap(), Config::default());
    }

    #[test]
    #[serial]
    fn test_env_override_ignores_unparseable_timeout() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }
}
