//! Configuration management for the plugilo automation tools
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/plugilo/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{PlugiloError, Result};

/// Main configuration for the automation tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Browser-agent service configuration
    #[serde(default)]
    pub agent: AgentServiceConfig,
    /// Signup batch configuration
    #[serde(default)]
    pub batch: BatchConfig,
    /// On-disk batch state locations
    #[serde(default)]
    pub store: StoreConfig,
    /// Shop directory scraper configuration
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Settings consumed by the external browser-agent service
///
/// The environment block is forwarded to the agent verbatim; the timeouts
/// bound each phase of a task on the agent side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentServiceConfig {
    /// Base URL of the agent service
    pub base_url: String,
    /// Browser viewport width in pixels
    pub viewport_width: u32,
    /// Browser viewport height in pixels
    pub viewport_height: u32,
    /// Whether the agent browser runs without a visible window
    pub headless: bool,
    /// Whether screenshots are annotated with element markers
    pub annotate_image: bool,
    /// Delay before each screenshot, in seconds
    pub screenshot_delay_secs: f64,
    /// Whether page HTML is included for form detection
    pub include_html: bool,
    /// Whether point-of-interest text is included in observations
    pub include_poi_text: bool,
    /// Page the agent browser starts from
    pub homepage: String,
    /// Whether the agent persists artifacts after every step
    pub save_every_step: bool,
    /// Maximum agent steps per task
    pub max_steps: u32,
    /// Wall-clock budget for one task, in seconds
    pub task_timeout_secs: u64,
    /// Budget for a single agent action, in seconds
    pub action_timeout_secs: u64,
    /// Budget for an environment response, in seconds
    pub environment_timeout_secs: u64,
}

/// Signup batch behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// File with newline-delimited target URLs
    pub urls_file: PathBuf,
    /// Whole-process retry budget on fatal errors
    pub max_retries: u32,
    /// Fixed delay between whole-process retries, in seconds
    pub retry_delay_secs: u64,
    /// Captcha failure count at which the task prompt tells the agent to skip
    pub captcha_skip_threshold: u32,
}

/// Locations of the progress marker and dedup ledgers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Append-only ledger of every attempted URL
    pub processed_file: PathBuf,
    /// Append-only ledger of confirmed submissions
    pub completed_file: PathBuf,
    /// Single-integer progress marker
    pub last_index_file: PathBuf,
}

/// Shop directory scraper behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Shop listing base URL
    pub base_url: String,
    /// CSV output path
    pub output_file: PathBuf,
    /// Per-request timeout, in seconds
    pub request_timeout_secs: u64,
    /// Maximum product names captured per shop
    pub max_products: usize,
}

impl Default for AgentServiceConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("PLUGILO_AGENT_URL")
                .unwrap_or_else(|_| "http://localhost:8090".to_string()),
            viewport_width: 1280,
            viewport_height: 1920,
            headless: env::var("PLUGILO_HEADLESS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            annotate_image: true,
            screenshot_delay_secs: 2.0,
            include_html: true,
            include_poi_text: true,
            homepage: "https://www.google.com".to_string(),
            save_every_step: true,
            max_steps: 50,
            task_timeout_secs: 900,
            action_timeout_secs: 20,
            environment_timeout_secs: 30,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            urls_file: env::var("PLUGILO_URLS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("urls.txt")),
            max_retries: 3,
            retry_delay_secs: 10,
            captcha_skip_threshold: 5,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            processed_file: PathBuf::from("processed_urls.txt"),
            completed_file: PathBuf::from("completed_urls.txt"),
            last_index_file: PathBuf::from("last_index.txt"),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.billiger.de/shops".to_string(),
            output_file: PathBuf::from("billiger_shops.csv"),
            request_timeout_secs: 30,
            max_products: 5,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plugilo")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(PlugiloError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PlugiloError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| PlugiloError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}

impl AgentServiceConfig {
    /// Wall-clock budget for one task
    pub fn task_timeout(&self) -> Duration {
        Duration::from_secs(self.task_timeout_secs)
    }
}

impl BatchConfig {
    /// Fixed delay between whole-process retries
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.agent.viewport_width, 1280);
        assert_eq!(config.agent.max_steps, 50);
        assert_eq!(config.agent.task_timeout_secs, 900);
        assert_eq!(config.batch.max_retries, 3);
        assert_eq!(config.batch.captcha_skip_threshold, 5);
        assert_eq!(
            config.store.processed_file,
            PathBuf::from("processed_urls.txt")
        );
        assert_eq!(config.scraper.max_products, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("task_timeout_secs"));
        assert!(toml_str.contains("processed_file"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.agent.max_steps, config.agent.max_steps);
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let parsed: Config = toml::from_str("[batch]\nurls_file = \"custom.txt\"\nmax_retries = 5\nretry_delay_secs = 1\ncaptcha_skip_threshold = 2\n").unwrap();
        assert_eq!(parsed.batch.urls_file, PathBuf::from("custom.txt"));
        assert_eq!(parsed.batch.max_retries, 5);
        assert_eq!(parsed.agent.max_steps, 50);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("plugilo"));
    }

    #[test]
    fn test_timeout_helpers() {
        let config = Config::default();
        assert_eq!(config.agent.task_timeout(), Duration::from_secs(900));
        assert_eq!(config.batch.retry_delay(), Duration::from_secs(10));
    }
}
