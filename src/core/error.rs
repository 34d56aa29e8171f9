//! Custom error types for the plugilo automation tools
//!
//! Provides a unified error handling system across all modules.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for plugilo operations
#[derive(Error, Debug)]
pub enum PlugiloError {
    /// Browser-agent service connection or API errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shop directory scraping errors
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// The URL source file does not exist
    #[error("URL source not found: {0}")]
    SourceNotFound(PathBuf),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for plugilo operations
pub type Result<T> = std::result::Result<T, PlugiloError>;

impl PlugiloError {
    /// Create an agent error
    pub fn agent(msg: impl Into<String>) -> Self {
        Self::Agent(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a scrape error
    pub fn scrape(msg: impl Into<String>) -> Self {
        Self::Scrape(msg.into())
    }
}
