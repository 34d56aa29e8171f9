//! Core module - shared types, configuration, and error handling

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{PlugiloError, Result};
pub use types::{BatchTotals, ProcessingResult};
