//! Plugilo automation tools
//!
//! Two independent automation flows built around a remote browser-agent
//! service: a newsletter signup bot with resumable batch progress, and a
//! shop directory scraper that exports CSV.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Agent**: Task runner adapter over the external browser agent
//! - **Store**: Progress marker and dedup ledgers on disk
//! - **Driver**: The resumable batch loop
//! - **Scraper**: Shop listing pagination, detail extraction, CSV export
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use plugilo::agent::{AgentClient, TaskRunner};
//! use plugilo::core::Config;
//! use plugilo::driver::BatchDriver;
//! use plugilo::store::SignupStore;
//!
//! #[tokio::main]
//! async fn main() -> plugilo::Result<()> {
//!     let config = Config::load();
//!     let urls = plugilo::source::load_urls(&config.batch.urls_file)?;
//!     let store = SignupStore::new(&config.store);
//!     let agent = Arc::new(AgentClient::from_config(&config.agent));
//!     let runner = TaskRunner::new(
//!         agent,
//!         config.agent.task_timeout(),
//!         config.batch.captcha_skip_threshold,
//!     );
//!
//!     let driver = BatchDriver::new(&runner, &store, &urls);
//!     let totals = driver.run(store.start_index()).await;
//!     println!("{} successful out of {}", totals.successful, totals.processed);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod core;
pub mod driver;
pub mod email;
pub mod logging;
pub mod scraper;
pub mod source;
pub mod store;

// Re-export commonly used items
pub use crate::core::{BatchTotals, Config, PlugiloError, ProcessingResult, Result};
pub use driver::BatchDriver;
