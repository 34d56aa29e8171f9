//! On-disk batch state
//!
//! A lifecycle-scoped persistence component: constructed once from
//! [`StoreConfig`] and passed by reference to the driver, so tests can
//! point it at temporary storage.

pub mod ledger;
pub mod progress;

pub use ledger::DedupLedger;
pub use progress::ProgressTracker;

use tracing::{error, info};

use crate::core::config::StoreConfig;
use crate::core::{ProcessingResult, Result};

/// Progress marker and dedup ledgers for one batch lifecycle
#[derive(Debug, Clone)]
pub struct SignupStore {
    progress: ProgressTracker,
    ledger: DedupLedger,
}

impl SignupStore {
    /// Create a store over the configured file locations
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            progress: ProgressTracker::new(&config.last_index_file),
            ledger: DedupLedger::new(&config.processed_file, &config.completed_file),
        }
    }

    /// Index of the next URL to process, 0 when no marker exists
    pub fn start_index(&self) -> usize {
        self.progress.start_index()
    }

    /// Persist the index of the next URL to process
    pub fn save_progress(&self, index: usize) -> Result<()> {
        self.progress.save(index)
    }

    /// Whether the URL was already attempted in any prior run
    pub fn is_processed(&self, url: &str) -> bool {
        self.ledger.is_processed(url)
    }

    /// Record a terminal outcome and log its summary line
    pub fn mark_processed(&self, url: &str, result: &ProcessingResult) -> Result<()> {
        self.ledger.mark(url, result)?;

        let status = if result.success { "SUCCESS" } else { "FAILED" };
        info!(
            status,
            %url,
            form_found = result.form_found,
            submitted = result.submission_confirmed,
            elapsed_secs = result.elapsed.as_secs_f64(),
            "URL processed"
        );
        if let Some(ref message) = result.error_message {
            error!(%url, message = %message, "Processing issue");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn store_in(dir: &Path) -> SignupStore {
        SignupStore::new(&StoreConfig {
            processed_file: dir.join("processed_urls.txt"),
            completed_file: dir.join("completed_urls.txt"),
            last_index_file: dir.join("last_index.txt"),
        })
    }

    #[test]
    fn test_fresh_store_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.start_index(), 0);
        assert!(!store.is_processed("x.com"));
    }

    #[test]
    fn test_mark_and_progress_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut result = ProcessingResult::new("x.com");
        result.success = true;
        result.submission_confirmed = true;

        store.mark_processed("x.com", &result).unwrap();
        store.save_progress(1).unwrap();

        assert!(store.is_processed("x.com"));
        assert_eq!(store.start_index(), 1);
    }
}
