//! Batch driver for the newsletter signup run
//!
//! Single linear pass over the URL list from the resume index to the end.
//! One URL's failure is never fatal to the batch: processing errors are
//! folded into results by the runner, and bookkeeping errors are logged at
//! the loop boundary before moving on.

use tracing::{error, info};

use crate::agent::TaskRunner;
use crate::core::BatchTotals;
use crate::store::SignupStore;

/// Drives the URL sequence through the task runner and the store
pub struct BatchDriver<'a> {
    runner: &'a TaskRunner,
    store: &'a SignupStore,
    urls: &'a [String],
}

impl<'a> BatchDriver<'a> {
    /// Create a driver over a loaded URL list
    pub fn new(runner: &'a TaskRunner, store: &'a SignupStore, urls: &'a [String]) -> Self {
        Self {
            runner,
            store,
            urls,
        }
    }

    /// Run the batch from `start_index` through the end of the list.
    ///
    /// The progress marker always holds the index of the next URL to
    /// process: after completing index `i` the marker is `i + 1`, so a
    /// re-run resumes one past the last terminal outcome and never
    /// reprocesses it. URLs already in the attempted ledger are skipped.
    pub async fn run(&self, start_index: usize) -> BatchTotals {
        info!(
            start_index,
            total = self.urls.len(),
            "Starting batch processing"
        );

        let mut totals = BatchTotals::default();

        for (index, url) in self.urls.iter().enumerate().skip(start_index) {
            if self.store.is_processed(url) {
                info!(%url, "Skipping already processed URL");
                continue;
            }

            let result = self.runner.process(url, 0).await;

            if let Err(e) = self.store.mark_processed(url, &result) {
                error!(%url, error = %e, "Failed to record outcome, continuing");
                continue;
            }

            totals.processed += 1;
            if result.confirmed() {
                totals.successful += 1;
            }

            if let Err(e) = self.store.save_progress(index + 1) {
                error!(%url, error = %e, "Failed to save progress, continuing");
            }

            info!(
                position = index + 1,
                total = self.urls.len(),
                successful = totals.successful,
                "Progress"
            );
        }

        info!(
            processed = totals.processed,
            successful = totals.successful,
            "Batch complete"
        );
        totals
    }
}
