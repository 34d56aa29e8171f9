//! Shared types used across plugilo modules

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of processing a single URL
///
/// Produced by the task runner, consumed by the batch driver for ledger
/// bookkeeping and aggregate counts, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// The URL exactly as it appeared in the source list
    pub url: String,
    /// Whether processing reached a successful determination
    pub success: bool,
    /// Explanatory message when the outcome was not a confirmed submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether the agent located a subscription or contact form
    pub form_found: bool,
    /// Whether the agent confirmed the form submission went through
    pub submission_confirmed: bool,
    /// Wall-clock time spent on this URL
    pub elapsed: Duration,
}

impl ProcessingResult {
    /// Create a fresh result for a URL, pending classification
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: false,
            error_message: None,
            form_found: false,
            submission_confirmed: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a failed result with an explanatory message
    pub fn failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::new(url)
        }
    }

    /// True when the submission was both successful and confirmed
    pub fn confirmed(&self) -> bool {
        self.success && self.submission_confirmed
    }
}

/// Aggregate counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTotals {
    /// URLs with a confirmed newsletter submission
    pub successful: usize,
    /// URLs that reached a terminal outcome this run
    pub processed: usize,
}
