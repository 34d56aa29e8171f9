//! Free-text result classification
//!
//! The agent reports its outcome as prose. The default strategy checks the
//! lowercased text for fixed keyword sets; the trait keeps the policy
//! swappable so a structured result contract can replace it without
//! touching the driver.

use crate::agent::client::RunOutcome;
use crate::core::ProcessingResult;

/// Keywords hinting that the agent located a form
const FORM_KEYWORDS: &[&str] = &["form found", "newsletter", "subscribe", "contact", "email"];

/// Keywords hinting that a submission went through
const SUCCESS_KEYWORDS: &[&str] = &[
    "success",
    "submitted",
    "thank you",
    "confirmation",
    "registered",
    "subscribed",
    "sent",
];

/// Strategy for turning an agent outcome into a structured result
pub trait ResultClassifier: Send + Sync {
    /// Classify one outcome for the given source URL
    fn classify(&self, url: &str, outcome: &RunOutcome) -> ProcessingResult;
}

/// Default strategy: keyword containment over the agent's prose
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ResultClassifier for KeywordClassifier {
    fn classify(&self, url: &str, outcome: &RunOutcome) -> ProcessingResult {
        let mut result = ProcessingResult::new(url);

        if !outcome.complete {
            result.error_message = Some("Task did not complete within timeout".to_string());
            return result;
        }

        let text = outcome.result.to_lowercase();

        if FORM_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            result.form_found = true;
        }

        if SUCCESS_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            result.submission_confirmed = true;
            result.success = true;
        } else if text.contains("no form found") {
            // Determining that no form exists is itself a success
            result.success = true;
            result.error_message = Some("No newsletter form found on page".to_string());
        } else {
            result.error_message = Some("Form found but submission unclear".to_string());
        }

        result
    }
}
