//! Gated execution of signup tasks
//!
//! Despite the async interface there is never more than one in-flight
//! agent task: a single-permit semaphore serializes every call.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::info;

use crate::agent::classify::{KeywordClassifier, ResultClassifier};
use crate::agent::client::TaskAgent;
use crate::agent::prompt::{build_task_prompt, normalize_target_url};
use crate::core::ProcessingResult;
use crate::email::derive_email;

/// Executes one signup task per URL against the external agent
pub struct TaskRunner {
    agent: Arc<dyn TaskAgent>,
    classifier: Box<dyn ResultClassifier>,
    gate: Semaphore,
    task_timeout: Duration,
    captcha_skip_threshold: u32,
}

impl TaskRunner {
    /// Create a runner with the default keyword classifier
    pub fn new(agent: Arc<dyn TaskAgent>, task_timeout: Duration, captcha_skip_threshold: u32) -> Self {
        Self {
            agent,
            classifier: Box::new(KeywordClassifier),
            gate: Semaphore::new(1),
            task_timeout,
            captcha_skip_threshold,
        }
    }

    /// Swap in a different classification strategy
    pub fn with_classifier(mut self, classifier: Box<dyn ResultClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Process a single URL.
    ///
    /// Always returns a [`ProcessingResult`]: agent errors and the
    /// wall-clock timeout are folded into the result rather than raised.
    /// Elapsed time is recorded on every path.
    pub async fn process(&self, url: &str, captcha_failures: u32) -> ProcessingResult {
        let started = Instant::now();

        let target = normalize_target_url(url);
        let task = build_task_prompt(&target, captcha_failures, self.captcha_skip_threshold);
        info!(%url, %target, email = %derive_email(url), agent = self.agent.name(), "Processing URL");

        let mut result = match self.gate.acquire().await {
            Ok(_permit) => match timeout(self.task_timeout, self.agent.run(&task)).await {
                Ok(Ok(outcome)) => self.classifier.classify(url, &outcome),
                Ok(Err(e)) => ProcessingResult::failed(url, format!("Unexpected error: {}", e)),
                Err(_) => ProcessingResult::failed(url, "Timeout during processing"),
            },
            Err(e) => ProcessingResult::failed(url, format!("Unexpected error: {}", e)),
        };

        result.elapsed = started.elapsed();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::client::RunOutcome;
    use crate::core::{PlugiloError, Result};
    use async_trait::async_trait;

    struct StaticAgent {
        complete: bool,
        text: &'static str,
    }

    #[async_trait]
    impl TaskAgent for StaticAgent {
        async fn run(&self, _task: &str) -> Result<RunOutcome> {
            Ok(RunOutcome {
                complete: self.complete,
                result: self.text.to_string(),
            })
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    struct FailingAgent;

    #[async_trait]
    impl TaskAgent for FailingAgent {
        async fn run(&self, _task: &str) -> Result<RunOutcome> {
            Err(PlugiloError::agent("connection refused"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct HangingAgent;

    #[async_trait]
    impl TaskAgent for HangingAgent {
        async fn run(&self, _task: &str) -> Result<RunOutcome> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(RunOutcome {
                complete: true,
                result: "too late".to_string(),
            })
        }

        fn name(&self) -> &str {
            "hanging"
        }
    }

    fn runner(agent: Arc<dyn TaskAgent>) -> TaskRunner {
        TaskRunner::new(agent, Duration::from_millis(100), 5)
    }

    #[tokio::test]
    async fn test_successful_submission_flow() {
        let runner = runner(Arc::new(StaticAgent {
            complete: true,
            text: "form found, subscribed successfully",
        }));

        let result = runner.process("shop1.com", 0).await;
        assert!(result.confirmed());
        assert_eq!(result.url, "shop1.com");
    }

    #[tokio::test]
    async fn test_agent_error_never_propagates() {
        let runner = runner(Arc::new(FailingAgent));

        let result = runner.process("shop1.com", 0).await;
        assert!(!result.success);
        let message = result.error_message.unwrap();
        assert!(message.starts_with("Unexpected error:"));
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_wall_clock_timeout_is_folded_into_result() {
        let runner = runner(Arc::new(HangingAgent));

        let result = runner.process("shop1.com", 0).await;
        assert!(!result.success);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Timeout during processing")
        );
    }

    #[tokio::test]
    async fn test_incomplete_run_reports_agent_timeout() {
        let runner = runner(Arc::new(StaticAgent {
            complete: false,
            text: "",
        }));

        let result = runner.process("shop1.com", 0).await;
        assert!(!result.success);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Task did not complete within timeout")
        );
    }
}
