//! HTTP client for the browser-agent service
//!
//! Submits one task per call and decodes the service's completion flag and
//! free-text result. The service's internal DOM and network behavior are
//! never inspected.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::AgentServiceConfig;
use crate::core::{PlugiloError, Result};

/// Outcome of one agent task run
#[derive(Debug, Clone, Deserialize)]
pub struct RunOutcome {
    /// Whether the agent finished the task within its own budgets
    #[serde(default)]
    pub complete: bool,
    /// Free-text result produced by the agent
    #[serde(default)]
    pub result: String,
}

/// Trait for automation agents that execute a natural-language task
///
/// Enables swapping the HTTP-backed service for scripted agents in tests.
#[async_trait]
pub trait TaskAgent: Send + Sync {
    /// Run one task to completion or internal timeout
    async fn run(&self, task: &str) -> Result<RunOutcome>;

    /// Get the agent name
    fn name(&self) -> &str;
}

/// Browser-agent service client
#[derive(Clone)]
pub struct AgentClient {
    client: Client,
    base_url: String,
    environment: EnvironmentSettings,
    max_steps: u32,
    task_timeout_secs: u64,
    action_timeout_secs: u64,
    environment_timeout_secs: u64,
    save_every_step: bool,
}

/// Environment block forwarded to the agent service verbatim
#[derive(Debug, Clone, Serialize)]
struct EnvironmentSettings {
    name: &'static str,
    viewport_width: u32,
    viewport_height: u32,
    headless: bool,
    annotate_image: bool,
    screenshot_delay: f64,
    include_html: bool,
    include_poi_text: bool,
    homepage: String,
}

/// Task submission request
#[derive(Debug, Serialize)]
struct TaskRequest<'a> {
    task: &'a str,
    environment: &'a EnvironmentSettings,
    max_steps: u32,
    task_timeout: u64,
    action_timeout: u64,
    environment_timeout: u64,
    save_every_step: bool,
}

/// Task response from the service
#[derive(Debug, Deserialize)]
struct TaskResponse {
    #[serde(default)]
    complete: bool,
    #[serde(default)]
    result: String,
}

impl AgentClient {
    /// Create a client from the agent service configuration
    pub fn from_config(config: &AgentServiceConfig) -> Self {
        // The HTTP timeout sits above the task budget; the runner enforces
        // the wall-clock budget itself.
        let client = Client::builder()
            .timeout(Duration::from_secs(
                config.task_timeout_secs + config.environment_timeout_secs,
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            environment: EnvironmentSettings {
                name: "webbrowser",
                viewport_width: config.viewport_width,
                viewport_height: config.viewport_height,
                headless: config.headless,
                annotate_image: config.annotate_image,
                screenshot_delay: config.screenshot_delay_secs,
                include_html: config.include_html,
                include_poi_text: config.include_poi_text,
                homepage: config.homepage.clone(),
            },
            max_steps: config.max_steps,
            task_timeout_secs: config.task_timeout_secs,
            action_timeout_secs: config.action_timeout_secs,
            environment_timeout_secs: config.environment_timeout_secs,
            save_every_step: config.save_every_step,
        }
    }
}

#[async_trait]
impl TaskAgent for AgentClient {
    async fn run(&self, task: &str) -> Result<RunOutcome> {
        let request = TaskRequest {
            task,
            environment: &self.environment,
            max_steps: self.max_steps,
            task_timeout: self.task_timeout_secs,
            action_timeout: self.action_timeout_secs,
            environment_timeout: self.environment_timeout_secs,
            save_every_step: self.save_every_step,
        };

        let response = self
            .client
            .post(format!("{}/v1/tasks", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PlugiloError::agent(format!(
                        "Cannot connect to agent service at {}. Is it running?",
                        self.base_url
                    ))
                } else {
                    PlugiloError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlugiloError::agent(format!(
                "Agent service error ({}): {}",
                status, error_text
            )));
        }

        let task_response: TaskResponse = response
            .json()
            .await
            .map_err(|e| PlugiloError::agent(format!("Failed to parse response: {}", e)))?;

        Ok(RunOutcome {
            complete: task_response.complete,
            result: task_response.result,
        })
    }

    fn name(&self) -> &str {
        "browser-agent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = AgentServiceConfig::default();
        let client = AgentClient::from_config(&config);
        assert_eq!(client.base_url, config.base_url);
        assert_eq!(client.max_steps, 50);
        assert_eq!(client.environment.name, "webbrowser");
    }

    #[test]
    fn test_request_serialization() {
        let config = AgentServiceConfig::default();
        let client = AgentClient::from_config(&config);
        let request = TaskRequest {
            task: "Visit the URL",
            environment: &client.environment,
            max_steps: client.max_steps,
            task_timeout: client.task_timeout_secs,
            action_timeout: client.action_timeout_secs,
            environment_timeout: client.environment_timeout_secs,
            save_every_step: client.save_every_step,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"viewport_width\":1280"));
        assert!(json.contains("\"headless\":true"));
        assert!(json.contains("\"task\":\"Visit the URL\""));
    }

    #[test]
    fn test_outcome_defaults_when_fields_missing() {
        let outcome: RunOutcome = serde_json::from_str("{}").unwrap();
        assert!(!outcome.complete);
        assert!(outcome.result.is_empty());
    }
}
