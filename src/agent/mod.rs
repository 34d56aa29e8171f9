//! Task runner adapter for the external browser-automation agent
//!
//! The agent is an opaque collaborator: it consumes an environment
//! configuration plus a natural-language task prompt and returns a
//! completion flag with a free-text result. This module translates a
//! target URL into such a call and the returned prose into a structured
//! [`crate::core::ProcessingResult`].

pub mod classify;
pub mod client;
pub mod prompt;
pub mod runner;

pub use classify::{KeywordClassifier, ResultClassifier};
pub use client::{AgentClient, RunOutcome, TaskAgent};
pub use runner::TaskRunner;
