//! Error types shared across the plan pipeline.
//!
//! LLM failures are fatal to a generation cycle and surface through
//! [`PlanError`]. Search failures are recoverable and never appear there:
//! they travel as diagnostics next to whatever results were gathered.

use thiserror::Error;

/// Rejected user input while building a `PlanRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Unsupported plan duration of {0} weeks (expected one of 1, 2, 4, 8, 12, 16, 24)")]
    UnsupportedDuration(u32),
}

/// Missing or unusable startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{name} not found. Set {env_var} or add it to {path}")]
    MissingSecret {
        name: &'static str,
        env_var: &'static str,
        path: String,
    },
}

/// Failure talking to the chat-completion provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error calling LLM provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid LLM API key. Please check your GROQ_API_KEY configuration.")]
    Unauthorized,

    #[error("LLM rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("LLM API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}

/// Failure talking to the search provider. Always recoverable.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error calling search provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Search API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

/// Fatal outcome of a plan generation cycle.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Error creating learning plan: {0}")]
    Upstream(#[from] LlmError),
}
