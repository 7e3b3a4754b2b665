//! Configuration management for edugenie.
//!
//! Settings are layered from built-in defaults, the JSON file at
//! `~/.edugenie/config`, and environment variables (highest precedence).
//! Both provider API keys are required; their absence is fatal at startup.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, LlmSettings, ModelSettings, SearchSettings};
