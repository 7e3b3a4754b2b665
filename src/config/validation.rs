use crate::error::ConfigurationError;

use super::constants::{LLM_API_KEY_ENV, SEARCH_API_KEY_ENV};
use super::types::Config;

pub fn validate(config: &Config) -> Result<(), ConfigurationError> {
    let path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.edugenie/config".to_string());

    if config.llm.api_key.trim().is_empty() {
        return Err(ConfigurationError::MissingSecret {
            name: "LLM API key",
            env_var: LLM_API_KEY_ENV,
            path,
        });
    }

    if config.search.api_key.trim().is_empty() {
        return Err(ConfigurationError::MissingSecret {
            name: "Search API key",
            env_var: SEARCH_API_KEY_ENV,
            path,
        });
    }

    Ok(())
}
