use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;
use super::constants::{LLM_API_KEY_ENV, SEARCH_API_KEY_ENV};

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string(LLM_API_KEY_ENV)? {
        builder = builder.with_llm(|llm| llm.api_key = api_key);
    }

    if let Some(api_key) = env_string(SEARCH_API_KEY_ENV)? {
        builder = builder.with_search(|search| search.api_key = api_key);
    }

    if let Some(base_url) = env_string("EDUGENIE_LLM_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url);
    }

    if let Some(base_url) = env_string("EDUGENIE_SEARCH_BASE_URL")? {
        builder = builder.with_search(|search| search.base_url = base_url);
    }

    if let Some(timeout) = env_u64("EDUGENIE_TIMEOUT_SECS")? {
        builder = builder
            .with_llm(|llm| llm.timeout_secs = timeout)
            .with_search(|search| search.timeout_secs = timeout);
    }

    if let Some(model) = env_string("EDUGENIE_MODEL")? {
        builder = builder.with_models(|models| models.model = model);
    }

    if let Some(ttl) = env_u64("EDUGENIE_CACHE_TTL_SECS")? {
        builder = builder.with_search(|search| search.cache_ttl_secs = ttl);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
