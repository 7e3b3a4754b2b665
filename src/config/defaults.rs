use super::constants::*;
use super::types::{LlmSettings, ModelSettings, SearchSettings};

pub fn default_user_agent() -> String {
    format!("edugenie/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            stop: None,
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            search_depth: DEFAULT_SEARCH_DEPTH.to_string(),
            max_results: DEFAULT_RESULTS_PER_PLATFORM,
            courtesy_delay_ms: DEFAULT_COURTESY_DELAY_MS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}
