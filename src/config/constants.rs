pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-specdec";
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_MAX_TOKENS: u32 = 5096;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.tavily.com";
pub const DEFAULT_SEARCH_DEPTH: &str = "advanced";
pub const DEFAULT_RESULTS_PER_PLATFORM: u32 = 3;
pub const DEFAULT_COURTESY_DELAY_MS: u64 = 1000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

pub const LLM_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const SEARCH_API_KEY_ENV: &str = "TAVILY_API_KEY";
