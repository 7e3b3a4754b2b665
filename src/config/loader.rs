use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::FileConfig;
use super::validation::validate;
use super::Config;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".edugenie/config");
        Ok(path)
    }

    /// Defaults, then the config file, then environment overrides.
    /// Missing secrets are a fatal [`crate::error::ConfigurationError`].
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;

        let config = builder.build();
        validate(&config)?;
        Ok(config)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let mut builder = builder;

        if let Some(file_llm) = self.llm {
            builder = builder.with_llm(|llm| {
                if let Some(api_key) = file_llm.api_key {
                    llm.api_key = api_key;
                }
                if let Some(timeout) = file_llm.timeout_secs {
                    llm.timeout_secs = timeout;
                }
                if let Some(base_url) = file_llm.base_url {
                    llm.base_url = base_url;
                }
                if let Some(user_agent) = file_llm.user_agent {
                    llm.user_agent = user_agent;
                }
            });
        }

        if let Some(file_models) = self.models {
            builder = builder.with_models(|models| {
                if let Some(model) = file_models.model {
                    models.model = model;
                }
                if let Some(temperature) = file_models.temperature {
                    models.temperature = temperature;
                }
                if let Some(max_tokens) = file_models.max_tokens {
                    models.max_tokens = max_tokens;
                }
                if file_models.stop.is_some() {
                    models.stop = file_models.stop;
                }
            });
        }

        if let Some(file_search) = self.search {
            builder = builder.with_search(|search| {
                if let Some(api_key) = file_search.api_key {
                    search.api_key = api_key;
                }
                if let Some(timeout) = file_search.timeout_secs {
                    search.timeout_secs = timeout;
                }
                if let Some(base_url) = file_search.base_url {
                    search.base_url = base_url;
                }
                if let Some(delay) = file_search.courtesy_delay_ms {
                    search.courtesy_delay_ms = delay;
                }
                if let Some(ttl) = file_search.cache_ttl_secs {
                    search.cache_ttl_secs = ttl;
                }
            });
        }

        builder
    }
}
