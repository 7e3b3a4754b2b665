use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SearchSettings;
use crate::error::SearchError;

use super::types::{SearchHit, SearchQuery};

/// Web search backend queried once per platform.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError>;
}

pub type DynSearchProvider = dyn SearchProvider;

/// Tavily search API client.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    search_depth: &'a str,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilyClient {
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build search HTTP client")?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn shared(settings: &SearchSettings) -> Result<Arc<DynSearchProvider>> {
        Ok(Arc::new(Self::new(settings)?))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!(query = %query.query, "sending search request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&TavilyRequest {
                query: &query.query,
                search_depth: &query.search_depth,
                max_results: query.max_results,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: TavilyResponse =
            serde_json::from_str(&body).map_err(|err| SearchError::Decode(err.to_string()))?;
        Ok(parsed.results)
    }
}
