use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::config::SearchSettings;
use crate::error::SearchError;

use super::provider::DynSearchProvider;
use super::types::{CourseResult, Platform, SearchQuery};

/// Result of one course search. A failed platform query does not make the
/// search fail; it stops the sweep and is reported in `failure`.
#[derive(Debug)]
pub struct CourseSearch {
    pub courses: Vec<CourseResult>,
    pub failure: Option<PlatformFailure>,
}

#[derive(Debug)]
pub struct PlatformFailure {
    pub platform: Platform,
    pub error: SearchError,
}

impl CourseSearch {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct CourseSearchClient {
    provider: Arc<DynSearchProvider>,
    search_depth: String,
    max_results: u32,
    courtesy_delay: Duration,
}

impl CourseSearchClient {
    pub fn new(provider: Arc<DynSearchProvider>, settings: &SearchSettings) -> Self {
        Self {
            provider,
            search_depth: settings.search_depth.clone(),
            max_results: settings.max_results,
            courtesy_delay: settings.courtesy_delay(),
        }
    }

    /// Queries each platform in turn and tags what comes back. At most
    /// `max_results` hits are kept per platform.
    #[instrument(skip(self))]
    pub async fn search(&self, topic: &str) -> CourseSearch {
        let mut courses = Vec::new();

        for platform in Platform::ALL {
            let query = SearchQuery {
                query: platform.query_for(topic),
                search_depth: self.search_depth.clone(),
                max_results: self.max_results,
            };

            match self.provider.search(&query).await {
                Ok(hits) => {
                    debug!(%platform, hits = hits.len(), "platform search finished");
                    courses.extend(
                        hits.into_iter()
                            .take(self.max_results as usize)
                            .map(|hit| CourseResult::from_hit(platform, hit)),
                    );
                }
                Err(error) => {
                    warn!(%platform, %error, "course search failed; backing off");
                    tokio::time::sleep(self.courtesy_delay).await;
                    return CourseSearch {
                        courses,
                        failure: Some(PlatformFailure { platform, error }),
                    };
                }
            }
        }

        CourseSearch {
            courses,
            failure: None,
        }
    }
}
