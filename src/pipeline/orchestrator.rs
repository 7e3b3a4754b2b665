use std::sync::Arc;

use anyhow::Result;
use tracing::{Instrument, info, info_span, warn};

use crate::client::{AIClient, DynLlmClient};
use crate::config::{Config, ModelSettings};
use crate::error::PlanError;
use crate::planner::{self, PlanRequest};
use crate::search::{
    CourseCache, CourseResult, CourseSearchClient, SessionSearchCache, TavilyClient,
};

use super::outcome::{LearningPlan, PlanEvent, PlanRun};

/// Runs the prompt -> completion -> parse -> course lookup cycle.
///
/// The cache is the only state that outlives a call; it is shared so one
/// session can issue several requests through the same orchestrator.
pub struct PlanOrchestrator {
    llm: Arc<DynLlmClient>,
    models: ModelSettings,
    search: CourseSearchClient,
    cache: Arc<dyn CourseCache>,
}

impl PlanOrchestrator {
    pub fn new(
        llm: Arc<DynLlmClient>,
        models: ModelSettings,
        search: CourseSearchClient,
        cache: Arc<dyn CourseCache>,
    ) -> Self {
        Self {
            llm,
            models,
            search,
            cache,
        }
    }

    /// Wires the HTTP clients and a fresh session cache from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let llm = AIClient::shared(&config.llm)?;
        let provider = TavilyClient::shared(&config.search)?;
        let search = CourseSearchClient::new(provider, &config.search);
        let cache = Arc::new(SessionSearchCache::new(config.search.cache_ttl()));
        Ok(Self::new(llm, config.models.clone(), search, cache))
    }

    pub fn cache(&self) -> &Arc<dyn CourseCache> {
        &self.cache
    }

    /// LLM failures abort the cycle before any search is issued. Search
    /// failures never do: they are logged as events and yield fewer courses.
    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<PlanRun, PlanError> {
        let span = info_span!("generate_plan", topic = %request.topic());
        async move {
            let mut events = Vec::new();

            let prompt = planner::build_prompt(request);
            events.push(PlanEvent::PromptBuilt {
                chars: prompt.chars().count(),
            });

            let raw = planner::complete(self.llm.as_ref(), &self.models, &prompt).await?;
            events.push(PlanEvent::CompletionReceived {
                chars: raw.chars().count(),
            });

            let weeks = planner::parse_weeks(&raw);
            events.push(PlanEvent::WeeksParsed { count: weeks.len() });
            if weeks.is_empty() {
                warn!("completion contained no week sections");
            }

            let courses = self.find_courses(request.topic(), &mut events).await;
            info!(weeks = weeks.len(), courses = courses.len(), "plan assembled");

            Ok::<_, PlanError>(PlanRun {
                plan: LearningPlan {
                    topic: request.topic().to_string(),
                    weeks,
                    courses,
                },
                events,
            })
        }
        .instrument(span)
        .await
    }

    async fn find_courses(&self, topic: &str, events: &mut Vec<PlanEvent>) -> Vec<CourseResult> {
        if let Some(courses) = self.cache.get(topic) {
            events.push(PlanEvent::CacheHit {
                courses: courses.len(),
            });
            return courses;
        }
        events.push(PlanEvent::CacheMiss);

        let search = self.search.search(topic).await;
        match search.failure {
            None => {
                events.push(PlanEvent::CoursesFound {
                    count: search.courses.len(),
                });
                self.cache.put(topic, search.courses.clone());
            }
            Some(failure) => {
                events.push(PlanEvent::SearchDegraded {
                    platform: failure.platform,
                    message: format!("Error searching for courses: {}", failure.error),
                });
            }
        }
        search.courses
    }
}
