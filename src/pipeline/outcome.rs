use serde::Serialize;

use crate::planner::WeekSection;
use crate::search::{CourseResult, Platform};

/// Assembled output of one generation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPlan {
    pub topic: String,
    pub weeks: Vec<WeekSection>,
    pub courses: Vec<CourseResult>,
}

impl LearningPlan {
    /// False when the model ignored the `Week N:` convention.
    pub fn has_structured_weeks(&self) -> bool {
        !self.weeks.is_empty()
    }

    pub fn courses_for(&self, platform: Platform) -> impl Iterator<Item = &CourseResult> {
        self.courses.iter().filter(move |c| c.platform == platform)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRun {
    pub plan: LearningPlan,
    pub events: Vec<PlanEvent>,
}

impl PlanRun {
    /// Non-fatal search problems worth showing to the user.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            PlanEvent::SearchDegraded { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}

/// Audit trail of a generation cycle, in the order things happened.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanEvent {
    PromptBuilt { chars: usize },
    CompletionReceived { chars: usize },
    WeeksParsed { count: usize },
    CacheHit { courses: usize },
    CacheMiss,
    CoursesFound { count: usize },
    SearchDegraded { platform: Platform, message: String },
}
