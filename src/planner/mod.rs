//! Turning a `PlanRequest` into week-by-week plan text.

mod parsing;
mod prompt;
mod transport;
mod types;

pub use parsing::parse_weeks;
pub use prompt::build_prompt;
pub use transport::complete;
pub use types::{
    LearningStyle, PlanRequest, PlanWeeks, Proficiency, SUPPORTED_WEEKS, WeekSection,
};
