//! End-to-end plan generation.

mod orchestrator;
mod outcome;

pub use orchestrator::PlanOrchestrator;
pub use outcome::{LearningPlan, PlanEvent, PlanRun};
