use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::RequestError;

/// Plan lengths offered to the user, in weeks.
pub const SUPPORTED_WEEKS: [u32; 7] = [1, 2, 4, 8, 12, 16, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlanWeeks(u32);

impl PlanWeeks {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PlanWeeks {
    type Error = RequestError;

    fn try_from(weeks: u32) -> Result<Self, Self::Error> {
        if SUPPORTED_WEEKS.contains(&weeks) {
            Ok(Self(weeks))
        } else {
            Err(RequestError::UnsupportedDuration(weeks))
        }
    }
}

impl fmt::Display for PlanWeeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum LearningStyle {
    Visual,
    Auditory,
    #[value(name = "reading-writing")]
    ReadingWriting,
    Mixed,
}

impl LearningStyle {
    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::ReadingWriting => "Reading/Writing",
            LearningStyle::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Proficiency {
    CompleteBeginner,
    SomeBasicKnowledge,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::CompleteBeginner => "Complete Beginner",
            Proficiency::SomeBasicKnowledge => "Some Basic Knowledge",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user submission. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    topic: String,
    weeks: PlanWeeks,
    style: LearningStyle,
    proficiency: Proficiency,
}

impl PlanRequest {
    pub fn new(
        topic: impl Into<String>,
        weeks: PlanWeeks,
        style: LearningStyle,
        proficiency: Proficiency,
    ) -> Result<Self, RequestError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(RequestError::EmptyTopic);
        }

        Ok(Self {
            topic,
            weeks,
            style,
            proficiency,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn weeks(&self) -> PlanWeeks {
        self.weeks
    }

    pub fn style(&self) -> LearningStyle {
        self.style
    }

    pub fn proficiency(&self) -> Proficiency {
        self.proficiency
    }
}

/// A `Week N:` block of the generated plan. `week_number` is the label
/// exactly as the model wrote it and is not guaranteed to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSection {
    pub week_number: String,
    pub content: String,
}
