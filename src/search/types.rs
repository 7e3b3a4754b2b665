use std::fmt;

use serde::{Deserialize, Serialize};

/// Rating shown when a result title looks like it advertises a rating.
pub const RATED_MARKER: &str = "⭐⭐⭐⭐⭐";
pub const UNRATED: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Udemy,
    Coursera,
    YouTube,
}

impl Platform {
    /// Query order, which is also the display grouping order.
    pub const ALL: [Platform; 3] = [Platform::Udemy, Platform::Coursera, Platform::YouTube];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Udemy => "Udemy",
            Platform::Coursera => "Coursera",
            Platform::YouTube => "YouTube",
        }
    }

    pub fn query_for(self, topic: &str) -> String {
        format!("best {} courses for learning {}", self.name(), topic)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One query sent to the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub search_depth: String,
    pub max_results: u32,
}

/// A raw hit as the search provider returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub platform: Platform,
    pub rating: String,
}

impl CourseResult {
    pub fn from_hit(platform: Platform, hit: SearchHit) -> Self {
        let rating = rating_for(&hit.title);
        Self {
            title: format!("[{}] {}", platform.name(), hit.title),
            url: hit.url,
            description: hit.content.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            platform,
            rating: rating.to_string(),
        }
    }
}

/// Substring heuristic on the raw title. Matches "rating" or "stars" in any
/// case, so "Superstars of Rust" and "Operating Systems" count as rated while
/// "4.8 ★" does not.
pub fn rating_for(title: &str) -> &'static str {
    let lowered = title.to_lowercase();
    if lowered.contains("rating") || lowered.contains("stars") {
        RATED_MARKER
    } else {
        UNRATED
    }
}
