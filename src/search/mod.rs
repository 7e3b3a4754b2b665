//! Course discovery across online-learning platforms.

mod cache;
mod client;
mod clock;
mod provider;
mod types;

pub use cache::{CourseCache, SessionSearchCache};
pub use client::CourseSearchClient;
pub use provider::TavilyClient;
pub use types::{CourseResult, Platform};

#[cfg(test)]
pub use cache::cache_key;
#[cfg(test)]
pub use clock::ManualClock;
#[cfg(test)]
pub use provider::SearchProvider;
#[cfg(test)]
pub use types::{NO_DESCRIPTION, RATED_MARKER, SearchHit, SearchQuery, UNRATED, rating_for};

#[cfg(test)]
mod tests;
