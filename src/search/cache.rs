//! Two-layer memo of course search results.
//!
//! The outer layer holds entries for a fixed TTL measured on the injected
//! [`Clock`]. The inner session layer never expires on its own and is
//! consulted first, so a topic searched once in a session keeps being served
//! from memory even after its outer entry has gone stale. Only
//! [`CourseCache::end_session`] clears it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::trace;

use super::clock::{Clock, SystemClock};
use super::types::CourseResult;

const KEY_PREFIX: &str = "search_";

pub fn cache_key(topic: &str) -> String {
    format!("{KEY_PREFIX}{}", topic.to_lowercase())
}

/// Course result cache the orchestrator depends on.
pub trait CourseCache: Send + Sync {
    fn get(&self, topic: &str) -> Option<Vec<CourseResult>>;

    fn put(&self, topic: &str, courses: Vec<CourseResult>);

    /// Drops stale outer entries. Returns how many were removed.
    fn expire(&self) -> usize;

    /// Forgets everything held by the session layer.
    fn end_session(&self);
}

#[derive(Debug, Clone)]
struct TimedEntry {
    courses: Vec<CourseResult>,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Layers {
    timed: HashMap<String, TimedEntry>,
    session: HashMap<String, Vec<CourseResult>>,
}

pub struct SessionSearchCache {
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
    layers: Mutex<Layers>,
}

impl SessionSearchCache {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: std::time::Duration, clock: Arc<dyn Clock>) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            ttl,
            clock,
            layers: Mutex::new(Layers::default()),
        }
    }

    fn layers(&self) -> MutexGuard<'_, Layers> {
        self.layers.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl CourseCache for SessionSearchCache {
    fn get(&self, topic: &str) -> Option<Vec<CourseResult>> {
        let key = cache_key(topic);
        let layers = self.layers();

        if let Some(courses) = layers.session.get(&key) {
            trace!(%key, "session cache hit");
            return Some(courses.clone());
        }

        let entry = layers.timed.get(&key)?;
        if self.clock.now() < entry.expires_at {
            trace!(%key, "timed cache hit");
            Some(entry.courses.clone())
        } else {
            trace!(%key, "timed cache entry stale");
            None
        }
    }

    fn put(&self, topic: &str, courses: Vec<CourseResult>) {
        let key = cache_key(topic);
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut layers = self.layers();
        layers.timed.insert(
            key.clone(),
            TimedEntry {
                courses: courses.clone(),
                expires_at,
            },
        );
        layers.session.insert(key, courses);
    }

    fn expire(&self) -> usize {
        let now = self.clock.now();
        let mut layers = self.layers();
        let before = layers.timed.len();
        layers.timed.retain(|_, entry| now < entry.expires_at);
        before - layers.timed.len()
    }

    fn end_session(&self) {
        self.layers().session.clear();
    }
}
