use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use httpmock::prelude::*;
use serde_json::json;

use super::*;
use crate::config::SearchSettings;

fn settings(base_url: String) -> SearchSettings {
    SearchSettings {
        api_key: "tvly-test".to_string(),
        timeout_secs: 5,
        base_url,
        search_depth: "advanced".to_string(),
        max_results: 3,
        courtesy_delay_ms: 0,
        cache_ttl_secs: 3600,
    }
}

fn search_client(settings: &SearchSettings) -> CourseSearchClient {
    CourseSearchClient::new(TavilyClient::shared(settings).unwrap(), settings)
}

fn cache_with_clock() -> (Arc<ManualClock>, SessionSearchCache) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
    ));
    let cache = SessionSearchCache::with_clock(Duration::from_secs(3600), clock.clone());
    (clock, cache)
}

fn hit(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "url": format!("https://example.com/{}", title.len()),
        "content": format!("About {title}"),
        "score": 0.9
    })
}

fn course(title: &str, platform: Platform) -> CourseResult {
    CourseResult {
        title: format!("[{platform}] {title}"),
        url: "https://example.com".to_string(),
        description: "desc".to_string(),
        platform,
        rating: UNRATED.to_string(),
    }
}

#[test]
fn rating_heuristic_matches_title_substrings() {
    assert_eq!(rating_for("Rust Bootcamp - 5-star rating"), RATED_MARKER);
    assert_eq!(rating_for("Top course with 4.7 STARS"), RATED_MARKER);
    assert_eq!(rating_for("Complete Guide to Rust"), UNRATED);
    // Substring match, not word match.
    assert_eq!(rating_for("Superstars of Rust"), RATED_MARKER);
    assert_eq!(
        rating_for("Operating Systems in Three Easy Pieces"),
        RATED_MARKER
    );
    assert_eq!(rating_for("Kubernetes Restarts Explained"), UNRATED);
    assert_eq!(rating_for("Rated 4.9 ★★★★★"), UNRATED);
}

#[test]
fn course_from_hit_tags_platform_and_fills_description() {
    let result = CourseResult::from_hit(
        Platform::Coursera,
        SearchHit {
            title: "Machine Learning".to_string(),
            url: "https://coursera.org/ml".to_string(),
            content: None,
        },
    );

    assert_eq!(result.title, "[Coursera] Machine Learning");
    assert_eq!(result.description, NO_DESCRIPTION);
    assert_eq!(result.platform, Platform::Coursera);
    assert_eq!(result.rating, UNRATED);
}

#[test]
fn platform_queries_follow_fixed_wording() {
    assert_eq!(
        Platform::YouTube.query_for("rust"),
        "best YouTube courses for learning rust"
    );
    assert_eq!(
        Platform::ALL,
        [Platform::Udemy, Platform::Coursera, Platform::YouTube]
    );
}

#[tokio::test]
async fn search_queries_every_platform_and_caps_results() {
    let server = MockServer::start_async().await;

    let udemy_body = json!({
        "query": "best Udemy courses for learning Rust",
        "search_depth": "advanced",
        "max_results": 3
    });
    let udemy = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .header("Authorization", "Bearer tvly-test")
                .json_body_partial(udemy_body.to_string());
            then.status(200).json_body(json!({
                "results": [
                    hit("Rust Masterclass 5-star rating"),
                    hit("Learn Rust"),
                    hit("Rust in Practice"),
                    hit("One Too Many")
                ]
            }));
        })
        .await;

    let coursera = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body_partial(r#"{"query":"best Coursera courses for learning Rust"}"#);
            then.status(200).json_body(json!({
                "results": [
                    { "title": "Rust Fundamentals", "url": "https://coursera.org/rust" }
                ]
            }));
        })
        .await;

    let youtube = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body_partial(r#"{"query":"best YouTube courses for learning Rust"}"#);
            then.status(200).json_body(json!({ "results": [hit("Rust Crash Course")] }));
        })
        .await;

    let client = search_client(&settings(server.base_url()));

    let search = client.search("Rust").await;

    assert!(search.is_complete());
    assert_eq!(search.courses.len(), 5);
    assert!(search.courses.len() <= Platform::ALL.len() * 3);
    assert_eq!(
        search.courses[0].title,
        "[Udemy] Rust Masterclass 5-star rating"
    );
    assert_eq!(search.courses[0].rating, RATED_MARKER);
    assert_eq!(search.courses[1].rating, UNRATED);
    assert_eq!(search.courses[3].platform, Platform::Coursera);
    assert_eq!(search.courses[3].description, NO_DESCRIPTION);
    assert_eq!(search.courses[4].platform, Platform::YouTube);
    assert!(
        search
            .courses
            .iter()
            .all(|c| c.rating == RATED_MARKER || c.rating == UNRATED)
    );

    udemy.assert_async().await;
    coursera.assert_async().await;
    youtube.assert_async().await;
}

#[tokio::test]
async fn search_failure_keeps_partial_results_and_stops() {
    let server = MockServer::start_async().await;

    let _udemy = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body_partial(r#"{"query":"best Udemy courses for learning Go"}"#);
            then.status(200).json_body(json!({ "results": [hit("Go Basics")] }));
        })
        .await;

    let _coursera = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body_partial(r#"{"query":"best Coursera courses for learning Go"}"#);
            then.status(429).body("rate limited");
        })
        .await;

    let youtube = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body_partial(r#"{"query":"best YouTube courses for learning Go"}"#);
            then.status(200).json_body(json!({ "results": [] }));
        })
        .await;

    let client = search_client(&settings(server.base_url()));

    let search = client.search("Go").await;

    assert_eq!(search.courses.len(), 1);
    assert_eq!(search.courses[0].title, "[Udemy] Go Basics");
    let failure = search.failure.expect("coursera failure should be reported");
    assert_eq!(failure.platform, Platform::Coursera);
    assert!(matches!(
        failure.error,
        crate::error::SearchError::Api { status: 429, .. }
    ));
    youtube.assert_hits_async(0).await;
}

#[tokio::test]
async fn undecodable_search_body_is_reported() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/search");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let client = search_client(&settings(server.base_url()));

    let search = client.search("Haskell").await;

    assert!(search.courses.is_empty());
    let failure = search.failure.unwrap();
    assert_eq!(failure.platform, Platform::Udemy);
    assert!(matches!(failure.error, crate::error::SearchError::Decode(_)));
}

#[tokio::test]
async fn failed_search_waits_before_returning() {
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).path("/search");
            then.status(500).body("internal error");
        })
        .await;

    let mut settings = settings(server.base_url());
    settings.courtesy_delay_ms = 250;
    let client = search_client(&settings);

    let started = Instant::now();
    let search = client.search("Elixir").await;
    let elapsed = started.elapsed();

    assert!(
        elapsed >= Duration::from_millis(250),
        "returned after {elapsed:?}"
    );
    assert!(search.courses.is_empty());
    assert_eq!(search.failure.unwrap().platform, Platform::Udemy);
    failing.assert_hits_async(1).await;
}

#[tokio::test]
async fn successful_search_does_not_wait() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/search");
            then.status(200).json_body(json!({ "results": [] }));
        })
        .await;

    let mut settings = settings(server.base_url());
    settings.courtesy_delay_ms = 5_000;
    let client = search_client(&settings);

    let started = Instant::now();
    let search = client.search("Elixir").await;

    assert!(search.is_complete());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn cache_key_lowercases_topic() {
    assert_eq!(cache_key("Python"), "search_python");
    assert_eq!(cache_key("python"), cache_key("PYTHON"));
}

#[test]
fn cache_is_case_insensitive() {
    let cache = SessionSearchCache::new(Duration::from_secs(3600));
    let courses = vec![course("Intro", Platform::Udemy)];

    cache.put("Python", courses.clone());

    assert_eq!(cache.get("python"), Some(courses.clone()));
    assert_eq!(cache.get("PYTHON"), Some(courses));
    assert_eq!(cache.get("Rust"), None);
}

#[test]
fn session_layer_outlives_ttl() {
    let (clock, cache) = cache_with_clock();
    let courses = vec![course("Intro", Platform::YouTube)];

    cache.put("rust", courses.clone());
    clock.advance(ChronoDuration::hours(2));

    assert_eq!(cache.get("rust"), Some(courses));
}

#[test]
fn timed_layer_expires_once_session_ends() {
    let (clock, cache) = cache_with_clock();
    let courses = vec![course("Intro", Platform::Coursera)];

    cache.put("rust", courses.clone());
    cache.end_session();

    clock.advance(ChronoDuration::minutes(59));
    assert_eq!(cache.get("rust"), Some(courses));

    clock.advance(ChronoDuration::minutes(1));
    assert_eq!(cache.get("rust"), None);
}

#[test]
fn expire_purges_only_stale_entries() {
    let (clock, cache) = cache_with_clock();

    cache.put("old", vec![course("Old", Platform::Udemy)]);
    clock.advance(ChronoDuration::minutes(30));
    cache.put("new", vec![course("New", Platform::Udemy)]);
    clock.advance(ChronoDuration::minutes(31));

    assert_eq!(cache.expire(), 1);
    assert_eq!(cache.expire(), 0);

    cache.end_session();
    assert!(cache.get("old").is_none());
    assert!(cache.get("new").is_some());
}
