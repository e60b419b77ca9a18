//! Analysis routes — topic cloud, mood scoring, patterns, stats, trend.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use oneiro_analyze::{mood, topics};
use oneiro_core::Error;
use oneiro_patterns::{analyze, journal_stats, mood_series, MAX_SERIES_DAYS};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/topics", get(get_topics))
        .route("/mood", post(score_mood))
        .route("/patterns", get(get_patterns))
        .route("/stats", get(get_stats))
        .route("/trend", get(get_trend))
}

/// GET /api/status — health and journal size.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "oneiro",
        "totalDreams": state.store.records().len(),
    }))
}

#[derive(Deserialize)]
struct TopicsQuery {
    max_topics: Option<usize>,
    min_count: Option<usize>,
}

/// GET /api/topics — aggregated topic cloud over the stored history.
async fn get_topics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopicsQuery>,
) -> Json<serde_json::Value> {
    let records = state.store.records();
    let dreams: Vec<&str> = records.iter().map(|r| r.dream.as_str()).collect();

    let max_topics = params.max_topics.unwrap_or(topics::DEFAULT_MAX_TOPICS);
    let min_count = params.min_count.unwrap_or(topics::DEFAULT_MIN_COUNT);
    let ranked = topics::aggregate(&dreams, max_topics, min_count);

    Json(serde_json::json!({
        "topics": ranked,
        "total": ranked.len(),
        "dreamsAnalyzed": records.len(),
    }))
}

#[derive(Deserialize)]
struct MoodRequest {
    text: String,
}

/// POST /api/mood — score arbitrary text.
async fn score_mood(Json(req): Json<MoodRequest>) -> Json<serde_json::Value> {
    let value = mood::score(&req.text);
    Json(serde_json::json!({
        "value": value,
        "label": mood::label(value),
        "color": mood::color(value),
    }))
}

/// GET /api/patterns — local pattern report over the stored history.
///
/// Too little history is not an error to the client: it gets a
/// keep-journaling payload instead, matching the original app.
async fn get_patterns(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records = state.store.records();
    let now = chrono::Utc::now().timestamp_millis();

    match analyze(&records, now) {
        Ok(report) => {
            let mut value = serde_json::json!(report);
            value["hasPatterns"] = serde_json::json!(true);
            Json(value)
        }
        Err(Error::InsufficientHistory { min, got }) => Json(serde_json::json!({
            "hasPatterns": false,
            "message": format!("至少记录{min}个梦境后才能生成模式分析，继续记录吧"),
            "totalDreams": got,
        })),
        Err(e) => Json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// GET /api/stats — journal summary statistics.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records = state.store.records();
    let now = chrono::Utc::now().timestamp_millis();
    Json(serde_json::json!(journal_stats(&records, now)))
}

#[derive(Deserialize)]
struct TrendQuery {
    days: Option<u32>,
}

/// GET /api/trend — per-day mood series for the trend chart. The
/// client-supplied window is capped at [`MAX_SERIES_DAYS`].
async fn get_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendQuery>,
) -> Json<serde_json::Value> {
    let days = params.days.unwrap_or(30).min(MAX_SERIES_DAYS);
    let records = state.store.records();
    let now = chrono::Utc::now().timestamp_millis();
    let points = mood_series(&records, days, now);
    Json(serde_json::json!({
        "points": points,
        "days": days,
    }))
}
