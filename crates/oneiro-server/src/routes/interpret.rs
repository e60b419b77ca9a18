//! Interpretation routes — formatter and prompt boundary.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use oneiro_core::Error;
use oneiro_interpret::prompts::{image_prompt, interpretation_prompt};
use oneiro_patterns::{analyze, prompts::insight_prompt};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/interpretation/format", post(format_interpretation))
        .route("/interpretation/prompt", post(build_interpretation_prompt))
        .route("/image/prompt", post(build_image_prompt))
        .route("/patterns/prompt", get(build_insight_prompt))
}

#[derive(Deserialize)]
struct FormatRequest {
    text: String,
}

/// POST /api/interpretation/format — strip markdown and segment the
/// interpretation text into titled sections.
async fn format_interpretation(Json(req): Json<FormatRequest>) -> Json<serde_json::Value> {
    let sections = oneiro_interpret::format(&req.text);
    Json(serde_json::json!({
        "sections": sections,
        "total": sections.len(),
    }))
}

#[derive(Deserialize)]
struct PromptRequest {
    dream: String,
    #[serde(default)]
    mood: String,
}

/// POST /api/interpretation/prompt — request payload for the hosted
/// interpretation service. The call itself happens client-side.
async fn build_interpretation_prompt(Json(req): Json<PromptRequest>) -> Json<serde_json::Value> {
    let prompt = interpretation_prompt(&req.dream, &req.mood);
    Json(serde_json::json!({ "prompt": prompt }))
}

#[derive(Deserialize)]
struct ImagePromptRequest {
    dream: String,
}

/// POST /api/image/prompt — request text for the hosted image service.
async fn build_image_prompt(Json(req): Json<ImagePromptRequest>) -> impl IntoResponse {
    if req.dream.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Dream text is required" })),
        );
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({ "prompt": image_prompt(&req.dream) })),
    )
}

/// GET /api/patterns/prompt — request payload for the hosted insight
/// service, built from the stored history.
async fn build_insight_prompt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.store.records();
    let now = chrono::Utc::now().timestamp_millis();

    match analyze(&records, now) {
        Ok(report) => (
            StatusCode::OK,
            Json(serde_json::json!({ "prompt": insight_prompt(&records, &report) })),
        ),
        Err(Error::InsufficientHistory { min, got }) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "prompt": serde_json::Value::Null,
                "message": format!("至少记录{min}个梦境后才能生成洞察，继续记录吧"),
                "totalDreams": got,
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
