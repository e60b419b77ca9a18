//! Dream history routes — bounded journal CRUD.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use oneiro_analyze::mood;
use oneiro_core::Error;
use oneiro_store::DreamRecord;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/history", get(list_history).post(add_record))
        .route("/history/{id}", delete(delete_record))
}

/// GET /api/history — all records, newest first.
async fn list_history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records = state.store.records();
    Json(serde_json::json!({
        "records": records,
        "total": records.len(),
        "maxHistory": state.config.max_history,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddRecordRequest {
    dream: String,
    #[serde(default)]
    interpretation: String,
    mood_icon: Option<String>,
    image_url: Option<String>,
}

/// POST /api/history — score the dream text, then store the record.
async fn add_record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddRecordRequest>,
) -> impl IntoResponse {
    if req.dream.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Dream text is required" })),
        );
    }

    let value = mood::score(&req.dream);
    let mut record = DreamRecord::new(
        &req.dream,
        mood::label(value),
        value,
        mood::color(value),
        &req.interpretation,
    );
    record.mood_icon = req.mood_icon;
    record.image_url = req.image_url;

    match state.store.push(record.clone()) {
        Ok(()) => (StatusCode::CREATED, Json(serde_json::json!({ "record": record }))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// DELETE /api/history/{id}
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": true, "id": id })),
        ),
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Record not found" })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
