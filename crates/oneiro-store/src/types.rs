//! Data types for dream records.

use serde::{Deserialize, Serialize};

/// One journal entry. Field names follow the web client's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamRecord {
    pub id: String,
    /// The user's free-text dream description.
    pub dream: String,
    /// Mood band label (积极 / 中性 / 消极) or a user-chosen label.
    pub mood: String,
    /// Mood scalar in [0, 100].
    pub mood_value: u8,
    /// Display colour for the mood band.
    pub mood_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_icon: Option<String>,
    /// Interpretation text returned by the hosted service.
    pub interpretation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl DreamRecord {
    /// Create a record with a fresh id and the current time.
    pub fn new(
        dream: impl Into<String>,
        mood: impl Into<String>,
        mood_value: u8,
        mood_color: impl Into<String>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            dream: dream.into(),
            mood: mood.into(),
            mood_value,
            mood_color: mood_color.into(),
            mood_icon: None,
            interpretation: interpretation.into(),
            image_url: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
