//! Summary statistics over the journal, independent of the full
//! pattern report.

use serde::{Deserialize, Serialize};

use oneiro_store::DreamRecord;

use crate::analysis::MoodDistribution;

/// Days counted as "recent" in the summary.
const RECENT_DAYS_MS: i64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total: usize,
    pub recent_count: usize,
    pub average_mood: u8,
    pub mood_distribution: MoodDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_record_at: Option<i64>,
}

/// Summarize the history. An empty journal reports a neutral average.
pub fn journal_stats(records: &[DreamRecord], now_millis: i64) -> JournalStats {
    let cutoff = now_millis - RECENT_DAYS_MS;
    let average_mood = if records.is_empty() {
        50
    } else {
        let sum: u64 = records.iter().map(|r| r.mood_value as u64).sum();
        (sum as f64 / records.len() as f64).round() as u8
    };

    JournalStats {
        total: records.len(),
        recent_count: records.iter().filter(|r| r.timestamp >= cutoff).count(),
        average_mood,
        mood_distribution: MoodDistribution::from_records(records),
        last_record_at: records.iter().map(|r| r.timestamp).max(),
    }
}
