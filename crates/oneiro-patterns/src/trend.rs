//! Daily mood series for trend charts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use oneiro_store::DreamRecord;

/// Upper bound on the series window. `days` arrives straight from a
/// query parameter, and the series allocates one point per day.
pub const MAX_SERIES_DAYS: u32 = 365;

/// One calendar day in the series. `mood` is `None` when no record
/// falls on that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// UTC calendar date, `%Y-%m-%d`.
    pub date: String,
    pub mood: Option<u8>,
}

/// Build a daily series covering the last `days` days (capped at
/// [`MAX_SERIES_DAYS`]) up to and including the day of `now_millis`,
/// oldest first. Records on the same UTC day are averaged.
pub fn mood_series(records: &[DreamRecord], days: u32, now_millis: i64) -> Vec<TrendPoint> {
    let days = days.min(MAX_SERIES_DAYS);
    let now = DateTime::<Utc>::from_timestamp_millis(now_millis).unwrap_or_default();
    let today = now.date_naive();

    (0..=days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset as i64);
            let mut sum: u64 = 0;
            let mut count: u64 = 0;
            for record in records {
                let record_day = DateTime::<Utc>::from_timestamp_millis(record.timestamp)
                    .map(|dt| dt.date_naive());
                if record_day == Some(day) {
                    sum += record.mood_value as u64;
                    count += 1;
                }
            }
            TrendPoint {
                date: day.format("%Y-%m-%d").to_string(),
                mood: (count > 0).then(|| (sum as f64 / count as f64).round() as u8),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn record(mood_value: u8, timestamp: i64) -> DreamRecord {
        let mut record = DreamRecord::new("一个梦", "中性", mood_value, "#6b7280", "");
        record.timestamp = timestamp;
        record
    }

    #[test]
    fn test_series_length_and_order() {
        let points = mood_series(&[], 7, 10 * DAY_MS);
        assert_eq!(points.len(), 8);
        // Oldest first: 1970-01-04 through 1970-01-11.
        assert_eq!(points[0].date, "1970-01-04");
        assert_eq!(points[7].date, "1970-01-11");
        assert!(points.iter().all(|p| p.mood.is_none()));
    }

    #[test]
    fn test_window_is_capped() {
        let points = mood_series(&[], u32::MAX, 10 * DAY_MS);
        assert_eq!(points.len(), MAX_SERIES_DAYS as usize + 1);
    }

    #[test]
    fn test_same_day_records_are_averaged() {
        // Both records land on 1970-01-10.
        let records = vec![
            record(80, 9 * DAY_MS + 1000),
            record(61, 9 * DAY_MS + 2000),
            record(30, 8 * DAY_MS + 1000),
        ];
        let points = mood_series(&records, 2, 9 * DAY_MS + 5000);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], TrendPoint { date: "1970-01-08".into(), mood: None });
        assert_eq!(points[1], TrendPoint { date: "1970-01-09".into(), mood: Some(30) });
        // (80 + 61) / 2 = 70.5 → 71.
        assert_eq!(points[2], TrendPoint { date: "1970-01-10".into(), mood: Some(71) });
    }
}
