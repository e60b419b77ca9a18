//! Pattern report: topic frequency, mood patterns, dream relatedness,
//! and the weekday histogram.

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use oneiro_analyze::keywords;
use oneiro_core::{Error, Result};
use oneiro_interpret::prompts::truncate_chars;
use oneiro_store::DreamRecord;

/// Minimum history size for relatedness analysis.
pub const MIN_RECORDS: usize = 2;
/// Jaccard threshold above which two dreams count as related.
const SIMILARITY_THRESHOLD: f64 = 0.2;
/// Cap on reported high-frequency topics.
const MAX_TOP_TOPICS: usize = 10;
/// Cap on reported related pairs.
const MAX_RELATED: usize = 5;
/// Recent-versus-older split for the mood trend.
const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;
/// Preview length for related-dream snippets.
const PREVIEW_CHARS: usize = 50;

/// A topic with its raw occurrence count and per-record frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicFrequency {
    pub topic: String,
    pub count: usize,
    pub frequency: f64,
}

/// Record counts per mood band: positive > 60, neutral 40–60,
/// negative < 40.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl MoodDistribution {
    pub fn from_records(records: &[DreamRecord]) -> Self {
        let mut dist = Self::default();
        for record in records {
            match record.mood_value {
                v if v > 60 => dist.positive += 1,
                v if v < 40 => dist.negative += 1,
                _ => dist.neutral += 1,
            }
        }
        dist
    }
}

/// Direction of the recent mood shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Up,
    Down,
    Stable,
}

/// Snippet of one side of a related pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamPreview {
    pub id: String,
    pub preview: String,
    pub mood: String,
}

/// Two dreams whose simple-topic sets overlap above the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedDreams {
    pub dream1: DreamPreview,
    pub dream2: DreamPreview,
    pub similarity: f64,
    pub reason: String,
}

/// The full local pattern report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReport {
    pub top_topics: Vec<TopicFrequency>,
    pub mood_distribution: MoodDistribution,
    pub average_mood: u8,
    pub mood_trend: MoodTrend,
    pub mood_change: u8,
    pub dreams_by_day: Vec<(String, usize)>,
    pub related_dreams: Vec<RelatedDreams>,
    pub total_dreams: usize,
}

/// Analyze the history. `now_millis` anchors the recent-window split so
/// results are reproducible in tests.
pub fn analyze(records: &[DreamRecord], now_millis: i64) -> Result<PatternReport> {
    if records.len() < MIN_RECORDS {
        return Err(Error::InsufficientHistory {
            min: MIN_RECORDS,
            got: records.len(),
        });
    }

    // Per-record topic sets drive both frequency counting and similarity.
    let record_topics: Vec<Vec<String>> = records
        .iter()
        .map(|record| keywords::extract_simple(&record.dream))
        .collect();

    let top_topics = top_topics(&record_topics, records.len());
    let mood_distribution = MoodDistribution::from_records(records);
    let average_mood = mean_mood(records);
    let (mood_trend, mood_change) = mood_shift(records, now_millis, average_mood);
    let dreams_by_day = weekday_histogram(records);
    let related_dreams = related(records, &record_topics);

    debug!(
        "Pattern analysis over {} records: {} topics, {} related pairs",
        records.len(),
        top_topics.len(),
        related_dreams.len()
    );

    Ok(PatternReport {
        top_topics,
        mood_distribution,
        average_mood,
        mood_trend,
        mood_change,
        dreams_by_day,
        related_dreams,
        total_dreams: records.len(),
    })
}

/// Per-occurrence topic counts across all records, descending, capped.
/// Ties break on the topic string for reproducibility.
fn top_topics(record_topics: &[Vec<String>], total: usize) -> Vec<TopicFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for topics in record_topics {
        for topic in topics {
            *counts.entry(topic).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(&str, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted.truncate(MAX_TOP_TOPICS);

    sorted
        .into_iter()
        .map(|(topic, count)| TopicFrequency {
            topic: topic.to_string(),
            count,
            frequency: count as f64 / total as f64,
        })
        .collect()
}

fn mean_mood(records: &[DreamRecord]) -> u8 {
    let sum: u64 = records.iter().map(|r| r.mood_value as u64).sum();
    (sum as f64 / records.len() as f64).round() as u8
}

/// Mean mood of the last seven days against everything older. A side
/// with no records falls back to the overall average, matching the
/// original behaviour of treating a missing window as no change.
fn mood_shift(records: &[DreamRecord], now_millis: i64, average: u8) -> (MoodTrend, u8) {
    let cutoff = now_millis - RECENT_WINDOW_MS;
    let mean_of = |subset: Vec<&DreamRecord>| -> f64 {
        if subset.is_empty() {
            average as f64
        } else {
            subset.iter().map(|r| r.mood_value as f64).sum::<f64>() / subset.len() as f64
        }
    };

    let recent = mean_of(records.iter().filter(|r| r.timestamp >= cutoff).collect());
    let older = mean_of(records.iter().filter(|r| r.timestamp < cutoff).collect());

    let trend = if recent > older {
        MoodTrend::Up
    } else if recent < older {
        MoodTrend::Down
    } else {
        MoodTrend::Stable
    };
    (trend, (recent - older).abs().round() as u8)
}

/// Counts per weekday, 周日 through 周六, omitting empty days.
fn weekday_histogram(records: &[DreamRecord]) -> Vec<(String, usize)> {
    const DAY_NAMES: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];
    let mut counts = [0usize; 7];
    for record in records {
        if let Some(when) = chrono::DateTime::from_timestamp_millis(record.timestamp) {
            counts[when.weekday().num_days_from_sunday() as usize] += 1;
        }
    }
    DAY_NAMES
        .iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Pairwise Jaccard similarity over simple-topic sets.
fn related(records: &[DreamRecord], record_topics: &[Vec<String>]) -> Vec<RelatedDreams> {
    let sets: Vec<HashSet<&str>> = record_topics
        .iter()
        .map(|topics| topics.iter().map(String::as_str).collect())
        .collect();

    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..sets.len() {
        for j in i + 1..sets.len() {
            let similarity = jaccard(&sets[i], &sets[j]);
            if similarity > SIMILARITY_THRESHOLD {
                // Two decimals, matching the reported percentage.
                pairs.push((i, j, (similarity * 100.0).round() / 100.0));
            }
        }
    }
    pairs.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    pairs.truncate(MAX_RELATED);

    pairs
        .into_iter()
        .map(|(i, j, similarity)| RelatedDreams {
            dream1: preview(&records[i]),
            dream2: preview(&records[j]),
            similarity,
            reason: format!("相似度{}%：主题和情绪相近", (similarity * 100.0).round() as u32),
        })
        .collect()
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union > 0 {
        intersection as f64 / union as f64
    } else {
        0.0
    }
}

fn preview(record: &DreamRecord) -> DreamPreview {
    DreamPreview {
        id: record.id.clone(),
        preview: truncate_chars(&record.dream, PREVIEW_CHARS),
        mood: record.mood.clone(),
    }
}
