//! Topic aggregation across a corpus of entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::keywords;

/// Default cap on returned topics.
pub const DEFAULT_MAX_TOPICS: usize = 15;
/// Default minimum number of entries a word must appear in.
pub const DEFAULT_MIN_COUNT: usize = 2;

/// A ranked topic: `count` is the number of input texts containing at
/// least one extracted occurrence of `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub word: String,
    pub count: usize,
}

/// Aggregate keyword frequencies over `texts`.
///
/// Runs the standard extractor per text (its output is already deduped
/// per text, so each text contributes at most one count per word),
/// filters by `min_count`, sorts by count descending, then ascending word
/// length, then first-seen order — the fixed tiebreak that keeps results
/// reproducible — and truncates to `max_topics`.
pub fn aggregate<S: AsRef<str>>(texts: &[S], max_topics: usize, min_count: usize) -> Vec<TopicCount> {
    if texts.is_empty() || max_topics == 0 {
        return Vec::new();
    }

    // word -> (count, first-seen rank)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_rank = 0usize;

    for text in texts {
        for word in keywords::extract(text.as_ref()) {
            let entry = counts.entry(word).or_insert_with(|| {
                let rank = next_rank;
                next_rank += 1;
                (0, rank)
            });
            entry.0 += 1;
        }
    }

    let mut topics: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|&(_, (count, _))| count >= min_count)
        .map(|(word, (count, rank))| (word, count, rank))
        .collect();

    topics.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.chars().count().cmp(&b.0.chars().count()))
            .then_with(|| a.2.cmp(&b.2))
    });
    topics.truncate(max_topics);

    tracing::debug!(
        "Aggregated {} topics from {} texts (min_count={})",
        topics.len(),
        texts.len(),
        min_count
    );

    topics
        .into_iter()
        .map(|(word, count, _)| TopicCount { word, count })
        .collect()
}

/// [`aggregate`] with the default cap and minimum.
pub fn aggregate_default<S: AsRef<str>>(texts: &[S]) -> Vec<TopicCount> {
    aggregate(texts, DEFAULT_MAX_TOPICS, DEFAULT_MIN_COUNT)
}
