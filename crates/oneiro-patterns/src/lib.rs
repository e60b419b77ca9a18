//! Oneiro Patterns — cross-dream batch analysis.
//!
//! Pure computations over the stored history: topic frequency over the
//! simple extractor, mood distribution and trend, pairwise similarity,
//! weekday histogram, journal statistics, and the per-day mood series
//! behind the trend chart. The long-term insight text itself comes from
//! the hosted service; this crate only prepares its prompt.

pub mod analysis;
pub mod prompts;
pub mod stats;
pub mod trend;

pub use analysis::{analyze, MoodDistribution, MoodTrend, PatternReport, MIN_RECORDS};
pub use stats::{journal_stats, JournalStats};
pub use trend::{mood_series, TrendPoint, MAX_SERIES_DAYS};
