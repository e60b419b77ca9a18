//! Oneiro Analyze — heuristic text analysis for dream journal entries.
//!
//! Three pure, stateless components:
//! - keyword extraction over 2–4 character Chinese spans, with a layered
//!   validity filter (standard variant) or a bare sliding window (simple
//!   variant used by batch pattern analysis),
//! - topic aggregation across a corpus of entries with frequency ranking,
//! - rule-based mood scoring mapping free text to a 0–100 scalar.

pub mod keywords;
pub mod lexicon;
pub mod mood;
pub mod topics;

pub use keywords::KeywordExtractor;
pub use topics::TopicCount;
