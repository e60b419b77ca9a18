//! Oneiro Interpret — formatting of LLM interpretation text and the
//! request boundary toward the interpretation service.
//!
//! The formatter strips markdown decoration through an ordered transform
//! pipeline, then re-segments the cleaned text into titled sections using
//! deliberately permissive heading heuristics with a load-bearing
//! demotion fallback. Prompt builders reproduce the interpretation
//! service's request payloads; transport and retry live with the caller.

pub mod markdown;
pub mod prompts;
pub mod sections;

pub use prompts::Prompt;
pub use sections::{format, Section};
