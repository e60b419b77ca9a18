//! Markdown decoration stripping as an ordered pipeline of independent
//! text transforms, so each rule can be unit-tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

/// One named text → text transform.
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("static pattern"),
            replacement,
        }
    }

    /// Apply this rule alone.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// The fixed pipeline. Delimiters are removed, enclosed text is kept;
/// bold runs before italic so `**` pairs are not half-eaten by `*`.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("heading-markers", r"(?m)^#{1,6}\s*", ""),
        Rule::new("bold", r"\*\*([^*]+)\*\*", "$1"),
        Rule::new("italic", r"\*([^*]+)\*", "$1"),
        Rule::new("bold-underscore", r"__([^_]+)__", "$1"),
        Rule::new("italic-underscore", r"_([^_]+)_", "$1"),
        Rule::new("strikethrough", r"~~([^~]+)~~", "$1"),
        Rule::new("inline-code", r"`([^`]+)`", "$1"),
        Rule::new("bullet-markers", r"(?m)^\s*[-*+]\s+", ""),
        Rule::new("ordered-markers", r"(?m)^\s*\d+\.\s+", ""),
    ]
});

/// Run the whole pipeline and trim.
pub fn strip(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
        .trim()
        .to_string()
}

/// Look up a single rule by name (test helper for rule-level assertions).
pub fn rule(name: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no rule named {name}"))
}
