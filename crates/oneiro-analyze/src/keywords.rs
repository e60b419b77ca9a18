//! Keyword span extraction over 2–4 character Chinese windows.
//!
//! Two variants of the same capability:
//! - [`extract`] (standard): punctuation strip, then three passes —
//!   3-character windows first (marking their positions consumed),
//!   2-character windows skipping consumed positions, 4-character windows
//!   last — each gated by the whitelists and the layered validity filter.
//!   Output is deduplicated per call, first-seen order.
//! - [`extract_simple`] (batch / pattern-analysis): every 2–4 character
//!   window, no dedup.
//!
//! Only 3-character matches consume positions; 2-character matches do
//! not. That asymmetry is intentional and pinned by tests — changing it
//! changes extraction results.

use std::collections::HashSet;

use crate::lexicon::{
    self, COMMON_WORDS_2, COMMON_WORDS_3, FUNCTION_WORDS, MEANINGFUL_EXCEPTIONS, PUNCTUATION,
    SIMPLE_PUNCTUATION, SIMPLE_STOPLIST, VERB_PARTICLE_REJECTS, WEAK_ENDINGS, WEAK_STARTS,
};

/// Named extraction variants behind one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordExtractor {
    /// Whitelist/weak-boundary layered filter, per-call dedup.
    Standard,
    /// Bare sliding window with a trivial stoplist.
    Simple,
}

impl KeywordExtractor {
    pub fn extract(&self, text: &str) -> Vec<String> {
        match self {
            KeywordExtractor::Standard => extract(text),
            KeywordExtractor::Simple => extract_simple(text),
        }
    }
}

/// Extract candidate keywords from one text (standard variant).
///
/// Returns a deduplicated list in first-seen order. Order is not
/// semantically meaningful to callers, who only count membership.
pub fn extract(text: &str) -> Vec<String> {
    let chars: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && !PUNCTUATION.contains(c))
        .collect();

    if chars.len() < 2 {
        return Vec::new();
    }

    let mut consumed = vec![false; chars.len()];
    let mut seen: HashSet<String> = HashSet::new();
    let mut words: Vec<String> = Vec::new();

    let mut emit = |word: String, seen: &mut HashSet<String>, words: &mut Vec<String>| {
        if seen.insert(word.clone()) {
            words.push(word);
        }
    };

    // Pass 1: three-character windows. Matches consume their positions so
    // overlapping shorter and longer candidates are suppressed.
    for (i, window) in chars.windows(3).enumerate() {
        let word: String = window.iter().collect();
        if COMMON_WORDS_3.contains(word.as_str()) || is_valid_keyword(&word) {
            emit(word, &mut seen, &mut words);
            consumed[i..i + 3].iter_mut().for_each(|c| *c = true);
        }
    }

    // Pass 2: two-character windows, skipping positions taken in pass 1.
    // Two-character matches do not consume.
    for (i, window) in chars.windows(2).enumerate() {
        if consumed[i] || consumed[i + 1] {
            continue;
        }
        let word: String = window.iter().collect();
        if COMMON_WORDS_2.contains(word.as_str()) || is_valid_keyword(&word) {
            emit(word, &mut seen, &mut words);
        }
    }

    // Pass 3: four-character windows as a supplement, skipping anything
    // that overlaps a pass-1 match.
    for (i, window) in chars.windows(4).enumerate() {
        if consumed[i..i + 4].iter().any(|&c| c) {
            continue;
        }
        let word: String = window.iter().collect();
        if is_valid_keyword(&word) {
            emit(word, &mut seen, &mut words);
        }
    }

    words
}

/// Extract every 2–4 character window (simple variant).
///
/// Effectively unfiltered: output keeps duplicates and window order.
pub fn extract_simple(text: &str) -> Vec<String> {
    let chars: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && !SIMPLE_PUNCTUATION.contains(c))
        .collect();

    let mut words = Vec::new();
    for len in 2..=4 {
        for window in chars.windows(len) {
            // Windows here are always 2-4 characters, so this stoplist
            // guard never fires; kept to match the curated filter list.
            if window.len() == 1 && SIMPLE_STOPLIST.contains(&window[0]) {
                continue;
            }
            words.push(window.iter().collect());
        }
    }
    words
}

/// Layered validity filter for a candidate span.
///
/// Trades recall for precision: a span survives only when it is all-CJK,
/// 2–4 characters, not opened or closed by a weak boundary character
/// (unless whitelisted), not composed entirely of function words, and
/// free of adjacent function-word pairs.
pub fn is_valid_keyword(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if !(2..=4).contains(&len) || !chars.iter().all(|&c| lexicon::is_cjk(c)) {
        return false;
    }

    // Unreachable at len >= 2; kept as a guard against future callers.
    if len == 1 && FUNCTION_WORDS.contains(word) {
        return false;
    }

    let first = chars[0];
    let last = chars[len - 1];

    if WEAK_STARTS.contains(&first) {
        // A weak leading character almost always signals a fragment;
        // only whitelisted words and fixed exceptions survive.
        if len == 2 && COMMON_WORDS_2.contains(word) {
            return true;
        }
        if len == 3 && COMMON_WORDS_3.contains(word) {
            return true;
        }
        return MEANINGFUL_EXCEPTIONS.contains(&word);
    } else if WEAK_ENDINGS.contains(&last) {
        // Verb+particle combinations are rejected outright, ahead of any
        // whitelist lookup.
        if VERB_PARTICLE_REJECTS.contains(&word) {
            return false;
        }
        if len == 2 && COMMON_WORDS_2.contains(word) {
            return true;
        }
        if len == 3 && COMMON_WORDS_3.contains(word) {
            return true;
        }
        return false;
    }

    // An all-function-word string is never a topic.
    if chars.iter().all(|&c| lexicon::is_function_char(c)) {
        return false;
    }

    // Two adjacent function words mark a fragment, unless the pair itself
    // is one of the fixed exceptions. A pair match at one position does
    // not excuse a different offending pair elsewhere in the word.
    for pair in chars.windows(2) {
        if lexicon::is_function_char(pair[0]) && lexicon::is_function_char(pair[1]) {
            let two: String = pair.iter().collect();
            if MEANINGFUL_EXCEPTIONS.contains(&two.as_str()) {
                continue;
            }
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_short_inputs() {
        assert!(extract("").is_empty());
        assert!(extract("a").is_empty());
        assert!(extract("梦").is_empty());
        assert!(extract("，。！").is_empty());
    }

    #[test]
    fn test_spans_are_cjk_and_bounded() {
        let words = extract("我梦见自己在一片原始森林里奔跑，hello world 123");
        for word in &words {
            let len = word.chars().count();
            assert!((2..=4).contains(&len), "bad length: {word}");
            assert!(word.chars().all(lexicon::is_cjk), "non-CJK span: {word}");
        }
    }

    #[test]
    fn test_whitelisted_two_char_word_survives() {
        // Both neighbouring 3-char windows start with a weak character, so
        // the positions of 天空 are free and the whitelist admits it.
        let words = extract("我的天空");
        assert!(words.contains(&"天空".to_string()));
        assert!(!words.contains(&"我的".to_string()));
    }

    #[test]
    fn test_weak_start_fragments_rejected() {
        let words = extract("我在天空中飞翔");
        assert!(!words.contains(&"我在".to_string()));
        assert!(!words.contains(&"在天".to_string()));
        // The 3-char whitelist takes the span and consumes its positions.
        assert!(words.contains(&"天空中".to_string()));
    }

    #[test]
    fn test_three_char_match_consumes_positions() {
        let words = extract("我在天空中飞翔");
        // 天空 lies entirely inside the consumed 天空中 span.
        assert!(!words.contains(&"天空".to_string()));
    }

    #[test]
    fn test_meaningful_exceptions_accepted() {
        // 自己 opens with the weak character 自 and survives only through
        // the exception list.
        assert!(is_valid_keyword("自己"));
        assert!(is_valid_keyword("以后"));
        assert!(is_valid_keyword("以前"));
    }

    #[test]
    fn test_weak_ending_branch_ignores_exception_list() {
        // 现在 ends with the weak character 在 and is not whitelisted; the
        // weak-ending branch rejects it without consulting the exception
        // list, which only the weak-start branch and the adjacent-pair
        // scan read.
        assert!(!is_valid_keyword("现在"));
    }

    #[test]
    fn test_verb_particle_combinations_rejected() {
        for word in ["找到", "看到", "听到", "感到"] {
            assert!(!is_valid_keyword(word), "{word} should be rejected");
        }
    }

    #[test]
    fn test_all_function_word_spans_rejected() {
        assert!(!is_valid_keyword("和我"));
        assert!(!is_valid_keyword("就很"));
    }

    #[test]
    fn test_adjacent_function_pair_rejected() {
        // 很 and 多 are both function words and 很多 is not an exception.
        assert!(!is_valid_keyword("很多天空"));
    }

    #[test]
    fn test_result_is_deduplicated() {
        let words = extract("森林森林森林");
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn test_simple_variant_is_exhaustive() {
        let words = extract_simple("我在天空");
        // All 2-char windows, then 3-char, then 4-char.
        assert_eq!(
            words,
            vec!["我在", "在天", "天空", "我在天", "在天空", "我在天空"]
        );
    }

    #[test]
    fn test_simple_variant_strips_punctuation() {
        assert_eq!(extract_simple("天，空"), vec!["天空"]);
        assert!(extract_simple("").is_empty());
    }

    #[test]
    fn test_extractor_interface_dispatch() {
        let text = "我的天空";
        assert_eq!(KeywordExtractor::Standard.extract(text), extract(text));
        assert_eq!(KeywordExtractor::Simple.extract(text), extract_simple(text));
    }
}
