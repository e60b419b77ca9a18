//! Static lexicon tables for keyword extraction.
//!
//! These are true constants — curated lists of function words, weak span
//! boundaries, and common-word whitelists — loaded once per process. The
//! filter they feed is a precision-over-recall heuristic, not a real
//! segmenter; tests pin exact behaviour against these tables.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Closed-class grammatical words carrying no topical meaning: particles,
/// prepositions, conjunctions, modal particles, pronouns, adverbs, and
/// bare numerals.
pub static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Particles
        "的", "地", "得", "了", "着", "过",
        // Prepositions
        "在", "从", "向", "往", "朝", "到", "于", "对", "给", "为", "被", "让",
        "使", "由", "把", "跟", "和", "与", "同",
        // Conjunctions
        "或", "但", "而", "且", "以及", "因为", "所以", "如果", "虽然",
        // Modal particles
        "吗", "呢", "吧", "啊", "呀", "啦",
        // Pronouns
        "我", "你", "他", "她", "它", "这", "那", "哪",
        // Adverbs
        "很", "非常", "也", "还", "就", "都", "只", "才", "刚", "已", "曾",
        "将", "要", "能", "会", "可", "该", "应", "再", "又",
        // Numerals and quantity words
        "一", "二", "三", "几", "多", "少",
    ]
    .into_iter()
    .collect()
});

/// Characters that usually close a grammatical fragment rather than a
/// content word (aspect and locative markers, perception verbs).
pub static WEAK_ENDINGS: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        '的', '了', '着', '到', '在', '中', '里', '上', '下', '来', '去',
        '见', '看', '听', '说', '想', '感', '觉',
    ]
    .into_iter()
    .collect()
});

/// Characters that usually open a grammatical fragment when leading a span
/// (pronouns, prepositions, aspect markers).
pub static WEAK_STARTS: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        '见', '己', '自', '的', '在', '到', '我', '你', '他', '她',
        '了', '着', '过', '从', '向', '往', '朝', '于', '对', '给',
    ]
    .into_iter()
    .collect()
});

/// Common meaningful two-character words (whitelist, takes priority over
/// the weak-boundary rejections). Single-character entries never match a
/// two-character window; kept as-is from the curated list.
pub static COMMON_WORDS_2: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Nature
        "天空", "大地", "海洋", "森林", "山峰", "河流", "湖泊", "星星", "月亮", "太阳",
        // Animals
        "鸟", "鱼", "猫", "狗", "龙", "虎", "蛇", "马", "牛", "羊",
        // Body
        "眼睛", "手指", "头发", "心脏", "血液",
        // Actions
        "飞翔", "游泳", "跑步", "跳跃", "行走", "奔跑", "坠落", "上升", "下降",
        // Emotions
        "快乐", "悲伤", "恐惧", "惊讶", "愤怒", "平静", "紧张", "放松",
        // Times
        "白天", "夜晚", "清晨", "黄昏", "春天", "夏天", "秋天", "冬天",
        // Places
        "房间", "学校", "公园", "街道", "城市", "乡村", "海边", "山顶",
        // Objects
        "书本", "花朵", "树木", "建筑", "车辆", "衣服", "食物",
    ]
    .into_iter()
    .collect()
});

/// Common meaningful three-character words.
pub static COMMON_WORDS_3: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["原始森林", "天空中", "大海边", "小河边", "山顶上", "房间里"]
        .into_iter()
        .collect()
});

/// Genuinely meaningful combinations that would otherwise be rejected by
/// the weak-start and adjacent-function-word rules.
pub const MEANINGFUL_EXCEPTIONS: [&str; 4] = ["自己", "现在", "以后", "以前"];

/// Verb+particle combinations that look meaningful but are not noun-like
/// topics. Rejected even when a weak-ending whitelist lookup would pass.
pub const VERB_PARTICLE_REJECTS: [&str; 4] = ["找到", "看到", "听到", "感到"];

/// Punctuation stripped before extraction (standard variant).
pub static PUNCTUATION: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        '，', '。', '！', '？', '、', '；', '：', '“', '”', '‘', '’',
        '（', '）', '【', '】', '《', '》', '〈', '〉', '『', '』', '「', '」',
    ]
    .into_iter()
    .collect()
});

/// Punctuation stripped by the simple variant (a slightly smaller set).
pub static SIMPLE_PUNCTUATION: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        '，', '。', '！', '？', '、', '；', '：', '“', '”', '‘', '’',
        '（', '）', '【', '】', '《', '》', '〈', '〉',
    ]
    .into_iter()
    .collect()
});

/// Single-character stoplist for the simple variant.
pub static SIMPLE_STOPLIST: Lazy<HashSet<char>> =
    Lazy::new(|| ['的', '了', '我', '你', '在', '到'].into_iter().collect());

/// Whether `c` is a CJK ideograph in the range the extractor accepts.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Whether a single character is a function word.
pub fn is_function_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    FUNCTION_WORDS.contains(c.encode_utf8(&mut buf) as &str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_char_lookup() {
        assert!(is_function_char('的'));
        assert!(is_function_char('我'));
        assert!(!is_function_char('天'));
        // Multi-character table entries are never hit by a per-char lookup
        assert!(FUNCTION_WORDS.contains("非常"));
    }

    #[test]
    fn test_cjk_range() {
        assert!(is_cjk('梦'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('，'));
    }
}
