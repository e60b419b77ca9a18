//! Rule-based mood scoring: free text to a 0–100 scalar around a neutral
//! baseline of 50.
//!
//! Tiered keyword buckets are scanned from the highest weight down; every
//! matched occurrence adds the tier weight and is masked out of the
//! working text, so a longer keyword ("非常开心", weight 5) consumes the
//! shorter one it contains ("开心", weight 3) instead of double-counting.
//! The final shift is `(positive - negative) * 5`, clamped to [0, 100];
//! the arithmetic is all-integer, so the round-half-up convention for the
//! scalar never sees a fractional value.

/// Neutral baseline returned for empty or ambiguous input.
pub const NEUTRAL: u8 = 50;

/// Positive tiers, highest intensity first: extreme, very happy, relaxed,
/// mild positive.
const POSITIVE_TIERS: &[(i64, &[&str])] = &[
    (5, &["非常开心", "特别开心", "兴奋", "狂喜", "完美", "太棒了"]),
    (3, &["开心", "快乐", "幸福", "愉快", "喜悦", "甜蜜"]),
    (2, &["放松", "平静", "安详", "温暖", "自在"]),
    (1, &["不错", "舒服", "轻松", "美好"]),
];

/// Negative tiers: extreme fear, fear, sadness (a second weight-3
/// bucket), confusion.
const NEGATIVE_TIERS: &[(i64, &[&str])] = &[
    (5, &["非常害怕", "特别害怕", "恐怖", "惊恐", "噩梦", "绝望"]),
    (3, &["害怕", "恐惧", "紧张", "不安", "惊吓"]),
    (3, &["悲伤", "难过", "伤心", "哭泣", "痛苦", "孤独"]),
    (2, &["困惑", "迷茫", "疑惑", "焦虑", "混乱"]),
];

/// Score one text. Total over all inputs: every string maps to [0, 100].
pub fn score(text: &str) -> u8 {
    if text.trim().is_empty() {
        return NEUTRAL;
    }

    // Lower-casing is a no-op for Chinese, relevant only for Latin runs.
    let mut working = text.to_lowercase();
    let mut positive: i64 = 0;
    let mut negative: i64 = 0;

    let mut tiers: Vec<(i64, &[&str], bool)> = Vec::new();
    for &(weight, words) in POSITIVE_TIERS {
        tiers.push((weight, words, true));
    }
    for &(weight, words) in NEGATIVE_TIERS {
        tiers.push((weight, words, false));
    }
    // Stable sort keeps the bucket order within equal weights.
    tiers.sort_by(|a, b| b.0.cmp(&a.0));

    for (weight, words, is_positive) in tiers {
        for &keyword in words {
            let hits = consume(&mut working, keyword) as i64;
            if is_positive {
                positive += hits * weight;
            } else {
                negative += hits * weight;
            }
        }
    }

    let shifted = NEUTRAL as i64 + (positive - negative) * 5;
    shifted.clamp(0, 100) as u8
}

/// Count occurrences of `keyword` in `text`, masking each match with
/// spaces so byte offsets stay valid and consumed characters cannot take
/// part in a later match.
fn consume(text: &mut String, keyword: &str) -> usize {
    let mut hits = 0;
    while let Some(pos) = text.find(keyword) {
        let blank = " ".repeat(keyword.len());
        text.replace_range(pos..pos + keyword.len(), &blank);
        hits += 1;
    }
    hits
}

/// Band label used by the journal UI and the pattern digest:
/// 积极 above 60, 消极 below 40, 中性 between.
pub fn label(score: u8) -> &'static str {
    if score > 60 {
        "积极"
    } else if score < 40 {
        "消极"
    } else {
        "中性"
    }
}

/// Fixed display colour per band.
pub fn color(score: u8) -> &'static str {
    if score > 60 {
        "#22c55e"
    } else if score < 40 {
        "#ef4444"
    } else {
        "#6b7280"
    }
}
