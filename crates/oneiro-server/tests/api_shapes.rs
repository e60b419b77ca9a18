//! API shape tests — validates that response payloads match what the
//! web client expects.
//!
//! Handlers wrap library types in `json!` envelopes; these tests pin the
//! field names and types of those envelopes by serializing the same
//! library types the handlers do.

use oneiro_analyze::{mood, topics};
use oneiro_interpret as interpret;
use oneiro_patterns::{analyze, journal_stats, mood_series};
use oneiro_store::DreamRecord;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn record(dream: &str, mood_value: u8, timestamp: i64) -> DreamRecord {
    let mut record = DreamRecord::new(
        dream,
        mood::label(mood_value),
        mood_value,
        mood::color(mood_value),
        "解读内容",
    );
    record.timestamp = timestamp;
    record
}

/// The history payload carries camelCase records:
/// { id, dream, mood, moodValue, moodColor, interpretation, timestamp }
#[test]
fn test_history_record_shape() {
    let payload = serde_json::json!({
        "records": [record("梦见飞翔", 75, DAY_MS)],
        "total": 1,
        "maxHistory": 10,
    });

    assert!(payload["total"].is_number());
    assert!(payload["maxHistory"].is_number());
    let rec = &payload["records"][0];
    assert!(rec["id"].is_string());
    assert!(rec["dream"].is_string());
    assert!(rec["mood"].is_string());
    assert!(rec["moodValue"].is_number());
    assert!(rec["moodColor"].is_string());
    assert!(rec["interpretation"].is_string());
    assert!(rec["timestamp"].is_number());
    // Absent optional fields are omitted, not null.
    assert!(rec.get("moodIcon").is_none());
    assert!(rec.get("imageUrl").is_none());
}

/// Topic payload entries: { word, count }.
#[test]
fn test_topics_response_shape() {
    let dreams = ["我的天空", "我的天空", "我的森林"];
    let ranked = topics::aggregate(&dreams, 15, 2);
    let payload = serde_json::json!({
        "topics": ranked,
        "total": ranked.len(),
        "dreamsAnalyzed": dreams.len(),
    });

    assert!(payload["topics"].is_array());
    assert!(payload["dreamsAnalyzed"].is_number());
    let first = &payload["topics"][0];
    assert_eq!(first["word"], "天空");
    assert_eq!(first["count"], 2);
}

/// Mood payload: { value, label, color }.
#[test]
fn test_mood_response_shape() {
    let value = mood::score("梦里非常开心");
    let payload = serde_json::json!({
        "value": value,
        "label": mood::label(value),
        "color": mood::color(value),
    });

    assert_eq!(payload["value"], 75);
    assert_eq!(payload["label"], "积极");
    assert_eq!(payload["color"], "#22c55e");
}

/// Pattern payload is camelCase: topTopics, moodDistribution,
/// averageMood, moodTrend, moodChange, dreamsByDay, relatedDreams,
/// totalDreams.
#[test]
fn test_patterns_response_shape() {
    let now = 30 * DAY_MS;
    let records = vec![
        record("我在天空中飞翔", 80, now - DAY_MS),
        record("我在天空中漫步", 70, now - 2 * DAY_MS),
    ];
    let report = analyze(&records, now).unwrap();
    let mut payload = serde_json::json!(report);
    payload["hasPatterns"] = serde_json::json!(true);

    assert_eq!(payload["hasPatterns"], true);
    assert!(payload["topTopics"].is_array());
    assert!(payload["moodDistribution"]["positive"].is_number());
    assert!(payload["averageMood"].is_number());
    assert!(payload["moodTrend"].is_string());
    assert!(payload["moodChange"].is_number());
    assert!(payload["dreamsByDay"].is_array());
    assert!(payload["relatedDreams"].is_array());
    assert_eq!(payload["totalDreams"], 2);

    let related = &payload["relatedDreams"][0];
    assert!(related["dream1"]["preview"].is_string());
    assert!(related["similarity"].is_number());
    assert!(related["reason"].is_string());
}

/// Stats payload: { total, recentCount, averageMood, moodDistribution,
/// lastRecordAt }.
#[test]
fn test_stats_response_shape() {
    let now = 30 * DAY_MS;
    let records = vec![record("一个梦", 60, now - DAY_MS)];
    let payload = serde_json::json!(journal_stats(&records, now));

    assert_eq!(payload["total"], 1);
    assert_eq!(payload["recentCount"], 1);
    assert!(payload["averageMood"].is_number());
    assert!(payload["moodDistribution"].is_object());
    assert!(payload["lastRecordAt"].is_number());
}

/// Trend payload points: { date, mood } with null for empty days.
#[test]
fn test_trend_response_shape() {
    let now = 30 * DAY_MS;
    let records = vec![record("一个梦", 60, now - DAY_MS)];
    let points = mood_series(&records, 7, now);
    let payload = serde_json::json!({ "points": points, "days": 7 });

    assert_eq!(payload["points"].as_array().unwrap().len(), 8);
    let last = &payload["points"][6];
    assert!(last["date"].is_string());
    assert_eq!(last["mood"], 60);
    assert!(payload["points"][0]["mood"].is_null());
}

/// Formatter payload sections: { title, content } with null titles for
/// untitled sections.
#[test]
fn test_format_response_shape() {
    let text = "**1、玄学角度**\n这是玄学解读。\n\n**2、心理学角度**\n这是心理分析。";
    let sections = interpret::format(text);
    let payload = serde_json::json!({ "sections": sections, "total": sections.len() });

    assert_eq!(payload["total"], 2);
    let first = &payload["sections"][0];
    assert!(first["title"].as_str().unwrap().contains("玄学角度"));
    assert!(first["content"].as_str().unwrap().contains("玄学解读"));
}

/// Prompt payload: { prompt: { system, user } }.
#[test]
fn test_prompt_response_shape() {
    let prompt = oneiro_interpret::prompts::interpretation_prompt("梦见飞翔", "开心");
    let payload = serde_json::json!({ "prompt": prompt });

    assert!(payload["prompt"]["system"].is_string());
    assert!(payload["prompt"]["user"].is_string());
}

/// Image prompt payload: { prompt } with a bare string prompt.
#[test]
fn test_image_prompt_response_shape() {
    let prompt = oneiro_interpret::prompts::image_prompt("梦见飞翔");
    let payload = serde_json::json!({ "prompt": prompt });

    assert!(payload["prompt"].is_string());
    assert!(payload["prompt"].as_str().unwrap().contains("梦见飞翔"));
}
