//! Re-segmentation of cleaned interpretation text into titled sections.
//!
//! Two permissive numeral-prefixed heading heuristics mark candidate
//! heading lines; a demotion fallback then rejects candidates whose
//! extracted title is over-long or carries none of the section keywords.
//! The numeral patterns false-positive on ordinary numbered sentences, so
//! the fallback is load-bearing: a demoted candidate still breaks the
//! current section but its line becomes body text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::markdown;

/// Substrings that identify a genuine section title in interpretation
/// output.
pub const SECTION_KEYWORDS: [&str; 6] = ["角度", "解读", "分析", "视角", "心理学", "玄学"];

/// Maximum character count for an extracted title.
const MAX_TITLE_CHARS: usize = 40;
/// Maximum character count for a bare (keyword-free) short heading line.
const MAX_BARE_HEADING_CHARS: usize = 30;

/// One display section: `title` is present only when a heading-like line
/// was detected and survived the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

/// CJK or Arabic numeral run with an optional separator.
static NUMERAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9一二三四五六七八九十]+\s*[.、．]?\s*").expect("static pattern"));

/// Same prefix, separator required — the bare-heading heuristic needs it
/// to avoid swallowing every sentence that opens with a number.
static NUMERAL_SEP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9一二三四五六七八九十]+\s*[.、．]\s*").expect("static pattern"));

/// Leading bullet or ordered-list marker on a body line.
static LINE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+]|\d+\.)\s+").expect("static pattern"));

/// Split an interpretation blob into ordered sections.
///
/// Empty input yields an empty sequence; input with no heading-like lines
/// yields exactly one untitled section holding the cleaned text.
pub fn format(text: &str) -> Vec<Section> {
    let cleaned = markdown::strip(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for raw_line in cleaned.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            if let Some(section) = current.as_mut() {
                if !section.content.is_empty() {
                    section.content.push_str("\n\n");
                }
            }
            continue;
        }

        if is_heading_like(line) {
            flush(&mut sections, &mut current);
            let title = extract_title(line);
            if title.chars().count() > MAX_TITLE_CHARS
                || !SECTION_KEYWORDS.iter().any(|k| title.contains(k))
            {
                // Demoted candidate: section break happened, line is body.
                append_body(&mut current, line);
            } else {
                current = Some(Section {
                    title: Some(title),
                    content: String::new(),
                });
            }
        } else {
            let body = LINE_MARKER.replace(line, "");
            append_body(&mut current, body.trim());
        }
    }

    flush(&mut sections, &mut current);

    if sections.is_empty() {
        sections.push(Section {
            title: None,
            content: cleaned.clone(),
        });
    }

    for section in &mut sections {
        section.content = normalize(&section.content);
    }
    sections
}

fn is_heading_like(line: &str) -> bool {
    let Some(prefix) = NUMERAL_PREFIX.find(line) else {
        return false;
    };
    let rest = &line[prefix.end()..];
    if SECTION_KEYWORDS.iter().any(|k| rest.contains(k)) {
        return true;
    }
    if let Some(prefix) = NUMERAL_SEP_PREFIX.find(line) {
        return line[prefix.end()..].trim().chars().count() < MAX_BARE_HEADING_CHARS;
    }
    false
}

/// Strip the leading numeral/separator and any bullet or emphasis
/// markers from a heading line.
fn extract_title(line: &str) -> String {
    let stripped = NUMERAL_PREFIX.replace(line, "");
    stripped
        .trim()
        .trim_matches(|c| matches!(c, '*' | '-' | '+' | '#' | '`'))
        .trim()
        .to_string()
}

fn append_body(current: &mut Option<Section>, line: &str) {
    match current.as_mut() {
        Some(section) => {
            if !section.content.is_empty() && !section.content.ends_with("\n\n") {
                section.content.push_str("\n\n");
            }
            section.content.push_str(line);
        }
        None => {
            *current = Some(Section {
                title: None,
                content: line.to_string(),
            });
        }
    }
}

/// Push the current section if it carries any content.
fn flush(sections: &mut Vec<Section>, current: &mut Option<Section>) {
    if let Some(section) = current.take() {
        if !section.content.trim().is_empty() {
            sections.push(section);
        }
    }
}

/// Collapse 3+ consecutive newlines to exactly two and trim.
fn normalize(content: &str) -> String {
    static RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("static pattern"));
    RUNS.replace_all(content, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(format("").is_empty());
        assert!(format("   \n  ").is_empty());
    }

    #[test]
    fn test_plain_text_single_untitled_section() {
        let sections = format("梦见飞翔通常象征自由。");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[0].content, "梦见飞翔通常象征自由。");
    }

    #[test]
    fn test_round_trip_without_headings() {
        let text = "第一段内容。\n\n第二段内容。";
        let sections = format(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "第一段内容。\n\n第二段内容。");
    }

    #[test]
    fn test_titled_sections_from_numbered_headings() {
        let text = "一、玄学角度解读\n飞翔预示好运。\n二、心理学角度\n反映对自由的渴望。";
        let sections = format(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.as_deref(), Some("玄学角度解读"));
        assert_eq!(sections[0].content, "飞翔预示好运。");
        assert_eq!(sections[1].title.as_deref(), Some("心理学角度"));
        assert_eq!(sections[1].content, "反映对自由的渴望。");
    }

    #[test]
    fn test_markdown_decoration_is_stripped() {
        let text = "## 1、**玄学角度**\n梦境预示转机。";
        let sections = format(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title.as_deref(), Some("玄学角度"));
        assert_eq!(sections[0].content, "梦境预示转机。");
    }

    #[test]
    fn test_short_numbered_line_without_keyword_is_demoted() {
        let text = "我昨晚做了一个梦。\n1、然后我醒了\n又睡着了。";
        let sections = format(text);
        // The candidate still breaks the section but becomes body text.
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, None);
        assert!(sections[1].content.starts_with("1、然后我醒了"));
        assert!(sections[1].content.contains("又睡着了。"));
    }

    #[test]
    fn test_overlong_title_is_demoted() {
        let filler = "这".repeat(45);
        let text = format!("一、{filler}角度\n正文。");
        let sections = format(&text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
    }

    #[test]
    fn test_blank_lines_become_paragraph_breaks() {
        let text = "一、玄学解读\n第一段。\n\n\n\n第二段。";
        let sections = format(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "第一段。\n\n第二段。");
    }

    #[test]
    fn test_bullet_body_lines_lose_their_markers() {
        let text = "一、心理学分析\n- 第一点\n- 第二点";
        let sections = format(text);
        assert_eq!(sections[0].content, "第一点\n\n第二点");
    }

    #[test]
    fn test_titled_section_without_body_is_dropped() {
        let sections = format("一、玄学解读");
        // Only the whole-text fallback remains.
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[0].content, "一、玄学解读");
    }
}
