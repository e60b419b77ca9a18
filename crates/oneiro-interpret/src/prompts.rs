//! Prompt builders for the hosted interpretation service.
//!
//! The service call itself (transport, retries, error mapping) belongs to
//! the caller; this module owns only the request text.

use serde::{Deserialize, Serialize};

/// A system/user prompt pair ready to be sent to a chat-completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

const INTERPRETATION_SYSTEM: &str = "\
你是一位专业的解梦大师，精通周公解梦和心理学。请从以下两个角度解读用户的梦境：

1. **玄学角度**（周公解梦）：根据中国传统文化和周公解梦的智慧，解读梦境的象征意义和预示。
2. **心理学角度**：从现代心理学的视角，分析梦境反映的潜意识、情绪和心理状态。

请用温暖、专业且易懂的语言进行解读。解读内容应该：
- 结构清晰，分别从玄学和心理学两个角度展开
- 语言优美，充满智慧
- 在最后给予用户温暖的鼓励和祝福
- 字数控制在300-500字之间
- 使用优雅的中文表达";

/// Build the interpretation request for one dream and its mood label.
pub fn interpretation_prompt(dream: &str, mood: &str) -> Prompt {
    Prompt {
        system: INTERPRETATION_SYSTEM.to_string(),
        user: format!("我的梦境：{dream}\n\n做梦后的心情：{mood}\n\n请帮我解读这个梦境。"),
    }
}

/// Dream text length inside the image prompt.
const IMAGE_DREAM_CHARS: usize = 500;

/// Build the image-generation request text for one dream. The image
/// service takes a single user message and no system prompt.
pub fn image_prompt(dream: &str) -> String {
    let description = truncate_chars(dream, IMAGE_DREAM_CHARS);
    format!(
        "A beautiful, artistic, dreamlike visualization of the following dream: {description}. \n    Style: surreal, ethereal, mystical, with soft lighting and dreamy atmosphere. \n    Avoid realistic photography, use artistic illustration style with flowing colors and abstract elements."
    )
}

/// Truncate to `max` characters, appending an ellipsis when text was cut.
/// Boundary-safe for multi-byte text.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut out: String = text.chars().take(max).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_prompt_embeds_inputs() {
        let prompt = interpretation_prompt("我梦见飞翔", "开心愉快");
        assert!(prompt.user.contains("我梦见飞翔"));
        assert!(prompt.user.contains("开心愉快"));
        assert!(prompt.system.contains("玄学角度"));
        assert!(prompt.system.contains("心理学角度"));
    }

    #[test]
    fn test_image_prompt_embeds_dream_and_style() {
        let prompt = image_prompt("我梦见一片原始森林");
        assert!(prompt.starts_with(
            "A beautiful, artistic, dreamlike visualization of the following dream: 我梦见一片原始森林. "
        ));
        assert!(prompt.contains("Style: surreal, ethereal, mystical"));
        assert!(prompt.ends_with("flowing colors and abstract elements."));
    }

    #[test]
    fn test_image_prompt_truncates_long_dreams() {
        let long = "梦".repeat(600);
        let prompt = image_prompt(&long);
        assert!(prompt.contains(&format!("{}...", "梦".repeat(500))));
        assert!(!prompt.contains(&"梦".repeat(501)));
    }

    #[test]
    fn test_truncate_chars_is_boundary_safe() {
        assert_eq!(truncate_chars("梦境", 10), "梦境");
        assert_eq!(truncate_chars("一二三四五", 3), "一二三...");
    }
}
