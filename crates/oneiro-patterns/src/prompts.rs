//! Prompt builder for the hosted pattern-insight service.

use oneiro_interpret::prompts::{truncate_chars, Prompt};
use oneiro_store::DreamRecord;

use crate::analysis::{MoodTrend, PatternReport};

/// Dream text length inside the history digest.
const DIGEST_CHARS: usize = 100;

const INSIGHT_SYSTEM: &str = "\
你是一位资深的梦境分析师，擅长分析长期梦境模式和潜意识趋势。请基于用户的所有梦境记录，提供深入的长期洞察和个性化建议。

**分析重点：**
1. 识别重复出现的主题、符号和模式
2. 分析情绪变化趋势和可能的原因
3. 发现梦境之间的关联性
4. 提供个性化的自我认知建议
5. 指出值得关注的潜意识信号

**输出要求：**
- 用自然、亲切的语言，像朋友一样分享见解
- 大量使用表情符号（🌙 ✨ 💭 🔮 🧠 💡 🌟 🎭 🌈 💫）
- 字数控制在400-600字
- 结构清晰，但不要用标题，用自然过渡
- 提供具体的建议和行动方向";

fn trend_label(trend: MoodTrend) -> &'static str {
    match trend {
        MoodTrend::Up => "上升",
        MoodTrend::Down => "下降",
        MoodTrend::Stable => "稳定",
    }
}

/// Build the insight request from the raw history and its pattern report.
pub fn insight_prompt(records: &[DreamRecord], report: &PatternReport) -> Prompt {
    let digest: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "梦境{}：{}（情绪：{}）",
                i + 1,
                truncate_chars(&record.dream, DIGEST_CHARS),
                record.mood
            )
        })
        .collect();

    let topics: Vec<&str> = report
        .top_topics
        .iter()
        .take(5)
        .map(|t| t.topic.as_str())
        .collect();

    let user = format!(
        "以下是我记录的所有梦境：\n\n{}\n\n**统计数据：**\n- 总记录数：{}条\n- 平均情绪值：{}\n- 高频主题：{}\n- 情绪分布：积极{}条，中性{}条，消极{}条\n- 最近情绪趋势：{}\n\n请为我提供全面的长期梦境分析和个性化建议。",
        digest.join("\n"),
        report.total_dreams,
        report.average_mood,
        topics.join("、"),
        report.mood_distribution.positive,
        report.mood_distribution.neutral,
        report.mood_distribution.negative,
        trend_label(report.mood_trend),
    );

    Prompt {
        system: INSIGHT_SYSTEM.to_string(),
        user,
    }
}
