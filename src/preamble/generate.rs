//! Slug, tag and summary generation.
//!
//! Each value is produced by an explicit ordered list of strategies: the
//! configured model endpoint first, then a deterministic rule table, then
//! (for slugs) a timestamped name. The strategy that won is reported back so
//! the CLI can say where a filename came from. Every strategy is a plain
//! function and testable on its own; a model failure never surfaces to the
//! user, it just hands over to the next rule.

use chrono::{DateTime, Local};

use crate::chat::ChatClient;
use crate::slug;

const TRANSLATE_SYSTEM_PROMPT: &str =
    "你是一个专业的翻译助手，请将中文标题翻译成简洁的英文标题，只返回翻译结果，不要有任何解释或标点符号。";
const TAGS_SYSTEM_PROMPT: &str =
    "你是一个专业的内容分析师，请根据文章内容生成最多3个相关的标签。标签应该简洁、专业，用逗号分隔。只返回标签，不要有任何解释。";
const SUMMARY_SYSTEM_PROMPT: &str =
    "请用中文为文章内容生成一个不超过30字的简洁摘要。只返回摘要内容，不要有任何解释。";

/// Chinese keywords mapped to English slug words, scanned in order.
const KEYWORD_SLUGS: &[(&str, &str)] = &[
    ("训练", "training"),
    ("学习", "learning"),
    ("深度", "deep"),
    ("强化", "reinforcement"),
    ("小结", "summary"),
    ("总结", "summary"),
    ("笔记", "notes"),
    ("思考", "thoughts"),
    ("实践", "practice"),
    ("教程", "tutorial"),
    ("指南", "guide"),
    ("入门", "beginner"),
    ("高级", "advanced"),
    ("基础", "basic"),
    ("原理", "principles"),
];

/// Keywords promoted to tags when they appear in the title or body.
const TAG_KEYWORDS: &[&str] = &[
    "教程", "笔记", "总结", "实践", "思考", "学习", "项目", "工具", "技术",
];

const DEFAULT_TAG: &str = "笔记";
const DEFAULT_SUMMARY: &str = "一篇技术笔记";

const MAX_TAGS: usize = 3;
const MAX_SUMMARY_CHARS: usize = 30;
const MAX_BODY_CHARS: usize = 500;

/// Which strategy produced a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugStrategy {
    Model,
    KeywordTable,
    Timestamp,
}

impl SlugStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            SlugStrategy::Model => "translated",
            SlugStrategy::KeywordTable => "keyword table",
            SlugStrategy::Timestamp => "timestamp",
        }
    }
}

/// Filename slug for a title: model translation, then the keyword table,
/// then a timestamped fallback.
pub fn title_slug(
    client: Option<&ChatClient>,
    title: &str,
    now: DateTime<Local>,
) -> (String, SlugStrategy) {
    if let Some(client) = client {
        if let Some(slug) = model_slug(client, title) {
            return (slug, SlugStrategy::Model);
        }
    }
    if let Some(slug) = keyword_slug(title) {
        return (slug, SlugStrategy::KeywordTable);
    }
    (slug::timestamp_slug("post", now), SlugStrategy::Timestamp)
}

fn model_slug(client: &ChatClient, title: &str) -> Option<String> {
    let user = format!("将以下中文标题翻译成英文：{}", title);
    let translated = client.complete(TRANSLATE_SYSTEM_PROMPT, &user, 50).ok()?;
    let slug = slug::sanitize(&translated);
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

/// Slug from the static keyword table; `None` when no keyword matches.
pub fn keyword_slug(title: &str) -> Option<String> {
    let words: Vec<&str> = KEYWORD_SLUGS
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .map(|(_, word)| *word)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join("-"))
    }
}

/// Tags for an entry: model first, keyword scan as fallback.
pub fn tags(client: Option<&ChatClient>, title: &str, body: &str) -> Vec<String> {
    if let Some(client) = client {
        if let Ok(raw) = client.complete(TAGS_SYSTEM_PROMPT, &content_prompt(title, body), 50) {
            let parsed = parse_tag_list(&raw);
            if !parsed.is_empty() {
                return parsed;
            }
        }
    }
    fallback_tags(title, body)
}

/// Summary for an entry: model first, a stripped-down title as fallback.
pub fn summary(client: Option<&ChatClient>, title: &str, body: &str) -> String {
    if let Some(client) = client {
        if let Ok(raw) = client.complete(SUMMARY_SYSTEM_PROMPT, &content_prompt(title, body), 60) {
            if !raw.is_empty() {
                return clip_summary(&raw);
            }
        }
    }
    fallback_summary(title)
}

fn content_prompt(title: &str, body: &str) -> String {
    let excerpt: String = body.chars().take(MAX_BODY_CHARS).collect();
    format!("标题：{}\n内容：{}...", title, excerpt)
}

pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .take(MAX_TAGS)
        .collect()
}

/// Keyword scan over title and body, capped at three, never empty.
pub fn fallback_tags(title: &str, body: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for keyword in TAG_KEYWORDS {
        if title.contains(keyword) || body.contains(keyword) {
            tags.push((*keyword).to_string());
            if tags.len() >= MAX_TAGS {
                break;
            }
        }
    }
    if tags.is_empty() {
        tags.push(DEFAULT_TAG.to_string());
    }
    tags
}

/// The title with its filler words removed, capped at thirty characters.
pub fn fallback_summary(title: &str) -> String {
    let stripped = title
        .replace("训练", "")
        .replace("小结", "")
        .replace("总结", "");
    let capped: String = stripped.chars().take(MAX_SUMMARY_CHARS).collect();
    if capped.is_empty() {
        DEFAULT_SUMMARY.to_string()
    } else {
        capped
    }
}

/// Model summaries are clipped to thirty characters plus an ellipsis.
pub fn clip_summary(summary: &str) -> String {
    if summary.chars().count() > MAX_SUMMARY_CHARS {
        let capped: String = summary.chars().take(MAX_SUMMARY_CHARS).collect();
        format!("{}...", capped)
    } else {
        summary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn keyword_slug_joins_matches_in_table_order() {
        assert_eq!(
            keyword_slug("深度学习训练小结"),
            Some("training-learning-deep-summary".to_string())
        );
        assert_eq!(keyword_slug("学习笔记"), Some("learning-notes".to_string()));
        assert_eq!(keyword_slug("随便写写"), None);
    }

    #[test]
    fn title_slug_without_client_uses_table_then_timestamp() {
        let (slug, strategy) = title_slug(None, "学习笔记", fixed_now());
        assert_eq!(slug, "learning-notes");
        assert_eq!(strategy, SlugStrategy::KeywordTable);

        let (slug, strategy) = title_slug(None, "随便写写", fixed_now());
        assert_eq!(slug, "post-20240304050607");
        assert_eq!(strategy, SlugStrategy::Timestamp);
    }

    #[test]
    fn fallback_tags_scans_title_and_body() {
        assert_eq!(fallback_tags("学习笔记", ""), vec!["笔记", "学习"]);
        assert_eq!(fallback_tags("", "这是一个项目的工具和技术"), vec!["项目", "工具", "技术"]);
        assert_eq!(fallback_tags("无关标题", "无关内容"), vec!["笔记"]);
    }

    #[test]
    fn fallback_tags_never_exceeds_three() {
        let tags = fallback_tags("教程笔记总结实践", "思考学习");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags, vec!["教程", "笔记", "总结"]);
    }

    #[test]
    fn fallback_summary_strips_filler_words() {
        assert_eq!(fallback_summary("深度学习训练小结"), "深度学习");
        assert_eq!(fallback_summary("训练小结"), "一篇技术笔记");
    }

    #[test]
    fn fallback_summary_caps_at_thirty_chars() {
        let long = "很".repeat(40);
        assert_eq!(fallback_summary(&long).chars().count(), 30);
    }

    #[test]
    fn clip_summary_adds_ellipsis_only_when_needed() {
        assert_eq!(clip_summary("短摘要"), "短摘要");
        let long = "长".repeat(35);
        let clipped = clip_summary(&long);
        assert!(clipped.ends_with("..."));
        assert_eq!(clipped.chars().count(), 33);
    }

    #[test]
    fn parse_tag_list_trims_and_caps() {
        assert_eq!(
            parse_tag_list(" rust , cli,, tooling , extra"),
            vec!["rust", "cli", "tooling"]
        );
        assert!(parse_tag_list(" , ,").is_empty());
    }
}
