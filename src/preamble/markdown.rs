//! Title handling for raw Markdown bodies.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Text of the first level-one heading, if the document has one.
pub fn extract_title(text: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
                title.clear();
            }
            Event::Text(t) if in_heading => title.push_str(&t),
            Event::Code(t) if in_heading => title.push_str(&t),
            _ => {}
        }
    }
    None
}

/// Body with a leading `# ` heading removed, trimmed of surrounding blank
/// lines. Used when the heading has been promoted into front matter.
pub fn strip_leading_title(text: &str) -> String {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix("# ") {
        match rest.split_once('\n') {
            Some((_, body)) => body.trim().to_string(),
            None => String::new(),
        }
    } else {
        text.trim().to_string()
    }
}
