//! Retrofit front matter onto existing blog posts.
//!
//! Processing a post is split into a read-only [`plan`] step (title, date,
//! slug, stripped body) and an [`apply`] step that writes the block and
//! renames the file. The split lets the CLI prompt between the two without
//! any terminal I/O leaking into this layer.

use chrono::{DateTime, Local};
use std::path::Path;

use crate::chat::ChatClient;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PreambleError, Result};
use crate::frontmatter::{self, Detection, Field, ListStyle};
use crate::generate::{self, SlugStrategy};
use crate::markdown;
use crate::model::{ContentKind, DATE_FORMAT};
use crate::store::ContentStore;

/// Everything derived from the file itself, before any user input.
#[derive(Debug, Clone)]
pub struct BlogPlan {
    pub name: String,
    pub title: String,
    /// Creation date, already formatted.
    pub date: String,
    /// Body with the title heading removed.
    pub body: String,
    pub new_name: String,
    pub strategy: SlugStrategy,
}

/// User- or generator-supplied metadata for one post.
#[derive(Debug, Clone)]
pub struct BlogMeta {
    pub tags: Vec<String>,
    pub summary: String,
    pub weather: Option<String>,
    pub rating: Option<i64>,
    pub draft: bool,
}

/// Select the entries that still need front matter. Entries that already
/// have a block, or whose block never closes, are reported and left alone.
pub fn pending<S: ContentStore>(store: &S, kind: ContentKind) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for name in store.list(kind)? {
        let text = match store.read(kind, &name) {
            Ok(text) => text,
            Err(e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", name, e)));
                continue;
            }
        };
        match frontmatter::detect(&text) {
            Detection::Present(_) => {
                result.add_message(CmdMessage::info(format!(
                    "{}: front matter already present, skipped",
                    name
                )));
            }
            Detection::Malformed => {
                result.add_message(CmdMessage::warning(format!(
                    "{}: front matter never closed, skipped",
                    name
                )));
            }
            Detection::Absent => result.entries.push(name),
        }
    }
    Ok(result)
}

/// Derive title, date, body and target filename for one pending post.
pub fn plan<S: ContentStore>(
    store: &S,
    client: Option<&ChatClient>,
    name: &str,
    now: DateTime<Local>,
) -> Result<BlogPlan> {
    let text = store.read(ContentKind::Blog, name)?;
    match frontmatter::detect(&text) {
        Detection::Absent => {}
        Detection::Malformed => return Err(PreambleError::MalformedFrontMatter),
        Detection::Present(_) => {
            return Err(PreambleError::Api(format!(
                "{} already carries front matter",
                name
            )));
        }
    }

    let title = markdown::extract_title(&text).unwrap_or_else(|| file_stem(name));
    let date = store
        .created_at(ContentKind::Blog, name)?
        .format(DATE_FORMAT)
        .to_string();
    let body = markdown::strip_leading_title(&text);
    let (slug, strategy) = generate::title_slug(client, &title, now);

    Ok(BlogPlan {
        name: name.to_string(),
        title,
        date,
        body,
        new_name: format!("{}.md", slug),
        strategy,
    })
}

/// Write the synthesized block and move the file to its slug name.
///
/// A name collision degrades to an in-place update under the old name; it
/// is a warning, not a failure.
pub fn apply<S: ContentStore>(
    store: &mut S,
    plan: &BlogPlan,
    meta: &BlogMeta,
) -> Result<CmdResult> {
    let mut fields = vec![
        Field::string("title", &plan.title),
        Field::raw("date", &plan.date),
        Field::string("summary", &meta.summary),
        Field::list("tags", meta.tags.clone(), ListStyle::Bracketed),
    ];
    if let Some(weather) = &meta.weather {
        fields.push(Field::string("weather", weather));
    }
    if let Some(rating) = meta.rating {
        fields.push(Field::int("rating", rating.clamp(1, 5)));
    }
    fields.push(Field::boolean("draft", meta.draft));

    let mut body = plan.body.clone();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    let text = frontmatter::synthesize(&body, &fields);

    let mut result = CmdResult::default();
    store.write(ContentKind::Blog, &plan.name, &text)?;

    if plan.new_name == plan.name {
        result.add_message(CmdMessage::success(format!("Updated {}", plan.name)));
        result.entries.push(plan.name.clone());
    } else if store.exists(ContentKind::Blog, &plan.new_name) {
        result.add_message(CmdMessage::warning(format!(
            "{} already exists, updated {} in place",
            plan.new_name, plan.name
        )));
        result.entries.push(plan.name.clone());
    } else {
        store.rename(ContentKind::Blog, &plan.name, &plan.new_name)?;
        result.add_message(CmdMessage::success(format!(
            "Updated {} -> {}",
            plan.name, plan.new_name
        )));
        result.entries.push(plan.new_name.clone());
    }

    if let Some(final_name) = result.entries.first() {
        result.details.push((plan.name.clone(), final_name.clone()));
        result
            .paths
            .push(store.entry_path(ContentKind::Blog, final_name));
    }
    Ok(result)
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 4, 5, 6, 7).unwrap()
    }

    fn store_with(name: &str, text: &str) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.insert(
            ContentKind::Blog,
            name,
            text,
            Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        );
        store
    }

    fn basic_meta() -> BlogMeta {
        BlogMeta {
            tags: vec!["笔记".to_string()],
            summary: "学习".to_string(),
            weather: Some("晴".to_string()),
            rating: Some(3),
            draft: false,
        }
    }

    #[test]
    fn pending_selects_only_bare_entries() {
        let mut store = store_with("bare.md", "# 学习笔记\n\n正文");
        store.insert(
            ContentKind::Blog,
            "done.md",
            "---\ntitle: \"x\"\n---\nbody",
            fixed_now(),
        );
        store.insert(
            ContentKind::Blog,
            "broken.md",
            "---\nnever closed",
            fixed_now(),
        );

        let result = pending(&store, ContentKind::Blog).unwrap();
        assert_eq!(result.entries, vec!["bare.md"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("already present")));
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("never closed")));
    }

    #[test]
    fn plan_reads_title_date_and_slug() {
        let store = store_with("draft.md", "# 学习笔记\n\n正文内容");
        let plan = plan(&store, None, "draft.md", fixed_now()).unwrap();
        assert_eq!(plan.title, "学习笔记");
        assert_eq!(plan.date, "2024-01-15");
        assert_eq!(plan.body, "正文内容");
        assert_eq!(plan.new_name, "learning-notes.md");
        assert_eq!(plan.strategy, SlugStrategy::KeywordTable);
    }

    #[test]
    fn plan_falls_back_to_the_file_stem() {
        let store = store_with("my-post.md", "no heading here\n");
        let plan = plan(&store, None, "my-post.md", fixed_now()).unwrap();
        assert_eq!(plan.title, "my-post");
        assert_eq!(plan.body, "no heading here");
    }

    #[test]
    fn apply_writes_block_and_renames() {
        let mut store = store_with("draft.md", "# 学习笔记\n\n正文内容");
        let plan = plan(&store, None, "draft.md", fixed_now()).unwrap();
        let result = apply(&mut store, &plan, &basic_meta()).unwrap();

        assert_eq!(result.entries, vec!["learning-notes.md"]);
        assert!(!store.exists(ContentKind::Blog, "draft.md"));
        let text = store.read(ContentKind::Blog, "learning-notes.md").unwrap();
        assert!(text.starts_with("---\ntitle: \"学习笔记\"\ndate: 2024-01-15\n"));
        assert!(text.contains("summary: \"学习\"\n"));
        assert!(text.contains("tags: [\"笔记\"]\n"));
        assert!(text.contains("weather: \"晴\"\n"));
        assert!(text.contains("rating: 3\n"));
        assert!(text.contains("draft: false\n"));
        assert!(text.ends_with("---\n\n正文内容\n"));
    }

    #[test]
    fn apply_degrades_to_in_place_update_on_collision() {
        let mut store = store_with("draft.md", "# 学习笔记\n\n正文内容");
        store.insert(
            ContentKind::Blog,
            "learning-notes.md",
            "occupied",
            fixed_now(),
        );

        let plan = plan(&store, None, "draft.md", fixed_now()).unwrap();
        let result = apply(&mut store, &plan, &basic_meta()).unwrap();

        assert_eq!(result.entries, vec!["draft.md"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("already exists")));
        // The occupant is untouched, the old file got the block.
        assert_eq!(
            store.read(ContentKind::Blog, "learning-notes.md").unwrap(),
            "occupied"
        );
        assert!(store
            .read(ContentKind::Blog, "draft.md")
            .unwrap()
            .starts_with("---\n"));
    }

    #[test]
    fn apply_omits_weather_and_rating_when_unset() {
        let mut store = store_with("draft.md", "# 学习笔记\n\n正文");
        let plan = plan(&store, None, "draft.md", fixed_now()).unwrap();
        let meta = BlogMeta {
            weather: None,
            rating: None,
            ..basic_meta()
        };
        apply(&mut store, &plan, &meta).unwrap();
        let text = store.read(ContentKind::Blog, "learning-notes.md").unwrap();
        assert!(!text.contains("weather:"));
        assert!(!text.contains("rating:"));
    }

    #[test]
    fn apply_clamps_the_rating() {
        let mut store = store_with("draft.md", "# 学习笔记\n\n正文");
        let plan = plan(&store, None, "draft.md", fixed_now()).unwrap();
        let meta = BlogMeta {
            rating: Some(9),
            ..basic_meta()
        };
        apply(&mut store, &plan, &meta).unwrap();
        let text = store.read(ContentKind::Blog, "learning-notes.md").unwrap();
        assert!(text.contains("rating: 5\n"));
    }

    #[test]
    fn plan_rejects_an_entry_with_a_block() {
        let store = store_with("done.md", "---\ntitle: \"x\"\n---\nbody");
        assert!(plan(&store, None, "done.md", fixed_now()).is_err());
    }
}
