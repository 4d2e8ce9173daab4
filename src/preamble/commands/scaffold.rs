//! Create new entries pre-populated with front matter.

use chrono::{DateTime, Local};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PreambleError, Result};
use crate::frontmatter::{self, Field, ListStyle};
use crate::model::{ContentKind, DATETIME_FORMAT, DATE_FORMAT};
use crate::slug;
use crate::store::ContentStore;

pub const BLOG_PLACEHOLDER: &str = "在这里写正文…\n";
pub const DIARY_PLACEHOLDER: &str = "随手记一记…\n";

const DIARY_NAME_FORMAT: &str = "diary-%Y%m%d-%H%M%S";

#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub weather: String,
    pub mood: String,
    pub rating: i64,
    pub filename: Option<String>,
    pub draft: bool,
}

#[derive(Debug, Clone)]
pub struct DiaryDraft {
    pub title: Option<String>,
    pub weather: String,
    pub mood: String,
    pub rating: i64,
    pub tags: Vec<String>,
    pub filename: Option<String>,
}

/// Scaffold a blog post. An existing target file is fatal for the
/// invocation, never overwritten.
pub fn blog<S: ContentStore>(
    store: &mut S,
    draft: &BlogDraft,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    let seed = match &draft.filename {
        Some(filename) => filename.clone(),
        None => slug::slugify(&draft.title, "post", now),
    };
    let name = ensure_markdown_ext(&seed);
    if store.exists(ContentKind::Blog, &name) {
        return Err(PreambleError::EntryExists(
            store.entry_path(ContentKind::Blog, &name),
        ));
    }

    let fields = vec![
        Field::string("title", &draft.title),
        Field::raw("date", now.format(DATE_FORMAT).to_string()),
        Field::string("summary", &draft.summary),
        Field::list("tags", draft.tags.clone(), ListStyle::Bracketed),
        Field::string("weather", &draft.weather),
        Field::string("mood", &draft.mood),
        Field::int("rating", draft.rating.clamp(1, 5)),
        Field::boolean("draft", draft.draft),
    ];
    let text = frontmatter::synthesize(BLOG_PLACEHOLDER, &fields);
    store.write(ContentKind::Blog, &name, &text)?;
    Ok(created(store, ContentKind::Blog, name))
}

/// Scaffold a diary entry. The raw title doubles as the filename; tags are
/// optional and written as a block list.
pub fn diary<S: ContentStore>(
    store: &mut S,
    draft: &DiaryDraft,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    let title = draft
        .title
        .as_ref()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let seed = match &draft.filename {
        Some(filename) => filename.clone(),
        None => title
            .clone()
            .unwrap_or_else(|| now.format(DIARY_NAME_FORMAT).to_string()),
    };
    let name = ensure_markdown_ext(&seed);
    if store.exists(ContentKind::Diary, &name) {
        return Err(PreambleError::EntryExists(
            store.entry_path(ContentKind::Diary, &name),
        ));
    }

    let mut fields = vec![Field::string(
        "date",
        now.format(DATETIME_FORMAT).to_string(),
    )];
    if let Some(title) = &title {
        fields.push(Field::string("title", title));
    }
    fields.push(Field::string("mood", &draft.mood));
    fields.push(Field::int("rating", draft.rating.clamp(1, 5)));
    fields.push(Field::string("weather", &draft.weather));
    if !draft.tags.is_empty() {
        fields.push(Field::list("tags", draft.tags.clone(), ListStyle::Block));
    }
    let text = frontmatter::synthesize(DIARY_PLACEHOLDER, &fields);
    store.write(ContentKind::Diary, &name, &text)?;
    Ok(created(store, ContentKind::Diary, name))
}

fn created<S: ContentStore>(store: &S, kind: ContentKind, name: String) -> CmdResult {
    let path = store.entry_path(kind, &name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Created {}", path.display())));
    result.paths.push(path);
    result.entries.push(name);
    result
}

fn ensure_markdown_ext(name: &str) -> String {
    if name.ends_with(".md") || name.ends_with(".markdown") {
        name.to_string()
    } else {
        format!("{}.md", name)
    }
}
