//! # API Facade
//!
//! The single entry point for every preamble operation, regardless of the
//! client driving it. The facade dispatches to the command layer and returns
//! structured results; it does no terminal I/O, holds no business logic, and
//! samples no clocks — "now" is always passed in by the caller.
//!
//! `PreambleApi<S: ContentStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use chrono::{DateTime, Local};

use crate::chat::ChatClient;
use crate::commands;
use crate::error::Result;
use crate::generate;
use crate::model::ContentKind;
use crate::store::ContentStore;

pub struct PreambleApi<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> PreambleApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Entries of a collection that still lack front matter.
    pub fn pending(&self, kind: ContentKind) -> Result<commands::CmdResult> {
        commands::process::pending(&self.store, kind)
    }

    /// Read-only preparation of one blog post: title, date, body, slug.
    pub fn plan_blog(
        &self,
        client: Option<&ChatClient>,
        name: &str,
        now: DateTime<Local>,
    ) -> Result<commands::process::BlogPlan> {
        commands::process::plan(&self.store, client, name, now)
    }

    /// Suggested tags and summary for a post, model-backed when available.
    pub fn suggest_meta(
        &self,
        client: Option<&ChatClient>,
        title: &str,
        body: &str,
    ) -> (Vec<String>, String) {
        (
            generate::tags(client, title, body),
            generate::summary(client, title, body),
        )
    }

    /// Write the front matter block planned for a post and rename it.
    pub fn apply_blog(
        &mut self,
        plan: &commands::process::BlogPlan,
        meta: &commands::process::BlogMeta,
    ) -> Result<commands::CmdResult> {
        commands::process::apply(&mut self.store, plan, meta)
    }

    /// Stamp every entry of a collection with its creation time.
    pub fn stamp(&mut self, kind: ContentKind) -> Result<commands::CmdResult> {
        commands::stamp::run(&mut self.store, kind)
    }

    pub fn scaffold_blog(
        &mut self,
        draft: &commands::scaffold::BlogDraft,
        now: DateTime<Local>,
    ) -> Result<commands::CmdResult> {
        commands::scaffold::blog(&mut self.store, draft, now)
    }

    pub fn scaffold_diary(
        &mut self,
        draft: &commands::scaffold::DiaryDraft,
        now: DateTime<Local>,
    ) -> Result<commands::CmdResult> {
        commands::scaffold::diary(&mut self.store, draft, now)
    }
}

pub use commands::process::{BlogMeta, BlogPlan};
pub use commands::scaffold::{BlogDraft, DiaryDraft};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
