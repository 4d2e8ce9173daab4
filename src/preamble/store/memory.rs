use super::{is_markdown, ContentStore};
use crate::error::{PreambleError, Result};
use crate::model::ContentKind;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing. Does NOT persist anything.
#[derive(Default)]
pub struct InMemoryStore {
    entries: BTreeMap<(ContentKind, String), Entry>,
}

struct Entry {
    text: String,
    created: DateTime<Local>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry with an explicit creation time.
    pub fn insert(
        &mut self,
        kind: ContentKind,
        name: &str,
        text: &str,
        created: DateTime<Local>,
    ) {
        self.entries.insert(
            (kind, name.to_string()),
            Entry {
                text: text.to_string(),
                created,
            },
        );
    }
}

impl ContentStore for InMemoryStore {
    fn list(&self, kind: ContentKind) -> Result<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|(k, name)| *k == kind && is_markdown(Path::new(name)))
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn read(&self, kind: ContentKind, name: &str) -> Result<String> {
        self.entries
            .get(&(kind, name.to_string()))
            .map(|entry| entry.text.clone())
            .ok_or_else(|| PreambleError::EntryNotFound(name.to_string()))
    }

    fn write(&mut self, kind: ContentKind, name: &str, text: &str) -> Result<()> {
        match self.entries.get_mut(&(kind, name.to_string())) {
            Some(entry) => entry.text = text.to_string(),
            None => self.insert(kind, name, text, std::time::UNIX_EPOCH.into()),
        }
        Ok(())
    }

    fn rename(&mut self, kind: ContentKind, from: &str, to: &str) -> Result<()> {
        let entry = self
            .entries
            .remove(&(kind, from.to_string()))
            .ok_or_else(|| PreambleError::EntryNotFound(from.to_string()))?;
        self.entries.insert((kind, to.to_string()), entry);
        Ok(())
    }

    fn exists(&self, kind: ContentKind, name: &str) -> bool {
        self.entries.contains_key(&(kind, name.to_string()))
    }

    fn created_at(&self, kind: ContentKind, name: &str) -> Result<DateTime<Local>> {
        self.entries
            .get(&(kind, name.to_string()))
            .map(|entry| entry.created)
            .ok_or_else(|| PreambleError::EntryNotFound(name.to_string()))
    }

    fn entry_path(&self, kind: ContentKind, name: &str) -> PathBuf {
        PathBuf::from(format!("mem/{}/{}", kind.dir_name(), name))
    }
}
