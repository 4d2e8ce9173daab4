use super::{is_markdown, ContentStore};
use crate::error::{PreambleError, Result};
use crate::model::ContentKind;
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

/// File-backed store over a content root holding `blog/` and `diary/`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn kind_dir(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }
}

impl ContentStore for FileStore {
    fn list(&self, kind: ContentKind) -> Result<Vec<String>> {
        let dir = self.kind_dir(kind);
        if !dir.is_dir() {
            return Err(PreambleError::Store(format!(
                "{} directory not found: {}",
                kind,
                dir.display()
            )));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_markdown(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, kind: ContentKind, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.entry_path(kind, name))?)
    }

    fn write(&mut self, kind: ContentKind, name: &str, text: &str) -> Result<()> {
        let dir = self.kind_dir(kind);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        fs::write(dir.join(name), text)?;
        Ok(())
    }

    fn rename(&mut self, kind: ContentKind, from: &str, to: &str) -> Result<()> {
        fs::rename(self.entry_path(kind, from), self.entry_path(kind, to))?;
        Ok(())
    }

    fn exists(&self, kind: ContentKind, name: &str) -> bool {
        self.entry_path(kind, name).exists()
    }

    fn created_at(&self, kind: ContentKind, name: &str) -> Result<DateTime<Local>> {
        let metadata = fs::metadata(self.entry_path(kind, name))?;
        // Not every filesystem records a birth time.
        let stamp = metadata.created().or_else(|_| metadata.modified())?;
        Ok(stamp.into())
    }

    fn entry_path(&self, kind: ContentKind, name: &str) -> PathBuf {
        self.kind_dir(kind).join(name)
    }
}
