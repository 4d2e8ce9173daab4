//! # Storage Layer
//!
//! The [`ContentStore`] trait abstracts the content tree so the command
//! layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store over a content root directory
//!   (`<root>/blog`, `<root>/diary`), whole-file reads and writes, atomic
//!   renames.
//! - [`memory::InMemoryStore`]: in-memory entries with settable creation
//!   times, used by the command unit tests.
//!
//! Only `.md` and `.markdown` files count as entries; everything else in a
//! collection directory is ignored. Creation times prefer the filesystem
//! birth time and fall back to the modification time where the platform
//! does not record one.

use crate::error::Result;
use crate::model::ContentKind;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface to a content collection tree.
pub trait ContentStore {
    /// Markdown entry names in a collection, sorted.
    fn list(&self, kind: ContentKind) -> Result<Vec<String>>;

    fn read(&self, kind: ContentKind, name: &str) -> Result<String>;

    /// Whole-entry overwrite; creates the collection directory if needed.
    fn write(&mut self, kind: ContentKind, name: &str, text: &str) -> Result<()>;

    /// Atomic rename within a collection.
    fn rename(&mut self, kind: ContentKind, from: &str, to: &str) -> Result<()>;

    fn exists(&self, kind: ContentKind, name: &str) -> bool;

    /// Creation time of an entry (birth time, else modification time).
    fn created_at(&self, kind: ContentKind, name: &str) -> Result<DateTime<Local>>;

    /// Where the entry lives (or would live), for display.
    fn entry_path(&self, kind: ContentKind, name: &str) -> PathBuf;
}

pub(crate) fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase()),
        Some(ref ext) if ext == "md" || ext == "markdown"
    )
}
