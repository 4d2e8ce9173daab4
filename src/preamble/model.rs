/// Date stamp written into blog front matter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp written into diary front matter.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two collections a content root holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKind {
    Blog,
    Diary,
}

impl ContentKind {
    /// Directory name under the content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Diary => "diary",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
