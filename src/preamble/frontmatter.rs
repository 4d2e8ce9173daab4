//! # Front-Matter Patcher
//!
//! Everything in this crate that touches an entry file goes through this
//! module. It answers three questions about a document and performs two
//! mutations, all without disturbing a single byte of the body:
//!
//! - [`detect`]: does the text carry a metadata block? (`Absent`,
//!   `Malformed`, or `Present`)
//! - [`has_field`]: does a block body already mention a key?
//! - [`insert_field`]: prepend one field line inside an existing block
//! - [`synthesize`]: build a whole block in front of an untouched body
//! - [`ensure_field`]: the idempotent combination of the above, used by the
//!   date-stamping commands
//!
//! A block is recognized only when the text begins with `---` followed by a
//! line break, and a later line of three or more hyphens closes it. An
//! opening delimiter without a closing one is *malformed*, which is a
//! distinct outcome from *absent*: callers report it and leave the file
//! alone rather than guessing a boundary.
//!
//! `has_field` is a literal line scan, not a structured parse. A line inside
//! a multi-line string value that happens to start with `key:` counts as
//! present. That looseness is deliberate; it keeps the patch operations
//! byte-oriented and matches how the site generator's own tooling treats
//! these files.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PreambleError, Result};

/// Opening delimiter, always at offset 0.
pub const OPEN_DELIMITER: &str = "---";

/// Closing delimiter line: three or more hyphens surrounded by line breaks.
static END_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n-{3,}\n").unwrap());

/// List fields can be written two ways; both are understood on re-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `tags: ["a", "b"]`
    Bracketed,
    /// `tags:` followed by indented `  - a` lines
    Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON-quoted string scalar.
    Str(String),
    /// Emitted verbatim, e.g. an unquoted date.
    Raw(String),
    Int(i64),
    Bool(bool),
    List { items: Vec<String>, style: ListStyle },
}

/// One `key: value` entry of a metadata block.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Str(value.into()),
        }
    }

    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Raw(value.into()),
        }
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Int(value),
        }
    }

    pub fn boolean(key: impl Into<String>, value: bool) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Bool(value),
        }
    }

    pub fn list(key: impl Into<String>, items: Vec<String>, style: ListStyle) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::List { items, style },
        }
    }

    /// Render as block line(s), without a trailing line break.
    fn render(&self) -> String {
        match &self.value {
            FieldValue::Str(s) => format!("{}: {}", self.key, json_quote(s)),
            FieldValue::Raw(s) => format!("{}: {}", self.key, s),
            FieldValue::Int(n) => format!("{}: {}", self.key, n),
            FieldValue::Bool(b) => format!("{}: {}", self.key, b),
            FieldValue::List { items, style } => match style {
                ListStyle::Bracketed => {
                    let quoted: Vec<String> = items.iter().map(|i| json_quote(i)).collect();
                    format!("{}: [{}]", self.key, quoted.join(", "))
                }
                ListStyle::Block => {
                    let mut out = format!("{}:", self.key);
                    for item in items {
                        out.push_str("\n  - ");
                        out.push_str(item);
                    }
                    out
                }
            },
        }
    }
}

/// JSON-style string quoting: escapes quotes, backslashes and control
/// characters, leaves non-ASCII characters literal.
fn json_quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// A detected metadata block.
///
/// `body` is the raw slice between the opening `---` and `end`, the byte
/// offset where the closing delimiter match begins. The body therefore
/// starts with the line break that terminates the opening delimiter (or is
/// empty when the block is), which is exactly what [`insert_field`] needs to
/// reassemble the document byte-for-byte.
#[derive(Debug, PartialEq, Eq)]
pub struct Block<'a> {
    pub body: &'a str,
    pub end: usize,
}

impl Block<'_> {
    pub fn has_field(&self, key: &str) -> bool {
        has_field(self.body, key)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Detection<'a> {
    /// No opening delimiter at the start of the text.
    Absent,
    /// Opening delimiter present, closing delimiter missing.
    Malformed,
    Present(Block<'a>),
}

/// Outcome of an idempotent patch.
#[derive(Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    Updated(String),
    /// The field was already there; the document is untouched.
    Unchanged,
}

/// Locate the metadata block of `text`, if any.
pub fn detect(text: &str) -> Detection<'_> {
    if !text.starts_with("---\n") {
        return Detection::Absent;
    }
    // The search starts at the line break after the opening hyphens so an
    // empty block ("---\n---\n") still finds its closing delimiter.
    match END_DELIMITER.find(&text[OPEN_DELIMITER.len()..]) {
        Some(m) => {
            let end = OPEN_DELIMITER.len() + m.start();
            Detection::Present(Block {
                body: &text[OPEN_DELIMITER.len()..end],
                end,
            })
        }
        None => Detection::Malformed,
    }
}

/// Literal scan for a line whose trimmed content begins with `key:`.
pub fn has_field(block_body: &str, key: &str) -> bool {
    let prefix = format!("{}:", key);
    block_body
        .lines()
        .any(|line| line.trim_start().starts_with(prefix.as_str()))
}

/// Insert `field` as the first line of an existing block.
///
/// `block` must come from [`detect`] on the same `text`. Every byte outside
/// the inserted line is preserved.
pub fn insert_field(text: &str, block: &Block<'_>, field: &Field) -> String {
    let rendered = field.render();
    let mut out = String::with_capacity(text.len() + rendered.len() + 1);
    out.push_str(OPEN_DELIMITER);
    out.push('\n');
    out.push_str(&rendered);
    out.push_str(block.body);
    out.push_str(&text[block.end..]);
    out
}

/// Build a complete block in front of `body`, which is carried over
/// unchanged.
pub fn synthesize(body: &str, fields: &[Field]) -> String {
    let mut out = String::from("---\n");
    for field in fields {
        out.push_str(&field.render());
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out
}

/// The idempotent patch: make sure `text` carries `field`.
///
/// - no block: a new block holding just `field` is synthesized
/// - block without the key: the field is inserted as the first line
/// - block with the key: [`PatchOutcome::Unchanged`]
/// - unterminated block: an error, the caller reports and moves on
pub fn ensure_field(text: &str, field: &Field) -> Result<PatchOutcome> {
    match detect(text) {
        Detection::Absent => Ok(PatchOutcome::Updated(synthesize(
            text,
            std::slice::from_ref(field),
        ))),
        Detection::Malformed => Err(PreambleError::MalformedFrontMatter),
        Detection::Present(block) => {
            if block.has_field(&field.key) {
                Ok(PatchOutcome::Unchanged)
            } else {
                Ok(PatchOutcome::Updated(insert_field(text, &block, field)))
            }
        }
    }
}
