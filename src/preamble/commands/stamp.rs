//! Stamp entries with their creation time, idempotently.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PreambleError, Result};
use crate::frontmatter::{self, Field, PatchOutcome};
use crate::model::{ContentKind, DATETIME_FORMAT};
use crate::store::ContentStore;

/// Walk a collection and make sure every entry carries a `date` field.
///
/// Faults are isolated per entry: a malformed block or an IO error is
/// reported and the batch moves on.
pub fn run<S: ContentStore>(store: &mut S, kind: ContentKind) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for name in store.list(kind)? {
        match stamp_entry(store, kind, &name) {
            Ok(Some(date)) => {
                result.entries.push(name.clone());
                result.details.push((name, date));
            }
            Ok(None) => {
                result.add_message(CmdMessage::info(format!(
                    "{}: date field already present, skipped",
                    name
                )));
            }
            Err(PreambleError::MalformedFrontMatter) => {
                result.add_message(CmdMessage::warning(format!(
                    "{}: front matter never closed, skipped",
                    name
                )));
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", name, e)));
            }
        }
    }

    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("Every entry already has a date field."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Stamped {} entries.",
            result.entries.len()
        )));
    }
    Ok(result)
}

/// Returns the stamped date, or `None` when the entry already had one.
fn stamp_entry<S: ContentStore>(
    store: &mut S,
    kind: ContentKind,
    name: &str,
) -> Result<Option<String>> {
    let text = store.read(kind, name)?;
    let date = store
        .created_at(kind, name)?
        .format(DATETIME_FORMAT)
        .to_string();
    match frontmatter::ensure_field(&text, &Field::string("date", &date))? {
        PatchOutcome::Updated(patched) => {
            store.write(kind, name, &patched)?;
            Ok(Some(date))
        }
        PatchOutcome::Unchanged => Ok(None),
    }
}
