//! Filename slugs: lowercase, ASCII, hyphen-joined. Anything that cannot be
//! expressed that way falls back to a timestamped name.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-z0-9]+").unwrap());

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Reduce `value` to slug characters. May come out empty (e.g. for a title
/// with no ASCII-safe characters at all).
pub fn sanitize(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

pub fn timestamp_slug(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}-{}", prefix, now.format(TIMESTAMP_FORMAT))
}

/// Slug for `value`, or `<fallback_prefix>-<timestamp>` when nothing safe
/// remains.
pub fn slugify(value: &str, fallback_prefix: &str, now: DateTime<Local>) -> String {
    let base = sanitize(value);
    if base.is_empty() {
        timestamp_slug(fallback_prefix, now)
    } else {
        base
    }
}
