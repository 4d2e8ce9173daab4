//! Terminal prompting for the interactive paths. Lives on the binary side;
//! nothing below the CLI layer ever prompts.

use console::Term;
use preamble::error::Result;

/// Ask for a line of input; an empty answer takes the default when there is
/// one, otherwise the question repeats.
pub fn input(term: &Term, label: &str, default: Option<&str>) -> Result<String> {
    loop {
        match default {
            Some(d) => term.write_str(&format!("{} [{}]: ", label, d))?,
            None => term.write_str(&format!("{}: ", label))?,
        }
        let value = term.read_line()?;
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
        term.write_line("A value is required (Ctrl+C to abort).")?;
    }
}

pub fn input_allow_empty(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", label))?;
    Ok(term.read_line()?.trim().to_string())
}

/// A preset (e.g. a flag value) skips the prompt entirely.
pub fn preset_or_input(
    term: &Term,
    preset: Option<String>,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    match preset {
        Some(value) if !value.is_empty() => Ok(value),
        _ => input(term, label, default),
    }
}

pub fn confirm(term: &Term, label: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    term.write_str(&format!("{} [{}]: ", label, hint))?;
    let value = term.read_line()?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    Ok(value.eq_ignore_ascii_case("y") || value.eq_ignore_ascii_case("yes"))
}

/// Mood rating, clamped to 1-5; unparseable input falls back to 3.
pub fn rating(term: &Term, preset: Option<i64>) -> Result<i64> {
    if let Some(preset) = preset {
        return Ok(preset.clamp(1, 5));
    }
    let raw = input(term, "Mood rating (1-5)", Some("3"))?;
    Ok(raw.parse::<i64>().map(|n| n.clamp(1, 5)).unwrap_or(3))
}
