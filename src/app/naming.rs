//! Text transforms used to derive output names and page titles.

use crate::app::models::RenameMode;
use deunicode::deunicode;
use std::path::Path;

/// Splits on anything that is not alphanumeric.
fn separated_words(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Like `separated_words`, but also breaks `camelCase` humps apart.
fn humanized_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in separated_words(value) {
        let mut current = String::new();
        let mut prev: Option<char> = None;
        for c in chunk.chars() {
            let hump = c.is_uppercase()
                && prev.map_or(false, |p| p.is_lowercase() || p.is_numeric());
            if hump && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
            prev = Some(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `My video_file` -> `myVideoFile`
pub fn camelize_lower(value: &str) -> String {
    let camel: String = separated_words(value).map(upper_first).collect();
    lower_first(&camel)
}

/// `My Video (2)` -> `my-video-2`, `Café Crème` -> `cafe-creme`
pub fn parameterize(value: &str) -> String {
    let ascii = deunicode(value);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// `my-video-file` or `myVideoFile` -> `My Video File`
pub fn titleize(value: &str) -> String {
    humanized_words(value)
        .iter()
        .map(|w| upper_first(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl RenameMode {
    pub fn apply(&self, base_name: &str) -> String {
        let renamed = match self {
            RenameMode::CamelCase => camelize_lower(base_name),
            RenameMode::Parameterize => parameterize(base_name),
            RenameMode::Keep => return base_name.to_string(),
        };

        if renamed.is_empty() {
            log::warn!("'{}' renames to nothing; keeping the original name", base_name);
            base_name.to_string()
        } else {
            renamed
        }
    }
}

/// File name without its last extension, renamed according to `mode`.
pub fn output_base_name(path: &Path, mode: RenameMode) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    mode.apply(&stem)
}
