//! Path utilities for output naming

use std::path::{Path, PathBuf};

/// Container extensions accepted as-is for trimmed output names
pub const KNOWN_CONTAINER_EXTENSIONS: &[&str] = &[".mp4", ".mkv", ".avi", ".mov"];

/// Extension of `path` including the leading dot, or an empty string
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Sibling of `source` named `<stem><suffix><ext>`
pub fn sibling_with_suffix(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}{}{}", stem, suffix, dotted_extension(source));

    match source.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// True when `name` ends with one of the known container extensions, ignoring case
pub fn has_known_container_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    KNOWN_CONTAINER_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}
