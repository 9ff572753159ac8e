//! Path utilities for config-relative defaults

use std::path::Path;

/// File name of `path` without directory and without its last extension.
///
/// Returns `None` when nothing is left, e.g. for an empty path.
pub fn config_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
}

/// Directory component of `path`, `None` for a bare file name.
pub fn config_parent(path: &Path) -> Option<String> {
    path.parent()
        .map(|parent| parent.to_string_lossy().to_string())
        .filter(|parent| !parent.is_empty())
}

/// Whether `path` has the given extension, compared case-insensitively.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Last `max_chars` characters of `value`, prefixed with `...` when cut.
pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    let count = value.chars().count();
    if count <= max_chars {
        return value.to_string();
    }

    let tail: String = value.chars().skip(count - max_chars).collect();
    format!("...{}", tail)
}
