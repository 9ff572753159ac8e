// INI config adapter - Reads the loose `key = value` job file

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::RawConfig;
use crate::ports::FsPort;

/// Leading run of word characters followed by `=`.
///
/// Lines whose first non-space character is not a word character never
/// match, which is what makes `#`, `;` or `//` lines comments.
static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_]+)\s*=").expect("Failed to compile config key regex")
});

/// Parsed config plus the number of non-empty lines it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub entries: RawConfig,
    pub line_count: usize,
}

/// Non-empty lines, split on `\n`, `\r` or both
pub fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|line| !line.is_empty())
}

/// Parse config text into key/value entries.
///
/// Malformed lines are skipped without error. A later line with the same
/// key overwrites an earlier one.
pub fn parse_config(text: &str) -> RawConfig {
    let mut entries = RawConfig::new();
    for line in significant_lines(text) {
        if let Some((key, value)) = parse_line(line) {
            entries.insert(key, value);
        }
    }
    entries
}

/// Key and cleaned value of one `key = value` line
pub fn parse_line(line: &str) -> Option<(&str, String)> {
    let key = KEY_PATTERN.captures(line)?.get(1)?.as_str();
    let value = line
        .split_once('=')
        .map(|(_, rest)| strip_matching_quotes(rest.trim()))
        .unwrap_or_default();
    Some((key, value.to_string()))
}

/// Remove one pair of surrounding quotes when both ends carry the same one
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Loads job files through the filesystem port
pub struct IniConfigAdapter<'a> {
    fs: &'a dyn FsPort,
}

impl<'a> IniConfigAdapter<'a> {
    pub fn new(fs: &'a dyn FsPort) -> Self {
        Self { fs }
    }

    /// Read and parse the config at `path`
    pub fn load(&self, path: &Path) -> DomainResult<LoadedConfig> {
        let shown = path.to_string_lossy().to_string();
        if !self.fs.is_file(path) {
            return Err(DomainError::ConfigNotFound { path: shown });
        }

        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| DomainError::ConfigUnreadable {
                path: shown.clone(),
                source,
            })?;

        let line_count = significant_lines(&text).count();
        let entries = parse_config(&text);
        debug!(path = %shown, lines = line_count, keys = entries.len(), "parsed config");

        Ok(LoadedConfig {
            entries,
            line_count,
        })
    }
}
