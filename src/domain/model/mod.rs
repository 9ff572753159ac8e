// Domain models - Core types and data structures

use std::collections::HashMap;

use serde::Serialize;

use crate::utils::path::tail_for_display;

/// Source media URL (required)
pub const KEY_URL: &str = "url2";
/// Output directory
pub const KEY_OUTPUT_DIR: &str = "dir2";
/// Output file name, may carry the [`TIMESTAMP_TOKEN`]
pub const KEY_OUTPUT_FILE: &str = "fnm2";
/// Seek offset
pub const KEY_START_OFFSET: &str = "pos2";
/// Extraction length
pub const KEY_DURATION: &str = "len2";

/// Keys the resolver looks at, in preview order.
pub const KNOWN_KEYS: [&str; 5] = [
    KEY_URL,
    KEY_OUTPUT_DIR,
    KEY_OUTPUT_FILE,
    KEY_START_OFFSET,
    KEY_DURATION,
];

/// Token in `fnm2` replaced by a hex millisecond timestamp
pub const TIMESTAMP_TOKEN: &str = "{TS2}";

/// Start offset used when `pos2` is empty
pub const DEFAULT_START_OFFSET: &str = "0:00:00";

/// Extension of derived output file names
pub const DERIVED_EXTENSION: &str = "mkv";

/// Number of trailing characters shown for long values in previews
pub const PREVIEW_TAIL: usize = 42;

/// Key/value pairs read from one config file.
///
/// Keys are kept exactly as written. Unknown keys are stored too; the
/// resolver simply never asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    entries: HashMap<String, String>,
}

impl RawConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Value for `key`, if the key appeared at all
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, treating an empty value the same as an absent one
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

/// Fully defaulted and validated parameters for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    pub url: String,
    pub start_offset: String,
    /// `None` extracts to the end of the stream
    pub duration: Option<String>,
    pub output_dir: String,
    pub output_file: String,
}

impl ResolvedParameters {
    /// Output directory and file name joined with `/`
    pub fn output_path(&self) -> String {
        join_output_path(&self.output_dir, &self.output_file)
    }

    /// One entry per config key, values tail-truncated for display.
    ///
    /// An absent duration shows as an empty value.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        let values = [
            (KEY_URL, self.url.as_str()),
            (KEY_OUTPUT_DIR, self.output_dir.as_str()),
            (KEY_OUTPUT_FILE, self.output_file.as_str()),
            (KEY_START_OFFSET, self.start_offset.as_str()),
            (KEY_DURATION, self.duration.as_deref().unwrap_or("")),
        ];

        values
            .iter()
            .map(|(key, value)| PreviewEntry {
                key: (*key).to_string(),
                value: tail_for_display(value, PREVIEW_TAIL),
            })
            .collect()
    }
}

/// One line of the parsed-config preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub key: String,
    pub value: String,
}

/// Join a directory and a file name the way the output path is built.
pub fn join_output_path(dir: &str, file: &str) -> String {
    format!("{}/{}", dir, file)
}
