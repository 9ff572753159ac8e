//! Display-safe rendering of command lines
//!
//! Best-effort truncation for logs and the operator preview. The command
//! that actually runs is never passed through here.
//!
//! Windows-style paths (`C:\...`) are not recognized and pass through
//! unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Characters of a URL kept after the scheme
pub const DEFAULT_URL_VISIBLE: usize = 24;
/// Trailing characters of a local path kept
pub const DEFAULT_PATH_VISIBLE: usize = 24;

/// Marker put in front of a shortened path
pub const ELLIPSIS: &str = "...";

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&url_pattern(DEFAULT_URL_VISIBLE)).expect("Failed to compile URL redaction regex")
});

static PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"/[A-Za-z0-9_]+/[A-Za-z0-9_]+/[^" ]+"#)
        .expect("Failed to compile path redaction regex")
});

/// URL scheme plus up to `visible` token characters, then the rest of the token
fn url_pattern(visible: usize) -> String {
    format!(r#"(?i)(https?://[^" ]{{0,{}}})[^" ]+"#, visible)
}

/// Shortens URLs and absolute paths inside a command line
#[derive(Debug, Clone)]
pub struct Redactor {
    url_pattern: Regex,
    path_pattern: Regex,
    path_visible: usize,
}

impl Default for Redactor {
    fn default() -> Self {
        Self {
            url_pattern: URL_PATTERN.clone(),
            path_pattern: PATH_PATTERN.clone(),
            path_visible: DEFAULT_PATH_VISIBLE,
        }
    }
}

impl Redactor {
    /// Redacted copy of `line`: URLs first, then paths
    pub fn redact(&self, line: &str) -> String {
        let line = self.url_pattern.replace_all(line, "$1");
        self.path_pattern
            .replace_all(&line, |caps: &Captures| {
                let matched = &caps[0];
                let count = matched.chars().count();
                let tail: String = matched
                    .chars()
                    .skip(count.saturating_sub(self.path_visible))
                    .collect();
                format!("{}{}", ELLIPSIS, tail)
            })
            .into_owned()
    }
}
