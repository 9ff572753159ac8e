//! Command line construction for the stream-copy extraction
//!
//! The command is produced as one shell line in the shape of ffmpeg's own
//! documented example:
//!
//! ```text
//! "<exe>" -hide_banner -ss <offset> -i "<url>" -c copy[ -t <duration>] "<dir>/<file>"
//! ```
//!
//! Only the executable, URL and output path are wrapped in double quotes.
//! Nothing is escaped: config values are trusted input from the operator
//! running the tool, and a `"` inside them will break the line.

use crate::domain::model::ResolvedParameters;

/// A fully built extraction command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionCommand {
    pub executable: String,
    pub start_offset: String,
    pub url: String,
    pub duration: Option<String>,
    pub output_path: String,
}

impl ExtractionCommand {
    /// Shell-invocable command line
    pub fn shell_line(&self) -> String {
        let duration = self
            .duration
            .as_ref()
            .map(|duration| format!(" -t {}", duration))
            .unwrap_or_default();

        format!(
            "{} -hide_banner -ss {} -i {} -c copy{} {}",
            quote(&self.executable),
            self.start_offset,
            quote(&self.url),
            duration,
            quote(&self.output_path),
        )
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Builds [`ExtractionCommand`]s for one executable
pub struct CommandBuilder {
    executable: String,
}

impl CommandBuilder {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn build(&self, params: &ResolvedParameters) -> ExtractionCommand {
        ExtractionCommand {
            executable: self.executable.clone(),
            start_offset: params.start_offset.clone(),
            url: params.url.clone(),
            duration: params.duration.clone(),
            output_path: params.output_path(),
        }
    }
}
