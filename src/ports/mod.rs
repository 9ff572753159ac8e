// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::errors::*;
use crate::engine::command::ExtractionCommand;

/// Port for the filesystem queries the pipeline needs
pub trait FsPort {
    /// Whether any filesystem entry exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` names a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole text file
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Port for wall-clock time
pub trait ClockPort {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Where and how the external executable is found.
///
/// `search_prefix` is handed to child processes through their own
/// environment; the parent environment is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableSpec {
    pub program: String,
    pub search_prefix: Option<String>,
}

impl ExecutableSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            search_prefix: None,
        }
    }

    pub fn with_search_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.search_prefix = Some(prefix.into());
        self
    }
}

/// Port for checking the external executable works
pub trait ProbePort {
    /// Version string reported by the executable
    fn probe_version(&self, executable: &ExecutableSpec) -> DomainResult<String>;
}

/// Port for running the extraction
pub trait ExecutePort {
    /// Run the command to completion and return its exit code
    fn execute(&self, command: &ExtractionCommand, executable: &ExecutableSpec)
        -> DomainResult<i32>;
}

/// Port for operator confirmation before running
pub trait ConfirmPort {
    /// `Ok(true)` to proceed
    fn confirm(&self, prompt: &str) -> DomainResult<bool>;
}
