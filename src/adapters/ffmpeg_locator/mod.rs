// FFmpeg locator adapter - Finds and probes the external executable
//
// An optional `path.cfg` next to the running binary controls discovery.
// Its first line, after `$VAR` expansion, is either the executable itself
// or a directory to search first.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::adapters::exec_shell::capture;
use crate::domain::errors::*;
use crate::ports::{ExecutableSpec, FsPort, ProbePort};

/// Executable name used when nothing else is configured
pub const DEFAULT_EXECUTABLE: &str = "ffmpeg";

/// Settings file looked up next to the running binary
pub const SETTINGS_FILE_NAME: &str = "path.cfg";

/// Only this much of the settings file is considered
const SETTINGS_READ_LIMIT: usize = 1024;

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ffmpeg\s+version\s+(\S+)").expect("Failed to compile version regex")
});

static ENV_VAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([^}]+)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("Failed to compile environment variable regex")
});

/// Expand `$VAR` and `${VAR}` references; unknown variables stay as written.
pub fn expand_env_vars(value: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(value, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()).unwrap_or("");
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Interpret the first line of a settings file
pub fn spec_from_settings_line(line: &str, fs: &dyn FsPort) -> ExecutableSpec {
    let expanded = expand_env_vars(line.trim());
    let expanded = expanded.trim();

    if expanded.is_empty() {
        ExecutableSpec::new(DEFAULT_EXECUTABLE)
    } else if fs.is_file(Path::new(expanded)) {
        ExecutableSpec::new(expanded)
    } else {
        ExecutableSpec::new(DEFAULT_EXECUTABLE).with_search_prefix(expanded)
    }
}

/// `path.cfg` beside the current executable, if that location is known
pub fn default_settings_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SETTINGS_FILE_NAME)))
}

/// Resolve the executable from an optional settings file.
///
/// A missing or unreadable settings file falls back to `ffmpeg` on the
/// inherited search path.
pub fn locate(settings_path: Option<&Path>, fs: &dyn FsPort) -> ExecutableSpec {
    let Some(path) = settings_path.filter(|path| fs.is_file(path)) else {
        return ExecutableSpec::new(DEFAULT_EXECUTABLE);
    };

    match fs.read_to_string(path) {
        Ok(text) => {
            let head: String = text.chars().take(SETTINGS_READ_LIMIT).collect();
            let first_line = head.lines().next().unwrap_or("");
            let spec = spec_from_settings_line(first_line, fs);
            debug!(settings = %path.display(), ?spec, "executable settings applied");
            spec
        }
        Err(e) => {
            warn!(settings = %path.display(), error = %e, "ignoring unreadable settings file");
            ExecutableSpec::new(DEFAULT_EXECUTABLE)
        }
    }
}

/// Version number from `-version` output
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Probes by running `"<exe>" -version`
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegProbe;

impl FfmpegProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ProbePort for FfmpegProbe {
    fn probe_version(&self, executable: &ExecutableSpec) -> DomainResult<String> {
        let not_found = || DomainError::ExecutableNotFound {
            executable: executable.program.clone(),
        };

        let line = format!("\"{}\" -version", executable.program);
        let output = capture(&line, executable).map_err(|e| {
            debug!(error = %e, "version probe could not start");
            not_found()
        })?;

        parse_version(&String::from_utf8_lossy(&output.stdout)).ok_or_else(not_found)
    }
}
