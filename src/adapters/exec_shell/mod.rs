// Shell execution adapter - Runs command lines through the platform shell

use std::ffi::OsString;
use std::process::{Command, Output};

use tracing::{debug, info};

use crate::domain::errors::*;
use crate::engine::command::ExtractionCommand;
use crate::ports::{ExecutableSpec, ExecutePort};

/// Exit code reported when the child ended without one (killed by a signal)
pub const NO_EXIT_CODE: i32 = 1;

/// Build a shell command appropriate for the platform.
///
/// A configured search prefix is put in front of the child's `PATH` only.
pub fn shell_command(line: &str, executable: &ExecutableSpec) -> Command {
    let mut cmd = platform_shell(line);
    if let Some(prefix) = &executable.search_prefix {
        cmd.env("PATH", prefixed_search_path(prefix, std::env::var_os("PATH")));
    }
    cmd
}

/// cmd.exe does not understand MSVC argument escaping, so the line is
/// handed over verbatim.
#[cfg(windows)]
fn platform_shell(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd
}

#[cfg(not(windows))]
fn platform_shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

/// `prefix` followed by the platform path separator and `current`
pub fn prefixed_search_path(prefix: &str, current: Option<OsString>) -> OsString {
    let separator = if cfg!(windows) { ";" } else { ":" };
    let mut path = OsString::from(prefix);
    if let Some(current) = current.filter(|current| !current.is_empty()) {
        path.push(separator);
        path.push(current);
    }
    path
}

/// Run a probe-style command and capture its output
pub fn capture(line: &str, executable: &ExecutableSpec) -> std::io::Result<Output> {
    shell_command(line, executable).output()
}

/// Runs the extraction with the terminal attached
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutePort for ShellRunner {
    fn execute(
        &self,
        command: &ExtractionCommand,
        executable: &ExecutableSpec,
    ) -> DomainResult<i32> {
        let line = command.shell_line();
        debug!(prefix = ?executable.search_prefix, "spawning shell");

        let status = shell_command(&line, executable)
            .status()
            .map_err(DomainError::SpawnFailed)?;

        let code = status.code().unwrap_or(NO_EXIT_CODE);
        info!(exit_code = code, success = status.success(), "ffmpeg exited");
        Ok(code)
    }
}
