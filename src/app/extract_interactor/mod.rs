// Extract interactor - Orchestrates one extraction run

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::ini_config::IniConfigAdapter;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::ParameterResolver;
use crate::engine::{CommandBuilder, Redactor};
use crate::ports::*;
use crate::utils::path::tail_for_display;

/// Prompt shown before the external tool starts
pub const CONFIRM_PROMPT: &str = "Press enter to Continue . . .";

/// What the operator asked for
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    /// `None` when neither `--iini` nor a positional `.ini` was given
    pub config_path: Option<PathBuf>,
    pub executable: ExecutableSpec,
    pub assume_yes: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// How a run that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The external tool ran and exited with 0
    Completed,
    /// Dry run: everything was resolved and previewed, nothing executed
    Previewed,
    /// The operator declined at the prompt
    Declined,
}

/// Machine-readable form of the preview
#[derive(Debug, Serialize)]
struct PreviewReport {
    version: String,
    config: String,
    lines: usize,
    entries: Vec<PreviewEntry>,
    command: String,
}

/// Interactor for the extraction use case
pub struct ExtractInteractor<'a> {
    fs: &'a dyn FsPort,
    clock: &'a dyn ClockPort,
    probe: &'a dyn ProbePort,
    runner: &'a dyn ExecutePort,
    confirm: &'a dyn ConfirmPort,
    redactor: Redactor,
}

impl<'a> ExtractInteractor<'a> {
    /// Create new extract interactor with injected ports
    pub fn new(
        fs: &'a dyn FsPort,
        clock: &'a dyn ClockPort,
        probe: &'a dyn ProbePort,
        runner: &'a dyn ExecutePort,
        confirm: &'a dyn ConfirmPort,
    ) -> Self {
        Self {
            fs,
            clock,
            probe,
            runner,
            confirm,
            redactor: Redactor::default(),
        }
    }

    /// Run the whole pipeline, writing operator-facing lines to `out`.
    ///
    /// Nothing is executed unless every step before it succeeded.
    pub fn execute(&self, request: &ExtractRequest, out: &mut dyn Write) -> DomainResult<ExtractOutcome> {
        let console = Console {
            quiet: request.json,
        };

        let version = self.probe.probe_version(&request.executable)?;
        info!(version = %version, executable = %request.executable.program, "ffmpeg found");
        console.line(out, &format!("Using FFMPEG version: [{}]", version))?;

        let config_path = request
            .config_path
            .as_deref()
            .ok_or(DomainError::MissingConfigPath)?;
        let config_display = tail_for_display(&config_path.to_string_lossy(), PREVIEW_TAIL);
        console.line(out, &format!("Input INI file: [{}]", config_display))?;

        let loaded = IniConfigAdapter::new(self.fs).load(config_path)?;
        console.line(out, &format!("Got {} lines.", loaded.line_count))?;

        let params = ParameterResolver::new(self.fs, self.clock).resolve(&loaded.entries, config_path)?;
        let entries = params.preview();

        let command = CommandBuilder::new(request.executable.program.as_str()).build(&params);
        let redacted = self.redactor.redact(&command.shell_line());
        info!(command = %redacted, "command built");

        if request.json {
            let report = PreviewReport {
                version,
                config: config_display,
                lines: loaded.line_count,
                entries,
                command: redacted,
            };
            write_json(out, &report)?;
        } else {
            console.line(out, "\nParsed INI preview:")?;
            for entry in &entries {
                console.line(out, &format!("\t{:<8}: [{}]", entry.key, entry.value))?;
            }
            console.line(out, &format!("\nCMD: [{}]", redacted))?;
        }

        if request.dry_run {
            info!("dry run, ffmpeg not started");
            return Ok(ExtractOutcome::Previewed);
        }

        if !request.assume_yes && !self.confirm.confirm(CONFIRM_PROMPT)? {
            warn!("declined at prompt, ffmpeg not started");
            return Ok(ExtractOutcome::Declined);
        }

        console.line(out, "Running FFMPEG ...\n")?;
        let code = self.runner.execute(&command, &request.executable)?;
        if code != 0 {
            return Err(DomainError::ExternalToolFailed { code });
        }

        console.line(out, "Done.")?;
        Ok(ExtractOutcome::Completed)
    }
}

/// Text output that goes silent in JSON mode
struct Console {
    quiet: bool,
}

impl Console {
    fn line(&self, out: &mut dyn Write, text: &str) -> DomainResult<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(out, "{}", text).map_err(DomainError::ConsoleFailed)
    }
}

fn write_json(out: &mut dyn Write, report: &PreviewReport) -> DomainResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)
        .map_err(|e| DomainError::ConsoleFailed(e.into()))?;
    writeln!(out).map_err(DomainError::ConsoleFailed)
}
