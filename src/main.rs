//! vodslice
//!
//! Cut a segment out of an audio/video VOD, stream or file with ffmpeg.
//! All input and output parameters come from an INI job file.
//!
//! # Usage
//!
//! ```bash
//! vodslice --iini job.ini
//! vodslice job.ini --yes
//! vodslice job.ini --dry-run --json
//! ```

use clap::Parser;
use tracing::{debug, info};

use vodslice::adapters::ffmpeg_locator::{default_settings_path, locate};
use vodslice::adapters::*;
use vodslice::cli::Cli;
use vodslice::ports::ExecutableSpec;
use vodslice::utils::logging::LoggingConfig;
use vodslice::{ExtractInteractor, ExtractOutcome, ExtractRequest};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::new(cli.log_level, cli.log_format).initialize() {
        eprintln!("vodslice: {:#}", e);
        std::process::exit(1);
    }

    if !cli.json {
        println!("\nVODSLICE v{}\n", env!("CARGO_PKG_VERSION"));
    }

    std::process::exit(run(cli));
}

/// Run one extraction and return the process exit code
fn run(cli: Cli) -> i32 {
    let fs = StdFsAdapter::new();
    let clock = SystemClock::new();
    let probe = FfmpegProbe::new();
    let runner = ShellRunner::new();
    let prompt = ConsolePrompt::new();

    let executable = match &cli.ffmpeg {
        Some(path) => ExecutableSpec::new(path.as_str()),
        None => locate(default_settings_path().as_deref(), &fs),
    };

    let request = ExtractRequest {
        config_path: cli.config_path(),
        executable,
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        json: cli.json,
    };

    let interactor = ExtractInteractor::new(&fs, &clock, &probe, &runner, &prompt);
    let mut stdout = std::io::stdout();

    match interactor.execute(&request, &mut stdout) {
        Ok(outcome) => {
            info!(?outcome, "finished");
            if outcome == ExtractOutcome::Declined {
                eprintln!("Aborted, nothing was run.");
            }
            0
        }
        Err(e) => {
            debug!(exit_code = e.exit_code(), error = ?e, "run failed");
            eprintln!("ERROR: {}", e);
            e.exit_code()
        }
    }
}
