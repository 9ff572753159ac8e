// Mock adapters - In-memory port implementations for tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::engine::command::ExtractionCommand;
use crate::ports::*;

/// Filesystem held in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryFs {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl InMemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// A file that exists but fails on read
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }
}

impl FsPort for InMemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
    }
}

/// Clock returning queued readings, then repeating the last one
#[derive(Debug)]
pub struct SequenceClock {
    readings: RefCell<VecDeque<u64>>,
    last: Cell<u64>,
}

impl SequenceClock {
    pub fn new(readings: impl IntoIterator<Item = u64>) -> Self {
        Self {
            readings: RefCell::new(readings.into_iter().collect()),
            last: Cell::new(0),
        }
    }

    pub fn fixed(millis: u64) -> Self {
        Self::new([millis])
    }
}

impl ClockPort for SequenceClock {
    fn now_millis(&self) -> u64 {
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}

/// Probe answering with a fixed version, or failing when there is none
#[derive(Debug, Clone)]
pub struct StaticProbe {
    version: Option<String>,
}

impl StaticProbe {
    pub fn working(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }

    pub fn missing() -> Self {
        Self { version: None }
    }
}

impl ProbePort for StaticProbe {
    fn probe_version(&self, executable: &ExecutableSpec) -> DomainResult<String> {
        self.version
            .clone()
            .ok_or_else(|| DomainError::ExecutableNotFound {
                executable: executable.program.clone(),
            })
    }
}

/// Runner recording every command line instead of executing it
#[derive(Debug, Default)]
pub struct RecordingRunner {
    exit_code: i32,
    lines: RefCell<Vec<String>>,
}

impl RecordingRunner {
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl ExecutePort for RecordingRunner {
    fn execute(
        &self,
        command: &ExtractionCommand,
        _executable: &ExecutableSpec,
    ) -> DomainResult<i32> {
        self.lines.borrow_mut().push(command.shell_line());
        Ok(self.exit_code)
    }
}

/// Confirmation with a preset answer that counts how often it was asked
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl ConfirmPort for ScriptedConfirm {
    fn confirm(&self, _prompt: &str) -> DomainResult<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}
