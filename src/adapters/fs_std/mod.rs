// Filesystem adapter - std::fs backed implementation of FsPort

use std::path::Path;

use crate::ports::FsPort;

/// Filesystem adapter over `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for StdFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks still occupy the name.
        path.exists() || path.symlink_metadata().is_ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
