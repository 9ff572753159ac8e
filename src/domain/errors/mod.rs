// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Every way a run can terminate early.
///
/// Each variant maps to a stable process exit code through
/// [`DomainError::exit_code`]; scripts driving the tool rely on those values.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No executable answered `-version` with a recognizable version string
    #[error("no working ffmpeg executable found [{executable}]")]
    ExecutableNotFound { executable: String },

    /// Neither `--iini` nor a positional `.ini` argument was given
    #[error("no input INI (see --iini)")]
    MissingConfigPath,

    /// Config path does not name an existing file
    #[error("input INI file not found [{path}]")]
    ConfigNotFound { path: String },

    /// Config file exists but could not be read
    #[error("failed to read input INI file [{path}]: {source}")]
    ConfigUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `url2` missing or empty
    #[error("no URL in input INI file (url2 entry is required)")]
    MissingUrl,

    /// No `fnm2` given and none could be derived from the config name
    #[error("no output file-name from INI")]
    MissingOutputFilename,

    /// No `dir2` given and the config path has no directory component
    #[error("no output dir-name from INI")]
    MissingOutputDirectory,

    /// Something already sits at the output path
    #[error("output file already exists [{path}]")]
    OutputAlreadyExists { path: String },

    /// Writing the preview or reading the operator's answer failed
    #[error("console I/O failed: {0}")]
    ConsoleFailed(#[source] std::io::Error),

    /// The shell running the external tool could not be started
    #[error("failed to start ffmpeg: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The external tool ran and reported failure
    #[error("FFMPEG failed, code:{code}")]
    ExternalToolFailed { code: i32 },
}

impl DomainError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DomainError::ExecutableNotFound { .. } => 2,
            DomainError::MissingConfigPath => 3,
            DomainError::ConfigNotFound { .. } => 4,
            DomainError::MissingUrl => 5,
            DomainError::ConfigUnreadable { .. } => 6,
            DomainError::MissingOutputFilename => 7,
            DomainError::MissingOutputDirectory => 8,
            DomainError::OutputAlreadyExists { .. } => 9,
            DomainError::ConsoleFailed(_) | DomainError::SpawnFailed(_) => 1,
            DomainError::ExternalToolFailed { code } => *code,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;
