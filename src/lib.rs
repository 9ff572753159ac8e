//! vodslice Library
//!
//! Cuts a segment out of an audio/video stream by driving an external
//! ffmpeg executable. Everything the run needs comes from a small INI job
//! file that is parsed, defaulted, validated and turned into one stream-copy
//! command line.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{ExtractInteractor, ExtractOutcome, ExtractRequest};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{RawConfig, ResolvedParameters};
pub use engine::{CommandBuilder, ExtractionCommand, Redactor};
