//! Command construction and display for the external tool

pub mod command;
pub mod redact;

pub use command::{CommandBuilder, ExtractionCommand};
pub use redact::Redactor;
