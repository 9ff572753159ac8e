// Domain rules - Defaulting, derivation and validation of job parameters

use std::path::Path;

use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::{ClockPort, FsPort};
use crate::utils::path::{config_parent, config_stem, tail_for_display};
use crate::utils::time::hex_timestamp;

/// Turns raw config entries into [`ResolvedParameters`].
///
/// Defaults are applied in a fixed order (offset, directory, file name) so
/// each derived value only depends on raw input or on values resolved
/// before it.
pub struct ParameterResolver<'a> {
    fs: &'a dyn FsPort,
    clock: &'a dyn ClockPort,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(fs: &'a dyn FsPort, clock: &'a dyn ClockPort) -> Self {
        Self { fs, clock }
    }

    /// Resolve `raw`, read from the file at `config_path`.
    pub fn resolve(&self, raw: &RawConfig, config_path: &Path) -> DomainResult<ResolvedParameters> {
        let url = raw.non_empty(KEY_URL).ok_or(DomainError::MissingUrl)?.to_string();

        let start_offset = raw
            .non_empty(KEY_START_OFFSET)
            .unwrap_or(DEFAULT_START_OFFSET)
            .to_string();

        let output_dir = match raw.non_empty(KEY_OUTPUT_DIR) {
            Some(dir) => Some(dir.to_string()),
            None => {
                let derived = config_parent(config_path);
                if let Some(dir) = &derived {
                    info!(
                        dir = %tail_for_display(dir, PREVIEW_TAIL),
                        "auto output dir, assigned from input INI dir-name"
                    );
                }
                derived
            }
        };

        let output_file = match raw.non_empty(KEY_OUTPUT_FILE) {
            Some(file) => Some(file.to_string()),
            None => {
                let derived = self.derive_file_name(config_path);
                if let Some(file) = &derived {
                    info!(file = %file, "auto output filename, assigned from input INI");
                }
                derived
            }
        };

        let output_file = output_file
            .map(|file| self.substitute_timestamp(file))
            .filter(|file| !file.is_empty())
            .ok_or(DomainError::MissingOutputFilename)?;

        let output_dir = output_dir.ok_or(DomainError::MissingOutputDirectory)?;

        let duration = raw.non_empty(KEY_DURATION).map(str::to_string);

        let params = ResolvedParameters {
            url,
            start_offset,
            duration,
            output_dir,
            output_file,
        };

        let output_path = params.output_path();
        if self.fs.exists(Path::new(&output_path)) {
            return Err(DomainError::OutputAlreadyExists { path: output_path });
        }

        Ok(params)
    }

    /// `<config stem>_o<HEX MS>.mkv`, or `None` when the stem is empty
    fn derive_file_name(&self, config_path: &Path) -> Option<String> {
        let stem = config_stem(config_path)?;
        Some(format!(
            "{}_o{}.{}",
            stem,
            hex_timestamp(self.clock.now_millis()),
            DERIVED_EXTENSION
        ))
    }

    /// Replace every [`TIMESTAMP_TOKEN`] with a fresh clock reading.
    ///
    /// The reading is taken separately from the one in
    /// [`Self::derive_file_name`], so the two may differ.
    fn substitute_timestamp(&self, file: String) -> String {
        if !file.contains(TIMESTAMP_TOKEN) {
            return file;
        }
        file.replace(TIMESTAMP_TOKEN, &hex_timestamp(self.clock.now_millis()))
    }
}

#[cfg(test)]
mod tests;
