//! Timestamp formatting for generated file names

/// Render Unix milliseconds as uppercase hexadecimal, e.g. `18B2C4F7A10`.
pub fn hex_timestamp(millis: u64) -> String {
    format!("{:X}", millis)
}
