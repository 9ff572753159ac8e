// Unit tests for parameter resolution

use super::*;
use crate::adapters::mock::{InMemoryFs, SequenceClock};

const CONFIG_PATH: &str = "/jobs/match.ini";

fn raw(entries: &[(&str, &str)]) -> RawConfig {
    entries.iter().map(|(k, v)| (*k, *v)).collect()
}

fn full_config() -> RawConfig {
    raw(&[
        ("url2", "http://h/v"),
        ("dir2", "/tmp"),
        ("fnm2", "out.mkv"),
        ("pos2", "0:00:05"),
        ("len2", "0:00:02"),
    ])
}

fn resolve_with(
    raw: &RawConfig,
    fs: &InMemoryFs,
    clock: &SequenceClock,
    config_path: &str,
) -> DomainResult<ResolvedParameters> {
    ParameterResolver::new(fs, clock).resolve(raw, Path::new(config_path))
}

#[test]
fn test_resolves_full_config_verbatim() {
    let params = resolve_with(
        &full_config(),
        &InMemoryFs::new(),
        &SequenceClock::fixed(0),
        CONFIG_PATH,
    )
    .unwrap();

    assert_eq!(
        params,
        ResolvedParameters {
            url: "http://h/v".to_string(),
            start_offset: "0:00:05".to_string(),
            duration: Some("0:00:02".to_string()),
            output_dir: "/tmp".to_string(),
            output_file: "out.mkv".to_string(),
        }
    );
}

#[test]
fn test_missing_url_fails_regardless_of_other_fields() {
    let fs = InMemoryFs::new();
    let clock = SequenceClock::fixed(0);

    for config in [
        raw(&[]),
        raw(&[("url2", "")]),
        raw(&[("dir2", "/tmp"), ("fnm2", "out.mkv"), ("pos2", "0:01:00")]),
        raw(&[("url2", ""), ("dir2", ""), ("fnm2", "")]),
    ] {
        let err = resolve_with(&config, &fs, &clock, CONFIG_PATH).unwrap_err();
        assert!(matches!(err, DomainError::MissingUrl), "{:?}", config);
    }
}

#[test]
fn test_empty_offset_defaults_to_zero() {
    let mut config = full_config();
    config.insert("pos2", "");
    let params =
        resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), CONFIG_PATH).unwrap();
    assert_eq!(params.start_offset, "0:00:00");

    let config = raw(&[("url2", "http://h/v"), ("dir2", "/tmp"), ("fnm2", "a.mkv")]);
    let params =
        resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), CONFIG_PATH).unwrap();
    assert_eq!(params.start_offset, DEFAULT_START_OFFSET);
}

#[test]
fn test_empty_duration_means_to_the_end() {
    let mut config = full_config();
    config.insert("len2", "");
    let params =
        resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), CONFIG_PATH).unwrap();
    assert_eq!(params.duration, None);
}

#[test]
fn test_output_dir_defaults_to_config_directory() {
    let config = raw(&[("url2", "http://h/v"), ("fnm2", "out.mkv")]);
    let params =
        resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), CONFIG_PATH).unwrap();
    assert_eq!(params.output_dir, "/jobs");
    assert_eq!(params.output_path(), "/jobs/out.mkv");
}

#[test]
fn test_bare_config_name_without_dir_fails() {
    let config = raw(&[("url2", "http://h/v"), ("fnm2", "out.mkv")]);
    let err = resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), "match.ini")
        .unwrap_err();
    assert!(matches!(err, DomainError::MissingOutputDirectory));
}

#[test]
fn test_output_file_derived_from_config_stem() {
    let config = raw(&[("url2", "http://h/v"), ("dir2", "/tmp")]);
    // 0x18BCFE56800
    let clock = SequenceClock::fixed(1_700_000_000_000);
    let params = resolve_with(&config, &InMemoryFs::new(), &clock, CONFIG_PATH).unwrap();
    assert_eq!(params.output_file, "match_o18BCFE56800.mkv");
}

#[test]
fn test_derived_file_names_differ_across_milliseconds() {
    let config = raw(&[("url2", "http://h/v"), ("dir2", "/tmp")]);
    let clock = SequenceClock::new([1_000, 1_002]);
    let fs = InMemoryFs::new();

    let first = resolve_with(&config, &fs, &clock, CONFIG_PATH).unwrap();
    let second = resolve_with(&config, &fs, &clock, CONFIG_PATH).unwrap();

    assert!(first.output_file.ends_with(".mkv"));
    assert_ne!(first.output_file, second.output_file);
}

#[test]
fn test_empty_config_stem_derives_nothing() {
    let config = raw(&[("url2", "http://h/v"), ("dir2", "/tmp")]);
    let err = resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), "")
        .unwrap_err();
    assert!(matches!(err, DomainError::MissingOutputFilename));
}

#[test]
fn test_file_name_checked_before_directory() {
    let config = raw(&[("url2", "http://h/v")]);
    let err = resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(0), "")
        .unwrap_err();
    assert!(matches!(err, DomainError::MissingOutputFilename));
}

#[test]
fn test_timestamp_token_replaced_everywhere() {
    let mut config = full_config();
    config.insert("fnm2", "clip_{TS2}.mkv");
    let params = resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(255), CONFIG_PATH)
        .unwrap();
    assert_eq!(params.output_file, "clip_FF.mkv");

    config.insert("fnm2", "{TS2}/{TS2}.mkv");
    let params = resolve_with(&config, &InMemoryFs::new(), &SequenceClock::fixed(255), CONFIG_PATH)
        .unwrap();
    assert_eq!(params.output_file, "FF/FF.mkv");
}

#[test]
fn test_timestamp_token_yields_uppercase_hex() {
    let mut config = full_config();
    config.insert("fnm2", "clip_{TS2}.mkv");
    let clock = SequenceClock::fixed(1_700_000_000_123);
    let params = resolve_with(&config, &InMemoryFs::new(), &clock, CONFIG_PATH).unwrap();

    let hex = params
        .output_file
        .strip_prefix("clip_")
        .and_then(|rest| rest.strip_suffix(".mkv"))
        .unwrap();
    assert!(!params.output_file.contains(TIMESTAMP_TOKEN));
    assert!(!hex.is_empty());
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
}

#[test]
fn test_derived_name_and_token_use_separate_readings() {
    let config = raw(&[("url2", "http://h/v"), ("dir2", "/tmp")]);
    // The config stem carries the token, so the derived name is substituted too.
    let clock = SequenceClock::new([0xA, 0xB]);
    let params = resolve_with(&config, &InMemoryFs::new(), &clock, "/jobs/{TS2}.ini").unwrap();
    assert_eq!(params.output_file, "B_oA.mkv");
}

#[test]
fn test_existing_output_is_rejected() {
    let fs = InMemoryFs::new().with_file("/tmp/out.mkv", "old");
    let err = resolve_with(&full_config(), &fs, &SequenceClock::fixed(0), CONFIG_PATH).unwrap_err();
    match err {
        DomainError::OutputAlreadyExists { path } => assert_eq!(path, "/tmp/out.mkv"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_existing_directory_at_output_path_is_rejected() {
    let fs = InMemoryFs::new().with_dir("/tmp/out.mkv");
    let err = resolve_with(&full_config(), &fs, &SequenceClock::fixed(0), CONFIG_PATH).unwrap_err();
    assert!(matches!(err, DomainError::OutputAlreadyExists { .. }));
}
