use std::fs;
use std::path::PathBuf;

use level_extractor::error::ExtractError;
use level_extractor::extract::Scope;
use level_extractor::levels::LEVELS;
use level_extractor::run;
use level_extractor::settings::Settings;

fn embedded_literal(contents: &str) -> Option<&str> {
    let rest = contents.split_once("\n  return ")?.1;
    rest.strip_suffix(";\n}\n")
}

fn run_captured(s: &Settings) -> (anyhow::Result<level_extractor::extract::Extraction>, String) {
    let mut out = Vec::new();
    let result = run(s, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn settings(fixture: &str, out: PathBuf) -> Settings {
    Settings {
        source_path: PathBuf::from(format!("tests/fixtures/{}.dart", fixture)),
        output_dir: out,
        scope: Scope::Full,
        dry_run: false,
    }
}

#[test]
fn writes_one_file_per_level() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("lib/data");
    let ex = run_captured(&settings("mock_data_service", out.clone())).0.unwrap();
    assert!(ex.misses.is_empty());

    let source = fs::read_to_string("tests/fixtures/mock_data_service.dart").unwrap();
    for level in LEVELS {
        let contents = fs::read_to_string(out.join(level.filename)).unwrap();
        assert!(contents.starts_with("import '../models/level.dart';\n\n"));
        assert_eq!(contents.matches("() {").count(), 1);
        assert!(contents.contains(&format!("{}() {{", level.accessor_name())));
        let literal = embedded_literal(&contents).unwrap();
        assert!(source.contains(literal));
    }
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let s = settings("mock_data_service", dir.path().to_path_buf());
    run_captured(&s).0.unwrap();
    let first: Vec<Vec<u8>> = LEVELS
        .iter()
        .map(|l| fs::read(dir.path().join(l.filename)).unwrap())
        .collect();
    run_captured(&s).0.unwrap();
    for (level, before) in LEVELS.iter().zip(first) {
        assert_eq!(fs::read(dir.path().join(level.filename)).unwrap(), before);
    }
}

#[test]
fn missing_level_writes_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let ex = run_captured(&settings("missing_high_school_3", dir.path().to_path_buf())).0.unwrap();
    assert_eq!(ex.misses, vec!["high_school_3"]);
    assert_eq!(ex.files.len(), 7);
    assert!(!dir.path().join("high_school_3_data.dart").exists());
    assert!(dir.path().join("university_toeic_data.dart").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");
    let mut s = settings("mock_data_service", out.clone());
    s.dry_run = true;
    let ex = run_captured(&s).0.unwrap();
    assert_eq!(ex.files.len(), 8);
    assert!(!out.exists());
}

#[test]
fn unreadable_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings {
        source_path: dir.path().join("nope.dart"),
        output_dir: dir.path().join("data"),
        ..Settings::default()
    };
    let (result, printed) = run_captured(&s);
    let err = result.unwrap_err();
    assert!(printed.is_empty());
    assert!(matches!(
        err.downcast_ref::<ExtractError>(),
        Some(ExtractError::ReadSource { .. })
    ));
    assert!(!dir.path().join("data").exists());
}

#[test]
fn prints_one_line_per_level_then_completion() {
    let dir = tempfile::tempdir().unwrap();
    let (result, printed) = run_captured(&settings("missing_high_school_3", dir.path().to_path_buf()));
    result.unwrap();
    assert_eq!(
        printed,
        "Created junior_high_1_data.dart\n\
         Created junior_high_2_data.dart\n\
         Created junior_high_3_data.dart\n\
         Created high_school_1_data.dart\n\
         Created high_school_2_data.dart\n\
         Could not find level definition for high_school_3\n\
         Created university_toeic_data.dart\n\
         Created practical_english_data.dart\n\
         Level extraction complete\n"
    );
}

#[test]
fn failed_write_keeps_earlier_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("junior_high_2_data.dart")).unwrap();
    let (result, printed) = run_captured(&settings("missing_high_school_3", dir.path().to_path_buf()));

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExtractError>(),
        Some(ExtractError::WriteOutput { .. })
    ));
    assert_eq!(printed, "Created junior_high_1_data.dart\n");
    assert!(dir.path().join("junior_high_1_data.dart").is_file());
    assert!(!dir.path().join("junior_high_3_data.dart").exists());
}
