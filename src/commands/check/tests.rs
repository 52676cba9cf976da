//! Tests for the `check` command plumbing.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{check_into, write_report};
use crate::batch::BatchSummary;
use crate::cli::CheckArgs;
use crate::error::CardlintError;
use crate::validate::Validator;

fn args_for(input: Option<PathBuf>) -> CheckArgs {
    CheckArgs {
        input,
        report: None,
        compare_baseline: false,
    }
}

#[test]
fn reads_batch_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("batch.txt");
    fs::write(&input, "2\n6345093243215543\n4444-5555-6666-7777\n").unwrap();

    let validator = Validator::new();
    let mut output = Vec::new();
    let summary = check_into(&args_for(Some(input)), &validator, &mut output).unwrap();

    assert_eq!(String::from_utf8_lossy(&output), "Valid\nInvalid\n");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.valid, 1);
}

#[test]
fn missing_input_file_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let validator = Validator::new();
    let mut output = Vec::new();
    let err = check_into(&args_for(Some(missing)), &validator, &mut output).unwrap_err();

    assert!(matches!(err, CardlintError::UserError(_)));
    assert!(err.to_string().contains("cannot open input file"));
    assert!(output.is_empty());
}

#[test]
fn framing_error_from_file_input_propagates() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "not-a-count\n").unwrap();

    let validator = Validator::new();
    let mut output = Vec::new();
    let err = check_into(&args_for(Some(input)), &validator, &mut output).unwrap_err();

    assert!(matches!(err, CardlintError::InputError(_)));
}

#[test]
fn report_is_written_as_json() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("summary.json");

    let summary = BatchSummary {
        total: 3,
        valid: 2,
        invalid: 1,
        baseline_mismatches: Some(0),
    };
    write_report(&report, &summary).unwrap();

    let contents = fs::read_to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["valid"], 2);
    assert_eq!(parsed["invalid"], 1);
    assert_eq!(parsed["baseline_mismatches"], 0);
    assert!(contents.ends_with('\n'));
}

#[test]
fn unwritable_report_path_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    // The parent directory does not exist.
    let report = dir.path().join("missing-dir").join("summary.json");

    let err = write_report(&report, &BatchSummary::default()).unwrap_err();
    assert!(matches!(err, CardlintError::UserError(_)));
    assert!(err.to_string().contains("cannot write report"));
}
