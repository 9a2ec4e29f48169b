//! Tests for the output sink and reporter

use std::fs;
use std::path::PathBuf;

use fritoto::FritotoError;
use fritoto::output::{OutputSink, Reporter};
use tempfile::TempDir;

use crate::common::ts;

#[test]
fn sink_defaults_to_stdout() {
    assert_eq!(OutputSink::default(), OutputSink::Stdout);
    assert_eq!(OutputSink::from_path(None), OutputSink::Stdout);
    assert_eq!(OutputSink::Stdout.path(), None);
}

#[test]
fn sink_from_path() {
    let sink = OutputSink::from_path(Some(PathBuf::from("att.json")));
    assert_eq!(sink.path(), Some(PathBuf::from("att.json").as_path()));
}

#[test]
fn file_sink_writes_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("att.json");

    OutputSink::File(path.clone()).write("{}\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
}

#[test]
fn file_sink_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("att.json");
    fs::write(&path, "a much longer previous attestation").unwrap();

    OutputSink::File(path.clone()).write("{}\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
}

#[test]
fn file_sink_in_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/att.json");

    match OutputSink::File(path.clone()).write("{}\n") {
        Err(FritotoError::CreateOutput { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected CreateOutput, got {other:?}"),
    }
}

#[test]
fn quiet_reporter_is_silent_and_safe() {
    let reporter = Reporter::new(true);
    reporter.heading();
    reporter.step("hashing");
    reporter.verdict(&ts("2025-09-26T10:30:00Z"), true);
    reporter.done(&OutputSink::Stdout);
}
