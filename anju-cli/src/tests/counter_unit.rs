//! Unit tests for the persistent participant counter.

use super::helpers::DataDir;
use crate::counter::VisitCounter;
use rstest::rstest;

#[rstest]
fn missing_counter_reads_as_zero() {
    let data = DataDir::new();
    let counter = VisitCounter::new(data.path("count"));
    assert_eq!(counter.current(), 0);
}

#[rstest]
#[case("7", 7)]
#[case(" 12\n", 12)]
#[case("", 0)]
#[case("-3", 0)]
#[case("3.5", 0)]
#[case("셋", 0)]
fn reads_decimal_text(#[case] stored: &str, #[case] expected: u64) {
    let data = DataDir::new();
    let path = data.path("count");
    std::fs::write(&path, stored).expect("write counter");
    assert_eq!(VisitCounter::new(path).current(), expected);
}

#[rstest]
fn increment_creates_missing_directories() {
    let data = DataDir::new();
    let path = data.path("state/nested/count");
    let counter = VisitCounter::new(path.clone());

    assert_eq!(counter.increment().expect("first increment"), 1);
    assert_eq!(counter.increment().expect("second increment"), 2);
    assert_eq!(std::fs::read_to_string(&path).expect("counter file"), "2");
}

#[rstest]
fn increment_reports_unwritable_paths() {
    let data = DataDir::populated();
    let blocked = data.path("anju_db_extended.json/count");
    let err = VisitCounter::new(blocked.clone())
        .increment()
        .expect_err("a file cannot be used as a directory");
    match err {
        crate::CliError::WriteCounter { path, .. } => assert_eq!(path, blocked),
        other => panic!("expected WriteCounter, found {other:?}"),
    }
}
