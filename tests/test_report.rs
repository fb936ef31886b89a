//! Tests for the report sink and the end-to-end reporters

use varprof::profile::{numeric_var_report, str_var_report};
use varprof::report::{ReportKind, ReportSink};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_sink_creates_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("report");

    let sink = ReportSink::new(&root).unwrap();
    assert!(root.is_dir());
    assert_eq!(sink.chart_path("income"), root.join("income.png"));
}

#[test]
fn test_add_entry_creates_page_then_appends() {
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();

    sink.add_entry(ReportKind::Num, "income").unwrap();
    let page = std::fs::read_to_string(sink.index_path(ReportKind::Num)).unwrap();
    assert!(page.contains("<h1>num report</h1>"));
    assert_eq!(page.matches(r#"href="income.png""#).count(), 1);

    // Append-only, not deduplicated
    sink.add_entry(ReportKind::Num, "income").unwrap();
    let page = std::fs::read_to_string(sink.index_path(ReportKind::Num)).unwrap();
    assert_eq!(page.matches(r#"href="income.png""#).count(), 2);
}

#[test]
fn test_report_kinds_use_separate_pages() {
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();

    sink.add_entry(ReportKind::Num, "income").unwrap();
    sink.add_entry(ReportKind::Str, "grade").unwrap();

    assert!(sink.index_path(ReportKind::Num).is_file());
    assert!(sink.index_path(ReportKind::Str).is_file());
    let str_page = std::fs::read_to_string(sink.index_path(ReportKind::Str)).unwrap();
    assert!(str_page.contains("grade.png"));
    assert!(!str_page.contains("income.png"));
}

#[test]
fn test_numeric_reporter_writes_chart_and_registers() {
    let df = common::credit_dataframe();
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();

    let profiles =
        numeric_var_report(&df, &["income".to_string()], "target", &sink, false).unwrap();

    assert_eq!(profiles.len(), 1);
    assert!(sink.chart_path("income").is_file());
    let page = std::fs::read_to_string(sink.index_path(ReportKind::Num)).unwrap();
    assert!(page.contains("income.png"));
}

#[test]
fn test_categorical_reporter_writes_chart_and_registers() {
    let df = common::credit_dataframe();
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();

    let profiles = str_var_report(&df, &["region".to_string()], "target", &sink).unwrap();

    assert_eq!(profiles.len(), 1);
    assert!(sink.chart_path("region").is_file());
    let page = std::fs::read_to_string(sink.index_path(ReportKind::Str)).unwrap();
    assert!(page.contains("region.png"));
}

#[test]
fn test_rerun_overwrites_chart_and_duplicates_index_entry() {
    let df = common::credit_dataframe();
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();
    let vars = vec!["income".to_string()];

    numeric_var_report(&df, &vars, "target", &sink, false).unwrap();
    numeric_var_report(&df, &vars, "target", &sink, false).unwrap();

    // One chart file, two index entries
    let charts = std::fs::read_dir(dir.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|x| x == "png")
        })
        .count();
    assert_eq!(charts, 1);

    let page = std::fs::read_to_string(sink.index_path(ReportKind::Num)).unwrap();
    assert_eq!(page.matches(r#"href="income.png""#).count(), 2);
}

#[test]
fn test_reporters_over_random_dataset() {
    let df = common::random_dataframe(500);
    let dir = tempfile::tempdir().unwrap();
    let sink = ReportSink::new(dir.path()).unwrap();

    numeric_var_report(&df, &["loan_amount".to_string()], "target", &sink, true).unwrap();
    str_var_report(&df, &["grade".to_string()], "target", &sink).unwrap();

    assert!(sink.chart_path("loan_amount").is_file());
    assert!(sink.chart_path("grade").is_file());
}
