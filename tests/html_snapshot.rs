//! HTML report tests for determinism and structure.
//!
//! These tests verify that report generation is:
//! - Deterministic (same input produces identical output)
//! - Contains the metrics table, note and both charts
//! - Properly escapes text that ends up in markup

use maxcut_demo::core::catalog::{base_record, chart_dataset};
use maxcut_demo::core::env::EnvironmentInfo;
use maxcut_demo::report::{render_html, write_html};
use maxcut_demo::{FetchOutcome, MeasuredResult, ProblemSize};

const GENERATED_AT: &str = "2026-01-15T12:00:00Z";

fn make_fixed_outcome(size: ProblemSize) -> FetchOutcome {
    let base = base_record(size);
    FetchOutcome {
        result: MeasuredResult::from_base(size, base, 0.0712),
        chart_data: chart_dataset(),
    }
}

fn make_fixed_host() -> EnvironmentInfo {
    EnvironmentInfo {
        cpu_model: Some("Test CPU".to_string()),
        cpu_cores: Some(8),
        os: "linux".to_string(),
    }
}

#[test]
fn test_html_is_deterministic() {
    let outcome = make_fixed_outcome(ProblemSize::N5);
    let host = make_fixed_host();
    let a = render_html(&outcome, &host, GENERATED_AT);
    let b = render_html(&outcome, &host, GENERATED_AT);
    assert_eq!(a, b);
}

#[test]
fn test_html_structure() {
    let html = render_html(&make_fixed_outcome(ProblemSize::N5), &make_fixed_host(), GENERATED_AT);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Structured Entropy Framework</h1>"));
    assert!(html.contains(GENERATED_AT));
    assert!(html.contains("Test CPU"));
    assert!(html.contains("0.0712s"));
    assert!(html.contains("PROVEN, PUBLISHED"));
    assert!(html.contains("Execution Time Comparison"));
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.contains("id=\"report-data\""));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_html_escapes_note() {
    let mut outcome = make_fixed_outcome(ProblemSize::N20);
    outcome.result.scalability_note = "<script>alert('x')</script> & more".to_string();
    let html = render_html(&outcome, &make_fixed_host(), GENERATED_AT);

    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&amp; more"));
    assert!(!html.contains("<script>alert"));

    let start = html.find("id=\"report-data\">").unwrap();
    let embedded = &html[start..];
    assert!(!embedded.contains("</script> & more"));
}

#[test]
fn test_write_html_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/report.html");
    write_html(&path, &make_fixed_outcome(ProblemSize::N50), &make_fixed_host()).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("N=50"));
    assert!(html.contains("enterprise optimization"));
}
