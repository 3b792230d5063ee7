//! Static dashboard rendering.

use chrono::NaiveDate;
use supplychain_core::dashboard::{render_dashboard, write_dashboard};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn dashboard_carries_literal_figures_and_timestamp() {
    let html = render_dashboard(at(2024, 3, 5, 14, 30));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Supply Chain Intelligence - Executive Dashboard"));
    assert!(html.contains("$962.3M"));
    assert!(html.contains("91.2%"));
    assert_eq!(html.matches("class=\"kpi-card ").count(), 8);
    assert!(html.contains("Generated on March 05, 2024 at 02:30 PM"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn only_the_timestamp_varies() {
    let a = render_dashboard(at(2024, 3, 5, 14, 30));
    let b = render_dashboard(at(2025, 1, 1, 9, 0));
    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.contains("Generated on"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_ne!(a, b);
    assert_eq!(strip(&a), strip(&b));
}

#[test]
fn write_dashboard_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("executive_dashboard.html");
    write_dashboard(&path, at(2024, 1, 1, 0, 0)).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Generated on January 01, 2024 at 12:00 AM"));
}
