use super::*;
use crate::types::AnalysisResult;
use std::fs;
use tempfile::TempDir;

const RANGE: &str = "2024-01-01 to 2024-03-31";

fn setup_test_result() -> AnalysisResult {
    AnalysisResult {
        commit_count: 6,
        unique_authors: 2,
        monthly: vec![("2024-01".to_string(), 4), ("2024-02".to_string(), 2)],
        daily: vec![
            ("Monday".to_string(), 1),
            ("Tuesday".to_string(), 0),
            ("Wednesday".to_string(), 2),
            ("Thursday".to_string(), 0),
            ("Friday".to_string(), 3),
            ("Saturday".to_string(), 0),
            ("Sunday".to_string(), 0),
        ],
        hourly: (0..24).map(|h| (h, if h == 9 { 6 } else { 0 })).collect(),
        top_contributors: vec![("alice".to_string(), 4), ("bob".to_string(), 2)],
        commit_types: Vec::new(),
    }
}

#[test]
fn test_chart_set() {
    let charts = charts_for(&setup_test_result(), RANGE);
    let names: Vec<&str> = charts.iter().map(|c| c.file_name).collect();
    assert_eq!(
        names,
        vec![
            "monthly_commits.png",
            "daily_commits.png",
            "hourly_commits.png",
            "top_contributors.png",
            "commit_types.png",
        ]
    );
    assert_eq!(
        charts[0].title,
        "Commits per Month (Excluding Bots) - 2024-01-01 to 2024-03-31"
    );
    assert_eq!(charts[2].bars[9], ("9".to_string(), 6));
    assert!(charts[4].is_empty());
}

#[test]
fn test_horizontal_labels_put_first_bar_on_top() {
    let chart = BarChart::top_contributors(&setup_test_result(), RANGE);
    assert_eq!(chart.orientation, Orientation::Horizontal);
    assert_eq!(chart.axis_labels(), vec!["bob".to_string(), "alice".to_string()]);

    let monthly = BarChart::monthly(&setup_test_result(), RANGE);
    assert_eq!(monthly.axis_labels(), vec!["2024-01".to_string(), "2024-02".to_string()]);
}

#[test]
fn test_value_axis_headroom() {
    let chart = BarChart::monthly(&setup_test_result(), RANGE);
    assert!(chart.value_max() > 4);

    let empty = BarChart::commit_types(&setup_test_result(), RANGE);
    assert_eq!(empty.value_max(), 1);
}

#[test]
fn test_empty_result_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("charts");

    let written = render_charts(&AnalysisResult::default(), RANGE, &out).unwrap();

    assert!(written.is_empty());
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

// Text rendering goes through the system font database.
#[test]
#[ignore = "needs a system sans-serif font"]
fn test_generate_charts() {
    let temp_dir = TempDir::new().unwrap();
    let written = render_charts(&setup_test_result(), RANGE, temp_dir.path()).unwrap();

    assert_eq!(written.len(), 4);
    for path in written {
        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
    assert!(!temp_dir.path().join("commit_types.png").exists());
}
