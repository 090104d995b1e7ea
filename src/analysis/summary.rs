use crate::config::SUMMARY_TOP_N;
use crate::types::AnalysisResult;
use crate::utils::DateRange;

/// Text report printed after the charts are written.
pub fn render_summary(result: &AnalysisResult, range: &DateRange) -> String {
    let mut out = format!(
        "Interesting Statistics (Excluding Bots) - {}:\n\
         Total human commits: {}\n\
         Number of unique contributors: {}\n",
        range.label(),
        result.commit_count,
        result.unique_authors
    );

    if !result.top_contributors.is_empty() {
        out.push_str(&format!("\nTop {} contributors:\n", SUMMARY_TOP_N));
        for (author, count) in result.top_contributors.iter().take(SUMMARY_TOP_N) {
            out.push_str(&format!("  - {}: {} commits\n", author, count));
        }
    }

    if let Some((month, count)) = result.most_active_month() {
        out.push_str(&format!("\nMost active month:\n  - {}: {} commits\n", month, count));
    }

    if !result.commit_types.is_empty() {
        out.push_str("\nMost common commit types:\n");
        for (word, count) in result.commit_types.iter().take(SUMMARY_TOP_N) {
            out.push_str(&format!("  - {}: {} occurrences\n", word, count));
        }
    }

    out
}
