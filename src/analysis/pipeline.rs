use std::path::PathBuf;
use tracing::{info, warn};

use crate::analysis::{analyze, filter_by_date, parse_commits, render_summary, BotFilter};
use crate::config::{DEFAULT_CHART_DIR, DEFAULT_COMMITS_FILE};
use crate::error::Result;
use crate::plotting::render_charts;
use crate::storage::load_commits;
use crate::types::AnalysisResult;
use crate::utils::dates::parse_date_bound;
use crate::utils::DateRange;

/// Settings for one `analyze` run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub input: PathBuf,
    /// Lower bound; defaults to the earliest commit in the input
    pub start: Option<String>,
    /// Upper bound; defaults to the latest commit in the input
    pub end: Option<String>,
    pub output_dir: PathBuf,
    pub bots: BotFilter,
    pub render_charts: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_COMMITS_FILE),
            start: None,
            end: None,
            output_dir: PathBuf::from(DEFAULT_CHART_DIR),
            bots: BotFilter::default(),
            render_charts: true,
        }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub range: DateRange,
    /// Commits read from the input file
    pub loaded: usize,
    /// Commits inside the analysis range, bots included
    pub in_range: usize,
    pub bots_removed: usize,
    pub result: AnalysisResult,
    pub charts: Vec<PathBuf>,
}

/// How an `analyze` run ended.
///
/// Only `Completed` produced output; the others stopped early with a logged
/// diagnostic and are not failures.
#[derive(Debug)]
pub enum AnalyzeOutcome {
    MissingInput(PathBuf),
    NoCommits,
    NothingToAnalyze,
    Completed(Box<AnalysisReport>),
}

/// Load, filter, aggregate, chart and summarise a commit file.
pub fn run_analysis(options: &AnalyzeOptions) -> Result<AnalyzeOutcome> {
    let input = &options.input;
    if !input.exists() {
        warn!("{} not found.", input.display());
        return Ok(AnalyzeOutcome::MissingInput(input.clone()));
    }

    println!("Loading commit data from {}...", input.display());
    let commits = parse_commits(load_commits(input)?)?;
    let loaded = commits.len();
    println!("Loaded {} commits.", loaded);

    let Some(data_range) = DateRange::spanning(commits.iter().map(|c| &c.timestamp)) else {
        warn!("{} contains no commits.", input.display());
        return Ok(AnalyzeOutcome::NoCommits);
    };
    println!("\nData time period: {}", data_range.label());

    let start = match options.start.as_deref() {
        Some(value) => parse_date_bound(value)?,
        None => data_range.start,
    };
    let end = match options.end.as_deref() {
        Some(value) => parse_date_bound(value)?,
        None => data_range.end,
    };
    let range = DateRange::new(start, end);
    if range.start > range.end {
        warn!(range = %range.label(), "analysis period ends before it starts");
    }

    println!("Analysis period: {}", range.label());
    println!(
        "That's approximately {} days or {:.1} months",
        range.days(),
        range.approx_months()
    );

    let in_range = filter_by_date(&commits, &range);
    println!("Found {} commits in the specified date range.", in_range.len());

    let human = options.bots.apply(&in_range);
    let bots_removed = in_range.len() - human.len();
    println!(
        "\nFiltered out {} bot commits. Analyzing {} human commits.",
        bots_removed,
        human.len()
    );

    if human.is_empty() {
        warn!("No commits to analyze after filtering. Please try a different date range.");
        return Ok(AnalyzeOutcome::NothingToAnalyze);
    }

    info!(commits = human.len(), "analyzing commit patterns");
    let result = analyze(&human);

    let charts = if options.render_charts {
        let charts = render_charts(&result, &range.label(), &options.output_dir)?;
        println!(
            "Analysis complete! {} charts saved in '{}'.",
            charts.len(),
            options.output_dir.display()
        );
        charts
    } else {
        Vec::new()
    };

    println!("\n{}", render_summary(&result, &range));

    Ok(AnalyzeOutcome::Completed(Box::new(AnalysisReport {
        range,
        loaded,
        in_range: in_range.len(),
        bots_removed,
        result,
        charts,
    })))
}
