use anyhow::{Context, Result};

use super::cli::{AnalyzeArgs, CollectArgs};
use crate::analysis::{run_analysis, AnalyzeOptions, AnalyzeOutcome};
use crate::collect::{collect_commits, collect_releases};
use crate::config::GitHubConfig;
use crate::github::GitHubClient;
use crate::storage::save_json;

pub async fn commits(github: &GitHubConfig, args: &CollectArgs) -> Result<()> {
    let repo = args.repo_ref();
    let range = args.range()?;
    let client = GitHubClient::new(github).context("Failed to create GitHub client")?;

    println!(
        "Fetching commits from {} between {} and {}...",
        repo, args.since, args.until
    );
    let commits = collect_commits(&client, &repo, &range)
        .await
        .context("Failed to fetch commits")?;
    println!("Found {} commits", commits.len());

    let output = args.output_or_default("commits");
    save_json(&output, &commits)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Commits saved to {}", output.display());

    Ok(())
}

pub async fn releases(github: &GitHubConfig, args: &CollectArgs) -> Result<()> {
    let repo = args.repo_ref();
    let range = args.range()?;
    let client = GitHubClient::new(github).context("Failed to create GitHub client")?;

    println!(
        "Fetching releases from {} between {} and {}...",
        repo, args.since, args.until
    );
    let releases = collect_releases(&client, &repo, &range)
        .await
        .context("Failed to fetch releases")?;
    println!("Found {} releases", releases.len());

    let output = args.output_or_default("releases");
    save_json(&output, &releases)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Releases saved to {}", output.display());

    Ok(())
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let options = AnalyzeOptions::from(args);
    let outcome = run_analysis(&options)
        .with_context(|| format!("Failed to analyze {}", options.input.display()))?;

    if let AnalyzeOutcome::Completed(report) = outcome {
        tracing::debug!(
            charts = report.charts.len(),
            commits = report.result.commit_count,
            "analysis finished"
        );
    }
    Ok(())
}
