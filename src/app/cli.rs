use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::{AnalyzeOptions, BotFilter};
use crate::config::{
    GitHubConfig, RepoRef, DEFAULT_API_URL, DEFAULT_BOT_PATTERN, DEFAULT_CHART_DIR,
    DEFAULT_COMMITS_FILE, DEFAULT_OWNER, DEFAULT_REPO, DEFAULT_SINCE, DEFAULT_UNTIL,
};
use crate::utils::dates::parse_day;
use crate::utils::DateRange;

#[derive(Parser)]
#[command(name = "repostats")]
#[command(about = "Collect GitHub commit and release history and chart repository activity")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, help = "GitHub API base URL")]
    pub api_url: String,

    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub access token")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CollectArgs {
    #[arg(long, default_value = DEFAULT_OWNER, help = "Repository owner")]
    pub owner: String,

    #[arg(long, default_value = DEFAULT_REPO, help = "Repository name")]
    pub repo: String,

    #[arg(long, default_value = DEFAULT_SINCE, help = "First day to include (YYYY-MM-DD)")]
    pub since: String,

    #[arg(long, default_value = DEFAULT_UNTIL, help = "Last day to include (YYYY-MM-DD)")]
    pub until: String,

    #[arg(long, help = "Output JSON file [default: <owner>_<repo>_<kind>.json]")]
    pub output: Option<PathBuf>,
}

impl CollectArgs {
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(&self.owner, &self.repo)
    }

    pub fn range(&self) -> crate::error::Result<DateRange> {
        DateRange::from_days(parse_day(&self.since)?, parse_day(&self.until)?)
    }

    pub fn output_or_default(&self, kind: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.repo_ref().default_output(kind))
    }
}

#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD) [default: earliest commit]")]
    pub start: Option<String>,

    #[arg(long, help = "End date (YYYY-MM-DD) [default: latest commit]")]
    pub end: Option<String>,

    #[arg(long, default_value = DEFAULT_COMMITS_FILE, help = "Input JSON file with commit data")]
    pub input: PathBuf,

    #[arg(long, default_value = DEFAULT_CHART_DIR, help = "Directory for chart images")]
    pub output_dir: PathBuf,

    #[arg(long = "bot-pattern", default_value = DEFAULT_BOT_PATTERN, help = "Author substring marking a bot (repeatable)")]
    pub bot_patterns: Vec<String>,

    #[arg(long, help = "Print the summary without writing charts")]
    pub no_charts: bool,
}

impl From<AnalyzeArgs> for AnalyzeOptions {
    fn from(args: AnalyzeArgs) -> Self {
        AnalyzeOptions {
            input: args.input,
            start: args.start,
            end: args.end,
            output_dir: args.output_dir,
            bots: BotFilter::new(&args.bot_patterns),
            render_charts: !args.no_charts,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch commits in a date range and save them as JSON
    Commits(CollectArgs),
    /// Fetch releases published in a date range and save them as JSON
    Releases(CollectArgs),
    /// Chart and summarise a saved commit file
    Analyze(AnalyzeArgs),
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn github_config(&self) -> GitHubConfig {
        GitHubConfig::new(&self.api_url, self.token.clone())
    }

    pub async fn execute(self) -> Result<()> {
        let github = self.github_config();
        match self.command {
            Commands::Commits(args) => super::commands::commits(&github, &args).await,
            Commands::Releases(args) => super::commands::releases(&github, &args).await,
            Commands::Analyze(args) => super::commands::analyze(args),
        }
    }
}
