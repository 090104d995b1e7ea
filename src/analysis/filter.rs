use crate::config::DEFAULT_BOT_PATTERN;
use crate::types::{CommitRecord, TimedCommit};
use crate::utils::DateRange;

/// Anything that carries a commit author name.
pub trait Authored {
    fn author_name(&self) -> &str;
}

impl Authored for CommitRecord {
    fn author_name(&self) -> &str {
        &self.author
    }
}

impl Authored for TimedCommit {
    fn author_name(&self) -> &str {
        &self.record.author
    }
}

/// Recognises automated committers by author-name substring, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotFilter {
    patterns: Vec<String>,
}

impl BotFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_bot(&self, author: &str) -> bool {
        let author = author.to_lowercase();
        self.patterns.iter().any(|p| author.contains(p.as_str()))
    }

    /// Records whose author is not a bot, in their original order.
    pub fn apply<T: Authored + Clone>(&self, commits: &[T]) -> Vec<T> {
        commits
            .iter()
            .filter(|c| !self.is_bot(c.author_name()))
            .cloned()
            .collect()
    }
}

impl Default for BotFilter {
    fn default() -> Self {
        Self::new([DEFAULT_BOT_PATTERN])
    }
}

/// Drop commits made by dependabot.
pub fn filter_bots<T: Authored + Clone>(commits: &[T]) -> Vec<T> {
    BotFilter::default().apply(commits)
}

/// Commits whose timestamp lies inside `range`, bounds included.
pub fn filter_by_date(commits: &[TimedCommit], range: &DateRange) -> Vec<TimedCommit> {
    commits
        .iter()
        .filter(|c| range.contains(&c.timestamp))
        .cloned()
        .collect()
}
