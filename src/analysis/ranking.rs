use std::collections::HashSet;

use crate::types::{Aggregate, TimedCommit};
use crate::utils::most_common;

/// Authors with the most commits, highest first.
pub fn top_contributors(commits: &[TimedCommit], n: usize) -> Aggregate {
    most_common(commits.iter().map(|c| c.author().to_string()), n)
}

/// The lowercased first word of a message's first line, without trailing colons.
///
/// `"Fix: another\n\nbody"` gives `"fix"`. Blank messages give `None`.
pub fn commit_type(message: &str) -> Option<String> {
    let first_line = message.trim().lines().next()?.trim();
    let word = first_line.split_whitespace().next()?.to_lowercase();
    let word = word.trim_end_matches(':');
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Most frequent commit types, highest first.
pub fn commit_types(commits: &[TimedCommit], n: usize) -> Aggregate {
    most_common(commits.iter().filter_map(|c| commit_type(c.message())), n)
}

pub fn unique_authors(commits: &[TimedCommit]) -> usize {
    commits
        .iter()
        .map(|c| c.author())
        .collect::<HashSet<_>>()
        .len()
}
