//! Scoring a whole commit log.

use gitprose_core::{CommitRecord, SkipReason, SkippedCommit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::{AuthorScore, ScoreAggregator};
use crate::body::analyze_body;

/// Per-author readability of a commit log.
///
/// # Examples
///
/// ```
/// use gitprose_readability::ReadabilityReport;
///
/// let report = ReadabilityReport::default();
/// assert!(report.authors.is_empty());
/// assert_eq!(report.commits_scored, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Commits that produced a score.
    pub commits_scored: usize,
    /// One row per author, sorted by name.
    pub authors: Vec<AuthorScore>,
    /// Commits that produced no score.
    pub skipped: Vec<SkippedCommit>,
}

impl ReadabilityReport {
    /// Append commits skipped before scoring, e.g. by the log extractor.
    pub fn add_skipped(&mut self, skipped: impl IntoIterator<Item = SkippedCommit>) {
        self.skipped.extend(skipped);
    }
}

/// Readability score of a single commit message, or `None` if it has no words.
///
/// # Examples
///
/// ```
/// use gitprose_readability::score_body;
///
/// let score = score_body("Fix bug.").unwrap();
/// assert!((score - 121.22).abs() < 1e-9);
/// assert!(score_body("").is_none());
/// ```
pub fn score_body(body: &str) -> Option<f64> {
    analyze_body(body).score()
}

/// Score every commit and average the scores per author.
///
/// Commits whose message has no words once URIs are removed are skipped and
/// listed in [`ReadabilityReport::skipped`]; they never abort the run.
///
/// # Examples
///
/// ```
/// use gitprose_core::CommitRecord;
/// use gitprose_readability::score_commits;
///
/// let commits = vec![
///     CommitRecord { hash: "a1".into(), author: "alice".into(), body: "Fix bug.".into() },
///     CommitRecord { hash: "b2".into(), author: "bob".into(), body: "".into() },
/// ];
/// let report = score_commits(&commits);
/// assert_eq!(report.commits_scored, 1);
/// assert_eq!(report.authors.len(), 1);
/// assert_eq!(report.skipped.len(), 1);
/// ```
pub fn score_commits(commits: &[CommitRecord]) -> ReadabilityReport {
    let mut scores = ScoreAggregator::new();
    let mut skipped = Vec::new();

    for commit in commits {
        match score_body(&commit.body) {
            Some(score) => {
                debug!(commit = %commit.hash, author = %commit.author, score, "scored commit");
                scores.record(&commit.author, score);
            }
            None => {
                warn!(commit = %commit.hash, author = %commit.author, "skipping commit with no words");
                skipped.push(SkippedCommit::new(commit.hash.clone(), SkipReason::EmptyBody));
            }
        }
    }

    ReadabilityReport {
        commits_scored: scores.total_scores(),
        authors: scores.report(),
        skipped,
    }
}
