//! Per-author score aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mean readability of one author's commits.
///
/// # Examples
///
/// ```
/// use gitprose_readability::AuthorScore;
///
/// let row = AuthorScore {
///     author: "alice".into(),
///     mean_score: 64.2,
///     commits: 12,
/// };
/// assert_eq!(row.commits, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorScore {
    /// Author name.
    pub author: String,
    /// Arithmetic mean of the author's commit scores.
    pub mean_score: f64,
    /// Number of scored commits behind the mean.
    pub commits: usize,
}

/// Accumulates commit scores per author.
///
/// Create one per run and feed it every scored commit; [`report`](Self::report)
/// then yields one row per author, sorted by name.
///
/// # Examples
///
/// ```
/// use gitprose_readability::ScoreAggregator;
///
/// let mut scores = ScoreAggregator::new();
/// scores.record("bob", 40.0);
/// scores.record("alice", 70.0);
/// scores.record("bob", 60.0);
///
/// let report = scores.report();
/// assert_eq!(report[0].author, "alice");
/// assert_eq!(report[1].author, "bob");
/// assert_eq!(report[1].mean_score, 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    scores: HashMap<String, Vec<f64>>,
}

impl ScoreAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one commit score for `author`.
    pub fn record(&mut self, author: &str, score: f64) {
        match self.scores.get_mut(author) {
            Some(scores) => scores.push(score),
            None => {
                self.scores.insert(author.to_string(), vec![score]);
            }
        }
    }

    /// Fold another accumulator into this one.
    ///
    /// Lets independent workers score disjoint commits and combine their
    /// results at the end.
    pub fn merge(&mut self, other: ScoreAggregator) {
        for (author, scores) in other.scores {
            self.scores.entry(author).or_default().extend(scores);
        }
    }

    /// Number of distinct authors recorded.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Total number of scores recorded across all authors.
    pub fn total_scores(&self) -> usize {
        self.scores.values().map(Vec::len).sum()
    }

    /// Mean score per author, sorted by author name (byte order).
    pub fn report(&self) -> Vec<AuthorScore> {
        let mut rows: Vec<AuthorScore> = self
            .scores
            .iter()
            .filter(|(_, scores)| !scores.is_empty())
            .map(|(author, scores)| AuthorScore {
                author: author.clone(),
                mean_score: scores.iter().sum::<f64>() / scores.len() as f64,
                commits: scores.len(),
            })
            .collect();

        rows.sort_by(|a, b| a.author.cmp(&b.author));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregator_reports_nothing() {
        let scores = ScoreAggregator::new();
        assert!(scores.is_empty());
        assert!(scores.report().is_empty());
    }

    #[test]
    fn one_row_per_author_with_the_mean() {
        let mut scores = ScoreAggregator::new();
        let input = [
            ("carol", 10.0),
            ("alice", 80.0),
            ("carol", 20.0),
            ("alice", 60.0),
            ("carol", -30.0),
            ("bob", 55.5),
        ];
        for (author, score) in input {
            scores.record(author, score);
        }

        let report = scores.report();
        assert_eq!(report.len(), 3);
        assert_eq!(scores.total_scores(), input.len());

        let alice = &report[0];
        assert_eq!(alice.author, "alice");
        assert_eq!(alice.commits, 2);
        assert!((alice.mean_score - 70.0).abs() < 1e-9);

        let bob = &report[1];
        assert_eq!(bob.author, "bob");
        assert!((bob.mean_score - 55.5).abs() < 1e-9);

        let carol = &report[2];
        assert_eq!(carol.commits, 3);
        assert!(carol.mean_score.abs() < 1e-9);
    }

    #[test]
    fn sorts_by_byte_order_not_locale() {
        let mut scores = ScoreAggregator::new();
        for author in ["bob", "Zoe", "alice", "Émile", "Bob"] {
            scores.record(author, 1.0);
        }
        let authors: Vec<_> = scores.report().into_iter().map(|r| r.author).collect();
        assert_eq!(authors, vec!["Bob", "Zoe", "alice", "bob", "Émile"]);
    }

    #[test]
    fn merge_combines_workers() {
        let mut left = ScoreAggregator::new();
        left.record("alice", 10.0);
        left.record("bob", 50.0);

        let mut right = ScoreAggregator::new();
        right.record("alice", 30.0);
        right.record("dave", 5.0);

        left.merge(right);
        let report = left.report();
        assert_eq!(report.len(), 3);
        assert_eq!(report[0].author, "alice");
        assert_eq!(report[0].commits, 2);
        assert!((report[0].mean_score - 20.0).abs() < 1e-9);
        assert_eq!(report[2].author, "dave");
    }

    #[test]
    fn report_is_repeatable() {
        let mut scores = ScoreAggregator::new();
        scores.record("alice", 12.5);
        scores.record("bob", 99.0);
        assert_eq!(scores.report(), scores.report());
    }
}
