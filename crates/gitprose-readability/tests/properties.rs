//! Property-based tests for the scoring pipeline.
//!
//! Invariants that must hold for all inputs:
//! - Short tokens: any token of at most three characters with a letter is one syllable
//! - Symbols: any token without a letter is zero syllables
//! - Case: estimation ignores ASCII case
//! - Aggregation: one row per author, the arithmetic mean, sorted by name

use std::collections::BTreeMap;

use gitprose_core::CommitRecord;
use gitprose_readability::{estimate_syllables, score_commits, ScoreAggregator};
use proptest::prelude::*;

/// At most three characters, no `/`, at least one ASCII letter somewhere.
fn short_token() -> impl Strategy<Value = String> {
    ("[a-zA-Z]", "[^/]{0,2}", 0usize..3).prop_map(|(letter, rest, at)| {
        let mut chars: Vec<char> = rest.chars().collect();
        let at = at.min(chars.len());
        chars.insert(at, letter.chars().next().unwrap_or('a'));
        chars.into_iter().collect()
    })
}

fn score_entries() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(("[a-e]{1,3}", -500.0f64..500.0), 1..40)
}

proptest! {
    #[test]
    fn short_tokens_with_a_letter_are_one_syllable(token in short_token()) {
        prop_assert!(token.chars().count() <= 3);
        prop_assert_eq!(estimate_syllables(&token), 1);
    }

    #[test]
    fn tokens_without_letters_are_zero_syllables(token in "[^a-zA-Z]{0,16}") {
        prop_assert_eq!(estimate_syllables(&token), 0);
    }

    #[test]
    fn estimation_ignores_case(word in "[ -~]{0,16}") {
        let expected = estimate_syllables(&word);
        prop_assert_eq!(estimate_syllables(&word.to_uppercase()), expected);
        prop_assert_eq!(estimate_syllables(&word.to_lowercase()), expected);
    }

    #[test]
    fn estimation_is_deterministic(word in "\\PC{0,24}") {
        prop_assert_eq!(estimate_syllables(&word), estimate_syllables(&word));
    }

    #[test]
    fn report_has_one_sorted_mean_per_author(entries in score_entries()) {
        let mut scores = ScoreAggregator::new();
        let mut expected: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for (author, score) in &entries {
            scores.record(author, *score);
            expected.entry(author.as_str()).or_default().push(*score);
        }

        let report = scores.report();
        prop_assert_eq!(report.len(), expected.len());
        prop_assert!(report.windows(2).all(|pair| pair[0].author < pair[1].author));

        for (row, (author, values)) in report.iter().zip(&expected) {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            prop_assert_eq!(row.author.as_str(), *author);
            prop_assert_eq!(row.commits, values.len());
            prop_assert!((row.mean_score - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn scoring_a_log_twice_gives_the_same_report(
        bodies in prop::collection::vec(("[a-c]", "[ -~\n]{0,80}"), 0..20)
    ) {
        let log: Vec<CommitRecord> = bodies
            .into_iter()
            .enumerate()
            .map(|(i, (author, body))| CommitRecord { hash: i.to_string(), author, body })
            .collect();

        let first = score_commits(&log);
        prop_assert_eq!(first.commits_scored + first.skipped.len(), log.len());
        prop_assert_eq!(first, score_commits(&log));
    }
}
