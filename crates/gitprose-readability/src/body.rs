//! Commit message preprocessing.
//!
//! Turns a raw commit message into the sentence, word and syllable counts
//! fed to the scorer.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fres::flesch_reading_ease;
use crate::syllables::estimate_syllables;

/// Counts extracted from one commit message.
///
/// # Examples
///
/// ```
/// use gitprose_readability::analyze_body;
///
/// let stats = analyze_body("Fix bug.");
/// assert_eq!((stats.sentences, stats.words, stats.syllables), (2, 2, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Periods in the message plus one for the subject line.
    pub sentences: usize,
    /// Whitespace-delimited tokens.
    pub words: usize,
    /// Estimated syllables over all tokens.
    pub syllables: usize,
}

impl TextStats {
    /// Flesch Reading Ease Score of these counts, or `None` when there are no
    /// words to score.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitprose_readability::analyze_body;
    ///
    /// assert!(analyze_body("Fix bug.").score().is_some());
    /// assert!(analyze_body("  \n").score().is_none());
    /// ```
    pub fn score(&self) -> Option<f64> {
        if self.words == 0 || self.sentences == 0 {
            return None;
        }
        Some(flesch_reading_ease(self.sentences, self.words, self.syllables))
    }
}

fn uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("URI pattern is valid"))
}

/// Remove every `http://` or `https://` URI from `text`.
///
/// # Examples
///
/// ```
/// use gitprose_readability::body::strip_uris;
///
/// assert_eq!(strip_uris("See https://example.com/a.b for details"), "See  for details");
/// ```
pub fn strip_uris(text: &str) -> std::borrow::Cow<'_, str> {
    uri_pattern().replace_all(text, "")
}

/// Count sentences, words and syllables in a commit message.
///
/// URIs are removed first. Words are whitespace-delimited tokens. The
/// sentence count is the number of `.` characters plus one, assuming a single
/// unterminated subject line.
///
/// # Examples
///
/// ```
/// use gitprose_readability::analyze_body;
///
/// let stats = analyze_body("See https://example.com/issue/42");
/// assert_eq!(stats.words, 1);
/// assert_eq!(stats.sentences, 1);
/// ```
pub fn analyze_body(body: &str) -> TextStats {
    let prose = strip_uris(body);

    let mut words = 0;
    let mut syllables = 0;
    for token in prose.split_whitespace() {
        words += 1;
        syllables += estimate_syllables(token);
    }

    TextStats {
        sentences: prose.matches('.').count() + 1,
        words,
        syllables,
    }
}
