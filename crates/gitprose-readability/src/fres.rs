//! Flesch Reading Ease Score.
//!
//! Higher values mean easier text. The formula is unbounded: very short or
//! very dense texts fall outside the conventional 0–100 range, and no
//! clamping is applied.

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const WORD_LENGTH_WEIGHT: f64 = 84.6;

/// Compute the Flesch Reading Ease Score from raw counts.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
///
/// `sentences` and `words` must both be positive. Callers that cannot
/// guarantee this should go through
/// [`TextStats::score`](crate::body::TextStats::score).
///
/// # Examples
///
/// ```
/// use gitprose_readability::flesch_reading_ease;
///
/// let score = flesch_reading_ease(2, 2, 2);
/// assert!((score - 121.22).abs() < 1e-9);
/// ```
pub fn flesch_reading_ease(sentences: usize, words: usize, syllables: usize) -> f64 {
    debug_assert!(sentences > 0, "sentence count must be positive");
    debug_assert!(words > 0, "word count must be positive");

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;

    BASE - SENTENCE_LENGTH_WEIGHT * words_per_sentence - WORD_LENGTH_WEIGHT * syllables_per_word
}
