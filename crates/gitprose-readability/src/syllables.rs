//! Orthographic syllable estimation.
//!
//! No dictionary and no phonetics: the count is derived from the spelling of
//! an English word by stripping common silent endings and counting vowel
//! groups.

/// Estimate the number of syllables in a single whitespace-delimited token.
///
/// Tokens that look like paths (more than one `/`) or contain no ASCII letter
/// count as zero. Tokens of at most three characters count as one. Longer
/// tokens are uppercased, stripped to `A`–`Z`, trimmed of a trailing `ES`/`ED`
/// and of a silent trailing `E`, and then their vowel groups are counted.
/// Words starting with `Mc` get one extra syllable.
///
/// # Examples
///
/// ```
/// use gitprose_readability::estimate_syllables;
///
/// assert_eq!(estimate_syllables("the"), 1);
/// assert_eq!(estimate_syllables("readability"), 4);
/// assert_eq!(estimate_syllables("McDonald"), 3);
/// assert_eq!(estimate_syllables("src/lib/mod.rs"), 0);
/// assert_eq!(estimate_syllables("1234"), 0);
/// ```
pub fn estimate_syllables(token: &str) -> usize {
    if token.matches('/').count() > 1 {
        return 0;
    }

    if !token.chars().any(|c| c.is_ascii_alphabetic()) {
        return 0;
    }

    if token.chars().count() <= 3 {
        return 1;
    }

    let cleaned = clean(token);
    let stem = strip_silent_endings(&cleaned);

    let mut syllables = count_vowel_groups(stem);
    if cleaned.starts_with("MC") {
        syllables += 1;
    }
    syllables
}

/// Uppercase `token` and drop everything outside `A`–`Z`.
fn clean(token: &str) -> String {
    token
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Drop a trailing `ES`/`ED`, then a trailing `E` not preceded by `L`.
///
/// The silent-`E` rule removes two characters, not one. Scores produced by
/// earlier releases depend on it.
fn strip_silent_endings(word: &str) -> &str {
    let mut stem = word;

    if stem.ends_with("ES") || stem.ends_with("ED") {
        stem = &stem[..stem.len() - 2];
    }

    if let Some(rest) = stem.strip_suffix('E') {
        if !rest.ends_with('L') {
            stem = &stem[..stem.len().saturating_sub(2)];
        }
    }

    stem
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Number of maximal vowel runs in an uppercase word.
fn count_vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_count_as_one() {
        for word in ["a", "I", "at", "the", "Fix", "ab.", "x1", "a/b"] {
            assert_eq!(estimate_syllables(word), 1, "word: {word}");
        }
    }

    #[test]
    fn tokens_without_letters_count_as_zero() {
        for token in ["", ".", "...", "42", "1234", "--", "#123", "(!)", "|"] {
            assert_eq!(estimate_syllables(token), 0, "token: {token:?}");
        }
    }

    #[test]
    fn paths_count_as_zero() {
        assert_eq!(estimate_syllables("src/main.rs/"), 0);
        assert_eq!(estimate_syllables("crates/core/src/lib.rs"), 0);
        // A single slash is not a path.
        assert_eq!(estimate_syllables("and/or"), 2);
    }

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(estimate_syllables("readability"), 4);
        assert_eq!(estimate_syllables("Refactor"), 3);
        assert_eq!(estimate_syllables("Initial"), 3);
        assert_eq!(estimate_syllables("commit."), 2);
        assert_eq!(estimate_syllables("clarity"), 2);
        assert_eq!(estimate_syllables("bug."), 1);
    }

    #[test]
    fn trailing_es_and_ed_are_dropped() {
        assert_eq!(estimate_syllables("boxes"), 1);
        assert_eq!(estimate_syllables("fixed"), 1);
        assert_eq!(estimate_syllables("added"), 1);
    }

    #[test]
    fn trailing_le_is_kept() {
        assert_eq!(estimate_syllables("table"), 2);
        assert_eq!(estimate_syllables("module"), 3);
    }

    #[test]
    fn silent_e_removes_two_characters() {
        // MAKE -> MA
        assert_eq!(estimate_syllables("make"), 1);
        // QUEUE -> QUE
        assert_eq!(estimate_syllables("queue"), 1);
        // SPEED -> SPE -> S
        assert_eq!(estimate_syllables("speed."), 0);
        assert_eq!(strip_silent_endings("SPE"), "S");
        assert_eq!(strip_silent_endings("MAKE"), "MA");
    }

    #[test]
    fn endings_on_tiny_words_do_not_underflow() {
        assert_eq!(strip_silent_endings(""), "");
        assert_eq!(strip_silent_endings("E"), "");
        assert_eq!(strip_silent_endings("ES"), "");
        assert_eq!(estimate_syllables("e..."), 0);
        assert_eq!(estimate_syllables("es--"), 0);
    }

    #[test]
    fn mc_prefix_adds_a_syllable() {
        // MCDONALD: O, A plus the MC bonus.
        assert_eq!(count_vowel_groups("MCDONALD"), 2);
        assert_eq!(estimate_syllables("McDonald"), 3);
        assert_eq!(estimate_syllables("McKay"), 2);
    }

    #[test]
    fn estimation_is_case_insensitive() {
        for word in ["McDonald", "Refactor", "readability", "Table", "queue"] {
            let expected = estimate_syllables(word);
            assert_eq!(estimate_syllables(&word.to_uppercase()), expected);
            assert_eq!(estimate_syllables(&word.to_lowercase()), expected);
        }
    }

    #[test]
    fn punctuation_is_stripped_before_counting() {
        assert_eq!(
            estimate_syllables("\"readability\","),
            estimate_syllables("readability")
        );
        assert_eq!(estimate_syllables("don't"), 1);
    }

    #[test]
    fn vowel_groups_collapse_runs() {
        assert_eq!(count_vowel_groups("OOO"), 1);
        assert_eq!(count_vowel_groups("BOOK"), 1);
        assert_eq!(count_vowel_groups("AEIOU"), 1);
        assert_eq!(count_vowel_groups("BANANA"), 3);
        assert_eq!(count_vowel_groups("RHYTHM"), 0);
    }
}
