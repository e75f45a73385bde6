//! The feasibility corpus: the ordered word list the engine counts and
//! enumerates formable words against. This is a separate concern from the
//! validity oracle's dictionary; the two need not agree, and a completed
//! word is always judged by the oracle alone.

#![allow(dead_code)]

use once_cell::sync::Lazy;

/// Embedded five-letter word list, one word per line.
static WORDS_DATA: &str = include_str!("../../data/words5.txt");

static BUILTIN: Lazy<Wordlist> = Lazy::new(|| Wordlist::parse(WORDS_DATA));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Parse a word list: one word per line, lowercased, with blank lines
    /// and `#` comments skipped. Order is preserved.
    pub fn parse(data: &str) -> Self {
        let words = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Build a corpus from explicit words (handy for fixed setups).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// The embedded default corpus.
    pub fn builtin() -> &'static Wordlist {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.words.iter().any(|w| *w == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks_and_lowercases() {
        let list = Wordlist::parse("# header\n\nAPPLE\n  beach  \n\n# tail\ncrane\n");
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["apple", "beach", "crane"]);
    }

    #[test]
    fn test_builtin_corpus_is_well_formed() {
        let list = Wordlist::builtin();
        assert!(list.len() > 1000, "corpus too small: {}", list.len());
        for word in list.iter() {
            assert_eq!(word.len(), 5, "bad length: {:?}", word);
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "bad entry: {:?}",
                word
            );
        }
    }

    #[test]
    fn test_builtin_contains_everyday_words() {
        let list = Wordlist::builtin();
        for word in ["about", "house", "water", "plant", "sound"] {
            assert!(list.contains(word), "missing {:?}", word);
        }
        assert!(!list.contains("zzzzz"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = Wordlist::from_words(["Apple"]);
        assert!(list.contains("APPLE"));
        assert!(list.contains("apple"));
    }
}
