//! Word feasibility: which corpus words can still be completed from the
//! current grid and blank pattern. Recomputed from scratch after every
//! mutation; the check is a pure function of grid, pattern, and corpus.

use std::collections::HashMap;

use super::blanks::BlankPattern;
use super::grid::Grid;
use super::wordlist::Wordlist;

/// Snapshot of the feasible words for one grid/pattern state, in corpus
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feasibility {
    words: Vec<String>,
}

impl Feasibility {
    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Enumerate every corpus word still formable from `grid` and `blanks`.
pub fn compute_feasibility(grid: &Grid, blanks: &BlankPattern, corpus: &Wordlist) -> Feasibility {
    let available = available_letters(grid, blanks);
    let words = corpus
        .iter()
        .filter(|word| can_form(word, blanks, &available))
        .map(String::from)
        .collect();
    Feasibility { words }
}

/// True if at least one corpus word is still formable. Early-exits, so
/// this is the cheap check used while screening candidate grids and in
/// the out-of-moves lookahead.
pub fn has_any_feasible(grid: &Grid, blanks: &BlankPattern, corpus: &Wordlist) -> bool {
    let available = available_letters(grid, blanks);
    corpus.iter().any(|word| can_form(word, blanks, &available))
}

/// The shared letter pool: the grid's multiset minus one copy of each
/// committed letter. A letter committed to a slot is no longer available
/// to cover a different slot.
fn available_letters(grid: &Grid, blanks: &BlankPattern) -> HashMap<char, u32> {
    let mut counts = grid.letter_counts();
    for letter in blanks.committed() {
        let key = letter.to_ascii_lowercase();
        if let Some(n) = counts.get_mut(&key) {
            *n -= 1;
            if *n == 0 {
                counts.remove(&key);
            }
        }
    }
    counts
}

/// A word is feasible when it matches the pattern length, agrees with
/// every committed slot positionally, and its remaining letters fit in
/// the available pool as a multiset.
fn can_form(word: &str, blanks: &BlankPattern, available: &HashMap<char, u32>) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() != blanks.len() {
        return false;
    }

    let mut needed: HashMap<char, u32> = HashMap::new();
    for (slot, &c) in blanks.slots().iter().zip(&chars) {
        match slot {
            Some(committed) => {
                if committed.to_ascii_lowercase() != c {
                    return false;
                }
            }
            None => {
                *needed.entry(c).or_insert(0) += 1;
            }
        }
    }

    needed
        .iter()
        .all(|(c, n)| available.get(c).copied().unwrap_or(0) >= *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        Grid::parse(s).unwrap()
    }

    fn corpus(words: &[&str]) -> Wordlist {
        Wordlist::from_words(words.iter().copied())
    }

    #[test]
    fn test_multiset_matching_over_empty_pattern() {
        let g = grid("CATS.\n.....\n.....\nDOGSX");
        let blanks = BlankPattern::new(4);
        let list = corpus(&["cats", "dogs", "cogs", "tads", "mice"]);
        let feas = compute_feasibility(&g, &blanks, &list);
        // Everything except MICE is coverable by the pool.
        assert_eq!(feas.words(), &["cats", "dogs", "cogs", "tads"]);
    }

    #[test]
    fn test_repeated_letters_need_repeated_copies() {
        // GEESE needs three E's beyond the committed G; two in the pool
        // is not enough.
        let g = grid("GES.E\n.....\n.....\n.....");
        let mut blanks = BlankPattern::new(5);
        blanks.fill(0, 'G');
        let list = corpus(&["geese"]);
        assert!(!has_any_feasible(&g, &blanks, &list));

        let g2 = grid("GESEE\n.....\n.....\n.....");
        assert!(has_any_feasible(&g2, &blanks, &list));
    }

    #[test]
    fn test_committed_letters_constrain_positionally() {
        let g = grid("TRAIN\n.....\n.....\n.....");
        let list = corpus(&["train", "brain"]);

        let mut blanks = BlankPattern::new(5);
        blanks.fill(0, 'T');
        let feas = compute_feasibility(&g, &blanks, &list);
        assert_eq!(feas.words(), &["train"]);

        // The same letter committed to the wrong slot kills the word.
        let mut wrong = BlankPattern::new(5);
        wrong.fill(1, 'T');
        assert!(!has_any_feasible(&g, &wrong, &list));
    }

    #[test]
    fn test_committed_letters_leave_the_pool() {
        let list = corpus(&["aba"]);
        let mut blanks = BlankPattern::new(3);
        blanks.fill(0, 'A');

        // Two A's in the grid: one committed, one left for the last slot.
        let g = grid("ABA..\n.....\n.....\n.....");
        assert!(has_any_feasible(&g, &blanks, &list));

        // A single A is consumed by the commitment.
        let g_single = grid("AB...\n.....\n.....\n.....");
        assert!(!has_any_feasible(&g_single, &blanks, &list));
    }

    #[test]
    fn test_committed_repeat_spends_one_of_its_copies() {
        // GEESE with the slot-1 E already placed still needs two more E's
        // from the pool; two grid E's minus the committed one is only one.
        let list = corpus(&["geese"]);
        let mut blanks = BlankPattern::new(5);
        blanks.fill(1, 'E');

        let g = grid("GSEE.\n.....\n.....\n.....");
        assert!(!has_any_feasible(&g, &blanks, &list));

        let g_extra = grid("GSEEE\n.....\n.....\n.....");
        assert!(has_any_feasible(&g_extra, &blanks, &list));
    }

    #[test]
    fn test_reset_and_refill_reproduces_the_result() {
        let g = grid("CATS.\nHOUSE\n.....\n.....");
        let list = corpus(&["cats", "oath", "shoe"]);
        let mut blanks = BlankPattern::new(4);
        blanks.fill(0, 'C');
        blanks.fill(2, 'T');
        let before = compute_feasibility(&g, &blanks, &list);

        blanks.reset();
        blanks.fill(0, 'C');
        blanks.fill(2, 'T');
        let after = compute_feasibility(&g, &blanks, &list);
        assert_eq!(before, after);
    }

    #[test]
    fn test_wrong_length_words_never_match() {
        let g = grid("CATSX\nEEEEE\nEEEEE\nEEEEE");
        let blanks = BlankPattern::new(5);
        let list = corpus(&["cat", "cats", "catnip"]);
        assert!(!has_any_feasible(&g, &blanks, &list));
    }

    #[test]
    fn test_case_is_ignored_between_grid_and_corpus() {
        let g = grid("cats.\n.....\n.....\n.....");
        let mut blanks = BlankPattern::new(4);
        blanks.fill(3, 'S');
        let list = corpus(&["CATS"]);
        assert!(has_any_feasible(&g, &blanks, &list));
    }

    #[test]
    fn test_recompute_is_deterministic_and_read_only() {
        let g = grid("SATEH\nRLNIO\nPCUDM\nGEABY");
        let mut blanks = BlankPattern::new(5);
        blanks.fill(2, 'A');
        let list = Wordlist::builtin().clone();

        let first = compute_feasibility(&g, &blanks, &list);
        let second = compute_feasibility(&g, &blanks, &list);
        assert_eq!(first, second);
        assert!(first.count() > 0);
        for word in first.words() {
            assert_eq!(word.as_bytes()[2], b'a');
        }
    }

    #[test]
    fn test_complete_pattern_feasibility_is_exact_membership() {
        let g = grid(".....\n.....\n.....\n.....");
        let mut blanks = BlankPattern::new(5);
        for (i, c) in "CRANE".chars().enumerate() {
            blanks.fill(i, c);
        }
        let list = corpus(&["crane", "crate"]);
        let feas = compute_feasibility(&g, &blanks, &list);
        assert_eq!(feas.words(), &["crane"]);
    }

    #[test]
    fn test_empty_corpus_means_nothing_feasible() {
        let g = grid("ABCDE\nFGHIJ\nKLMNO\nPQRST");
        let blanks = BlankPattern::new(5);
        assert!(!has_any_feasible(&g, &blanks, &corpus(&[])));
        assert_eq!(compute_feasibility(&g, &blanks, &corpus(&[])).count(), 0);
    }
}
