//! Game engine: letter generation, grid and blank mutation, word
//! feasibility, and the round state machine.

pub mod blanks;
pub mod config;
pub mod feasibility;
pub mod grid;
pub mod round;
pub mod wordlist;

use once_cell::sync::Lazy;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

/// Letter weights approximating English letter frequency. Vowels and the
/// common consonants are over-represented so most grids stay playable.
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 3),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

static LETTER_DIST: Lazy<WeightedIndex<u32>> = Lazy::new(|| {
    let weights: Vec<u32> = LETTER_WEIGHTS.iter().map(|(_, w)| *w).collect();
    WeightedIndex::new(&weights).expect("valid weights")
});

/// Draw one weighted random letter (uppercase).
pub fn random_letter() -> char {
    random_letter_with_rng(&mut rand::rng())
}

/// Draw a letter using a specific RNG (for testing/seeding).
pub fn random_letter_with_rng<R: Rng>(rng: &mut R) -> char {
    LETTER_WEIGHTS[LETTER_DIST.sample(rng)].0
}
