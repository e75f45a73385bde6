//! The round state machine: owns the grid and blank pattern, applies
//! player actions against the budgets, recomputes feasibility after every
//! mutation, and decides when a round ends.

#![allow(dead_code)]

use std::sync::Arc;

use rand::prelude::*;
use rand::rngs::StdRng;

use super::blanks::BlankPattern;
use super::config::{DropStyle, LossRule, RoundConfig};
use super::feasibility::{compute_feasibility, has_any_feasible, Feasibility};
use super::grid::Grid;
use super::wordlist::Wordlist;
use crate::oracle::Verdict;

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The live feasibility count reached zero.
    NoWordsPossible,
    /// Budgets are spent and no remaining drop can lead to a word.
    OutOfMoves,
    /// The countdown expired (timed variant).
    TimedOut,
}

impl LossReason {
    pub fn message(&self) -> &'static str {
        match self {
            LossReason::NoWordsPossible => "There are no words possible. Game over",
            LossReason::OutOfMoves => "No move can reach a word. Game over",
            LossReason::TimedOut => "Time's up. Game over",
        }
    }
}

/// Where the round currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting drop, shift, and delete actions.
    Playing,
    /// The pattern is complete and an oracle verdict is outstanding;
    /// every action is refused until it resolves.
    AwaitingVerdict { word: String },
    Won { word: String, score: u32 },
    Lost { reason: LossReason },
}

/// Outcome of one player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// The action mutated the round and play continues.
    Applied,
    /// The drop completed the pattern. The caller must submit `word` to
    /// the oracle and feed the answer back via [`Round::resolve_verdict`].
    WordCompleted { word: String, generation: u64 },
    /// Nothing happened and no budget was spent: wrong phase, empty cell
    /// or slot, exhausted budget, or out-of-range target.
    Rejected,
}

/// What [`Round::resolve_verdict`] did with a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictOutcome {
    Won,
    /// The oracle rejected the word; the pattern was cleared and play
    /// resumed.
    WordRejected,
    /// The oracle could not answer; treated like a rejection so the round
    /// is never stranded.
    OracleUnreachable,
    /// Stale generation or no verdict outstanding; nothing changed.
    Ignored,
}

/// A single game round.
pub struct Round {
    config: RoundConfig,
    corpus: Arc<Wordlist>,
    /// Identity used to match oracle verdicts to this round.
    generation: u64,
    grid: Grid,
    blanks: BlankPattern,
    shifts_remaining: u32,
    deletes_remaining: u32,
    shift_count: u32,
    delete_count: u32,
    time_remaining: Option<u32>,
    phase: Phase,
    feasibility: Feasibility,
    /// Feasible-word count right after setup; fixes the round's score.
    initial_count: usize,
    setup_attempts: u32,
    rng: StdRng,
}

impl Round {
    /// Start a round on a freshly generated grid. Candidate grids are
    /// rerolled until, after the seed drop, at least
    /// `config.min_feasible_words` words are feasible; if every attempt
    /// falls short a plain grid is accepted rather than failing.
    pub fn new(
        config: RoundConfig,
        corpus: Arc<Wordlist>,
        generation: u64,
        mut rng: StdRng,
    ) -> Self {
        let (grid, blanks, setup_attempts) = setup_board(&config, &corpus, &mut rng);
        Self::finish_setup(config, corpus, generation, rng, grid, blanks, setup_attempts)
    }

    /// Start a round over a fixed grid: no reroll screening and no seed
    /// drop. Used for deterministic setups.
    pub fn from_grid(
        config: RoundConfig,
        grid: Grid,
        corpus: Arc<Wordlist>,
        generation: u64,
        rng: StdRng,
    ) -> Self {
        let blanks = BlankPattern::new(config.blank_len);
        Self::finish_setup(config, corpus, generation, rng, grid, blanks, 0)
    }

    fn finish_setup(
        config: RoundConfig,
        corpus: Arc<Wordlist>,
        generation: u64,
        rng: StdRng,
        grid: Grid,
        blanks: BlankPattern,
        setup_attempts: u32,
    ) -> Self {
        let feasibility = compute_feasibility(&grid, &blanks, &corpus);
        let initial_count = feasibility.count();
        let mut round = Self {
            shifts_remaining: config.shift_budget,
            deletes_remaining: config.delete_budget,
            shift_count: 0,
            delete_count: 0,
            time_remaining: config.countdown_secs,
            phase: Phase::Playing,
            config,
            corpus,
            generation,
            grid,
            blanks,
            feasibility,
            initial_count,
            setup_attempts,
            rng,
        };
        round.check_termination();
        round
    }

    /// Drop the bottom letter of `col` into the pattern slot of the same
    /// index.
    pub fn drop_letter(&mut self, col: usize) -> ActionResult {
        if !matches!(self.phase, Phase::Playing) {
            return ActionResult::Rejected;
        }
        if !self.blanks.can_fill(col) {
            return ActionResult::Rejected;
        }
        let letter = match self.config.drop_style {
            DropStyle::Deplete => self.grid.drop_from_bottom(col),
            DropStyle::Refill => self.grid.drop_and_refill(col, &mut self.rng),
        };
        let Some(letter) = letter else {
            return ActionResult::Rejected;
        };
        self.blanks.fill(col, letter);
        self.recompute();
        if self.blanks.is_complete() {
            let word = self.blanks.word().unwrap_or_default();
            self.phase = Phase::AwaitingVerdict { word: word.clone() };
            return ActionResult::WordCompleted {
                word,
                generation: self.generation,
            };
        }
        self.check_termination();
        ActionResult::Applied
    }

    /// Rotate the letters of `row` one step right. Costs one shift; a row
    /// with fewer than two letters is refused and the budget is kept.
    pub fn shift_row(&mut self, row: usize) -> ActionResult {
        if !matches!(self.phase, Phase::Playing) || self.shifts_remaining == 0 {
            return ActionResult::Rejected;
        }
        if !self.grid.rotate_row_right(row) {
            return ActionResult::Rejected;
        }
        self.shifts_remaining -= 1;
        self.shift_count += 1;
        self.recompute();
        self.check_termination();
        ActionResult::Applied
    }

    /// Delete `row` from the grid. Costs one delete; a row with no
    /// letters is refused and the budget is kept.
    pub fn delete_row(&mut self, row: usize) -> ActionResult {
        if !matches!(self.phase, Phase::Playing) || self.deletes_remaining == 0 {
            return ActionResult::Rejected;
        }
        if self.grid.row_letter_count(row) == 0 {
            return ActionResult::Rejected;
        }
        self.grid.delete_row(row);
        self.deletes_remaining -= 1;
        self.delete_count += 1;
        self.recompute();
        self.check_termination();
        ActionResult::Applied
    }

    /// Apply an oracle verdict. Verdicts from a different generation are
    /// discarded, so an answer that raced a restart can never touch the
    /// new round.
    pub fn resolve_verdict(&mut self, verdict: &Verdict) -> VerdictOutcome {
        if verdict.generation != self.generation {
            return VerdictOutcome::Ignored;
        }
        let word = match &self.phase {
            Phase::AwaitingVerdict { word } => word.clone(),
            _ => return VerdictOutcome::Ignored,
        };
        match &verdict.result {
            Ok(true) => {
                let score = self.final_score();
                self.phase = Phase::Won { word, score };
                VerdictOutcome::Won
            }
            Ok(false) => {
                self.resume_after_failed_word();
                VerdictOutcome::WordRejected
            }
            Err(_) => {
                self.resume_after_failed_word();
                VerdictOutcome::OracleUnreachable
            }
        }
    }

    /// Advance the countdown by one second. The timer only runs while the
    /// round is accepting actions; a pending verdict or a finished round
    /// is never expired.
    pub fn tick(&mut self) {
        if !matches!(self.phase, Phase::Playing) {
            return;
        }
        if let Some(t) = self.time_remaining.as_mut() {
            if *t > 0 {
                *t -= 1;
                if *t == 0 {
                    self.phase = Phase::Lost {
                        reason: LossReason::TimedOut,
                    };
                }
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blanks(&self) -> &BlankPattern {
        &self.blanks
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn feasibility(&self) -> &Feasibility {
        &self.feasibility
    }

    pub fn shifts_remaining(&self) -> u32 {
        self.shifts_remaining
    }

    pub fn deletes_remaining(&self) -> u32 {
        self.deletes_remaining
    }

    pub fn shift_count(&self) -> u32 {
        self.shift_count
    }

    pub fn delete_count(&self) -> u32 {
        self.delete_count
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn initial_feasible_count(&self) -> usize {
        self.initial_count
    }

    pub fn setup_attempts(&self) -> u32 {
        self.setup_attempts
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won { .. } | Phase::Lost { .. })
    }

    /// Difficulty rating of the starting grid in `0.0..=1.0`; fewer
    /// initially feasible words rate higher.
    pub fn complexity(&self) -> f64 {
        complexity_for(self.initial_count)
    }

    /// Score frozen at the win transition: ten points per unused action
    /// plus up to one hundred for a hard starting grid.
    fn final_score(&self) -> u32 {
        let bonus = (self.complexity() * 100.0).round() as u32;
        10 * self.deletes_remaining + 10 * self.shifts_remaining + bonus
    }

    fn resume_after_failed_word(&mut self) {
        self.blanks.reset();
        self.phase = Phase::Playing;
        self.recompute();
        self.check_termination();
    }

    fn recompute(&mut self) {
        self.feasibility = compute_feasibility(&self.grid, &self.blanks, &self.corpus);
    }

    /// Loss check, run after every mutation. Never fires while a verdict
    /// is outstanding or the pattern is complete: a word the corpus does
    /// not know may still be accepted by the oracle.
    fn check_termination(&mut self) {
        if !matches!(self.phase, Phase::Playing) || self.blanks.is_complete() {
            return;
        }
        match self.config.loss_rule {
            LossRule::ImmediateZero => {
                if self.feasibility.count() == 0 {
                    self.phase = Phase::Lost {
                        reason: LossReason::NoWordsPossible,
                    };
                }
            }
            LossRule::BudgetsExhausted => {
                if self.shifts_remaining == 0
                    && self.deletes_remaining == 0
                    && !self.any_drop_viable()
                {
                    self.phase = Phase::Lost {
                        reason: LossReason::OutOfMoves,
                    };
                }
            }
        }
    }

    /// Exhaustive lookahead for the strict loss rule: could committing
    /// any letter still in the grid to any empty slot leave at least one
    /// word feasible?
    fn any_drop_viable(&self) -> bool {
        let letters: Vec<char> = self.grid.letter_counts().keys().copied().collect();
        for slot in self.blanks.empty_slots() {
            for &letter in &letters {
                let mut trial = self.blanks.clone();
                trial.fill(slot, letter);
                if has_any_feasible(&self.grid, &trial, &self.corpus) {
                    return true;
                }
            }
        }
        false
    }
}

/// Screen candidate grids the way a fresh round wants them: generate,
/// require at least one feasible word, seed one letter into a random
/// slot, and accept once the feasible count clears the configured floor.
fn setup_board(
    config: &RoundConfig,
    corpus: &Wordlist,
    rng: &mut StdRng,
) -> (Grid, BlankPattern, u32) {
    let mut attempts = 0;
    while attempts < config.max_grid_attempts {
        attempts += 1;
        let mut grid = Grid::generate(config.rows, config.cols, rng);
        let mut blanks = BlankPattern::new(config.blank_len);
        if !has_any_feasible(&grid, &blanks, corpus) {
            continue;
        }
        seed_drop(&mut grid, &mut blanks, rng);
        if compute_feasibility(&grid, &blanks, corpus).count() >= config.min_feasible_words {
            return (grid, blanks, attempts);
        }
    }
    // Every candidate fell short; play the last roll as it lands.
    let grid = Grid::generate(config.rows, config.cols, rng);
    (grid, BlankPattern::new(config.blank_len), attempts)
}

/// Move one letter from a random non-empty bottom column into a random
/// empty slot, refilling the vacated cell so the starting grid is full.
fn seed_drop(grid: &mut Grid, blanks: &mut BlankPattern, rng: &mut StdRng) {
    let candidates: Vec<usize> = grid
        .bottom_row()
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.map(|_| i))
        .collect();
    let Some(&col) = candidates.choose(rng) else {
        return;
    };
    let empty = blanks.empty_slots();
    let Some(&slot) = empty.choose(rng) else {
        return;
    };
    if let Some(letter) = grid.drop_and_refill(col, rng) {
        blanks.fill(slot, letter);
    }
}

fn complexity_for(initial_count: usize) -> f64 {
    (1.0 - initial_count as f64 / 400.0).clamp(0.0, 1.0)
}
