#![allow(dead_code)]
//! Application state management

use std::sync::Arc;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::config::RoundConfig;
use crate::game::grid::Grid;
use crate::game::round::{ActionResult, Round, VerdictOutcome};
use crate::game::wordlist::Wordlist;
use crate::oracle::{OracleClient, OracleError, Verdict};

/// Main application state: one live round plus the UI-facing bits around
/// it.
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// One-line status under the grid (oracle feedback, mostly)
    pub message: String,
    /// Whether the possible-words panel is open
    pub show_words: bool,
    /// Grid row targeted by the delete key
    pub selected_row: usize,
    config: RoundConfig,
    corpus: Arc<Wordlist>,
    round: Round,
    oracle: OracleClient,
    /// Generation handed to the next round; one higher than the live one
    next_generation: u64,
    /// Master RNG; each round gets a child RNG split off from it
    rng: StdRng,
}

impl App {
    pub fn new(config: RoundConfig, corpus: Arc<Wordlist>, oracle: OracleClient) -> Self {
        Self::with_rng(config, corpus, oracle, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`App::new`] but with a caller-supplied RNG, so whole
    /// sessions can be reproduced from a seed.
    pub fn with_rng(
        config: RoundConfig,
        corpus: Arc<Wordlist>,
        oracle: OracleClient,
        mut rng: StdRng,
    ) -> Self {
        let round = Round::new(
            config.clone(),
            corpus.clone(),
            1,
            StdRng::from_rng(&mut rng),
        );
        let selected_row = config.rows.saturating_sub(1);
        Self {
            should_quit: false,
            message: String::new(),
            show_words: false,
            selected_row,
            config,
            corpus,
            round,
            oracle,
            next_generation: 2,
            rng,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a digit key: drop the bottom letter of that column into the
    /// pattern slot of the same index (1-based on the keyboard).
    pub fn on_digit(&mut self, digit: usize) {
        if digit == 0 {
            return;
        }
        match self.round.drop_letter(digit - 1) {
            ActionResult::Applied => self.message.clear(),
            ActionResult::WordCompleted { word, generation } => {
                self.message = format!("Checking \"{}\"...", word.to_uppercase());
                if let Err(err) = self.oracle.submit(generation, &word) {
                    // Worker gone; answer for it so the round is not
                    // stranded waiting.
                    self.apply_verdict(&Verdict {
                        generation,
                        word,
                        result: Err(err),
                    });
                }
            }
            ActionResult::Rejected => {}
        }
    }

    /// Rotate the bottom row one step right (`s` key).
    pub fn on_shift(&mut self) {
        let bottom = self.round.grid().rows().saturating_sub(1);
        if self.round.shift_row(bottom) == ActionResult::Applied {
            self.message.clear();
        }
    }

    /// Delete the selected row (`x` key).
    pub fn on_delete(&mut self) {
        if self.round.delete_row(self.selected_row) == ActionResult::Applied {
            self.message.clear();
        }
    }

    /// Move the row cursor up (toward the top of the grid).
    pub fn on_row_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move the row cursor down.
    pub fn on_row_down(&mut self) {
        let bottom = self.round.grid().rows().saturating_sub(1);
        if self.selected_row < bottom {
            self.selected_row += 1;
        }
    }

    /// Toggle the possible-words panel (`p` key).
    pub fn toggle_words(&mut self) {
        self.show_words = !self.show_words;
    }

    /// Drain oracle verdicts and feed them to the round.
    pub fn poll_oracle(&mut self) {
        for verdict in self.oracle.recv_all() {
            self.apply_verdict(&verdict);
        }
    }

    /// Forward the one-second timer tick.
    pub fn tick(&mut self) {
        self.round.tick();
    }

    /// Start a fresh randomly generated round (`n` key).
    pub fn play_again(&mut self) {
        let generation = self.take_generation();
        let rng = StdRng::from_rng(&mut self.rng);
        let round = Round::new(self.config.clone(), self.corpus.clone(), generation, rng);
        self.install_round(round);
    }

    /// Start a fresh round over a fixed grid (deterministic setups).
    pub fn start_round_with_grid(&mut self, grid: Grid) {
        let generation = self.take_generation();
        let rng = StdRng::from_rng(&mut self.rng);
        let round = Round::from_grid(
            self.config.clone(),
            grid,
            self.corpus.clone(),
            generation,
            rng,
        );
        self.install_round(round);
    }

    fn take_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    fn install_round(&mut self, round: Round) {
        self.round = round;
        self.message.clear();
        self.show_words = false;
        self.selected_row = self.round.grid().rows().saturating_sub(1);
    }

    fn apply_verdict(&mut self, verdict: &Verdict) {
        match self.round.resolve_verdict(verdict) {
            VerdictOutcome::Won => self.message.clear(),
            VerdictOutcome::WordRejected => {
                self.message = format!(
                    "\"{}\" is not a valid word. Try again!",
                    verdict.word.to_uppercase()
                );
            }
            VerdictOutcome::OracleUnreachable => {
                self.message = OracleError::Unreachable.message().to_string();
            }
            VerdictOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::Phase;
    use crate::oracle::{WordOracle, WordSetOracle};
    use std::thread;
    use std::time::Duration;

    struct DownOracle;

    impl WordOracle for DownOracle {
        fn check(&self, _word: &str) -> Result<bool, OracleError> {
            Err(OracleError::Unreachable)
        }
    }

    fn small_config() -> RoundConfig {
        RoundConfig {
            rows: 1,
            cols: 3,
            blank_len: 3,
            max_grid_attempts: 3,
            ..RoundConfig::default()
        }
    }

    fn app_with(oracle_words: &[&str], corpus_words: &[&str]) -> App {
        let oracle = OracleClient::spawn(Box::new(WordSetOracle::new(oracle_words.to_vec())));
        App::with_rng(
            small_config(),
            Arc::new(Wordlist::from_words(corpus_words.iter().copied())),
            oracle,
            StdRng::seed_from_u64(5),
        )
    }

    /// Keep polling until the round leaves the awaiting phase.
    fn wait_for_resolution(app: &mut App) {
        for _ in 0..100 {
            app.poll_oracle();
            if !matches!(app.round().phase(), Phase::AwaitingVerdict { .. }) {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_digit_drop_fills_matching_slot() {
        let mut app = app_with(&["cat"], &["cat"]);
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        app.on_digit(1);
        assert_eq!(app.round().blanks().slot(0), Some('C'));
        assert_eq!(app.round().grid().cell(0, 0), None);
    }

    #[test]
    fn test_completed_word_wins_through_the_oracle() {
        let mut app = app_with(&["cat"], &["cat"]);
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        app.on_digit(1);
        app.on_digit(2);
        app.on_digit(3);
        assert!(matches!(app.round().phase(), Phase::AwaitingVerdict { .. }));
        assert_eq!(app.message, "Checking \"CAT\"...");

        wait_for_resolution(&mut app);
        assert!(
            matches!(app.round().phase(), Phase::Won { word, .. } if word == "cat"),
            "unexpected phase: {:?}",
            app.round().phase()
        );
        assert!(app.message.is_empty());
    }

    #[test]
    fn test_rejected_word_shows_try_again_message() {
        // The corpus believes in CAT but the oracle does not.
        let mut app = app_with(&["dog"], &["cat"]);
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        app.on_digit(1);
        app.on_digit(2);
        app.on_digit(3);

        wait_for_resolution(&mut app);
        assert_eq!(app.message, "\"CAT\" is not a valid word. Try again!");
        assert_eq!(app.round().blanks().filled_count(), 0);
    }

    #[test]
    fn test_oracle_failure_shows_error_message() {
        let oracle = OracleClient::spawn(Box::new(DownOracle));
        let mut app = App::with_rng(
            small_config(),
            Arc::new(Wordlist::from_words(["cat"])),
            oracle,
            StdRng::seed_from_u64(5),
        );
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        app.on_digit(1);
        app.on_digit(2);
        app.on_digit(3);

        wait_for_resolution(&mut app);
        assert_eq!(app.message, "Error checking word. Try again!");
    }

    #[test]
    fn test_verdict_for_previous_round_is_discarded() {
        let mut app = app_with(&["cat"], &["cat"]);
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        app.on_digit(1);
        app.on_digit(2);
        app.on_digit(3);
        assert!(matches!(app.round().phase(), Phase::AwaitingVerdict { .. }));

        // Restart before the verdict lands; the old answer must not touch
        // the new round.
        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        thread::sleep(Duration::from_millis(200));
        app.poll_oracle();
        assert!(matches!(app.round().phase(), Phase::Playing));
        assert_eq!(app.round().blanks().filled_count(), 0);
        assert!(app.message.is_empty());
    }

    #[test]
    fn test_shift_key_rotates_bottom_row() {
        let mut app = app_with(&["cat"], &["cat", "act", "tca"]);
        app.start_round_with_grid(Grid::parse("ACT").unwrap());
        app.on_shift();
        assert_eq!(app.round().grid().cell(0, 0), Some('T'));
        assert_eq!(app.round().shifts_remaining(), 4);
    }

    #[test]
    fn test_delete_key_targets_selected_row() {
        let config = RoundConfig {
            rows: 2,
            cols: 3,
            blank_len: 3,
            max_grid_attempts: 3,
            ..RoundConfig::default()
        };
        let oracle = OracleClient::spawn(Box::new(WordSetOracle::new(["cat"])));
        let mut app = App::with_rng(
            config,
            Arc::new(Wordlist::from_words(["cat"])),
            oracle,
            StdRng::seed_from_u64(5),
        );
        app.start_round_with_grid(Grid::parse("TAX\nCAT").unwrap());
        assert_eq!(app.selected_row, 1);
        app.on_row_up();
        assert_eq!(app.selected_row, 0);
        // Cursor clamps at the top and bottom.
        app.on_row_up();
        assert_eq!(app.selected_row, 0);
        app.on_delete();
        // TAX is gone and nothing slid below it; CAT stays the bottom row.
        assert_eq!(app.round().grid().cell(1, 0), Some('C'));
        assert_eq!(app.round().grid().row_letter_count(0), 0);
        assert_eq!(app.round().deletes_remaining(), 2);
        app.on_row_down();
        app.on_row_down();
        assert_eq!(app.selected_row, 1);
    }

    #[test]
    fn test_finished_round_ignores_actions_until_restart() {
        // A grid with no C makes the one-word corpus infeasible at birth.
        let mut app = app_with(&["cat"], &["cat"]);
        app.start_round_with_grid(Grid::parse("TAX").unwrap());
        assert!(app.round().is_over());

        app.on_digit(1);
        app.on_shift();
        assert_eq!(app.round().blanks().filled_count(), 0);
        assert_eq!(app.round().shifts_remaining(), 5);

        app.start_round_with_grid(Grid::parse("CAT").unwrap());
        assert!(matches!(app.round().phase(), Phase::Playing));
    }

    #[test]
    fn test_play_again_advances_generation_and_resets_ui() {
        let oracle = OracleClient::spawn(Box::new(WordSetOracle::new(["crane"])));
        let mut app = App::with_rng(
            RoundConfig::default(),
            Arc::new(Wordlist::builtin().clone()),
            oracle,
            StdRng::seed_from_u64(11),
        );
        let first_generation = app.round().generation();
        app.show_words = true;
        app.message = "leftover".to_string();

        app.play_again();
        assert_eq!(app.round().generation(), first_generation + 1);
        assert!(matches!(app.round().phase(), Phase::Playing));
        assert!(!app.show_words);
        assert!(app.message.is_empty());
        assert_eq!(app.selected_row, 3);
    }

    #[test]
    fn test_words_panel_toggles() {
        let mut app = app_with(&["cat"], &["cat"]);
        assert!(!app.show_words);
        app.toggle_words();
        assert!(app.show_words);
        app.toggle_words();
        assert!(!app.show_words);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(&["cat"], &["cat"]);
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
