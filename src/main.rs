//! WordDrop: drop letters out of a shrinking grid and spell a real word
//! before the moves run out.

mod app;
mod game;
mod oracle;
mod tui;

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use argh::FromArgs;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use app::App;
use game::config::{
    DropStyle, LossRule, RoundConfig, DEFAULT_BLANK_COUNT, DEFAULT_DELETE_BUDGET,
    DEFAULT_GRID_ATTEMPTS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_MIN_FEASIBLE,
    DEFAULT_SHIFT_BUDGET,
};
use game::wordlist::Wordlist;
use oracle::{OracleClient, WordSetOracle};
use tui::Tui;

#[derive(FromArgs)]
/// WordDrop: fill the blanks with a real word before the grid runs dry.
struct Args {
    /// grid rows
    #[argh(option, default = "DEFAULT_GRID_ROWS")]
    rows: usize,

    /// grid columns (1-9, to stay on the digit keys)
    #[argh(option, default = "DEFAULT_GRID_COLS")]
    cols: usize,

    /// blank slots to fill, i.e. the target word length
    #[argh(option, default = "DEFAULT_BLANK_COUNT")]
    blanks: usize,

    /// row shifts allowed per round
    #[argh(option, default = "DEFAULT_SHIFT_BUDGET")]
    shifts: u32,

    /// row deletes allowed per round
    #[argh(option, default = "DEFAULT_DELETE_BUDGET")]
    deletes: u32,

    /// countdown in seconds; 0 disables the timer
    #[argh(option, default = "0")]
    timer: u32,

    /// minimum feasible words a fresh grid must offer
    #[argh(option, default = "DEFAULT_MIN_FEASIBLE")]
    min_words: usize,

    /// grid generation attempts before settling for any grid
    #[argh(option, default = "DEFAULT_GRID_ATTEMPTS")]
    attempts: u32,

    /// survival mode: dropped letters are replaced instead of depleting
    #[argh(switch)]
    survival: bool,

    /// strict endings: lose only when budgets are gone and no drop helps
    #[argh(switch)]
    strict: bool,

    /// file with feasibility words, one per line (default: embedded list)
    #[argh(option)]
    words: Option<String>,

    /// file with dictionary words for validity checks (default: embedded
    /// list)
    #[argh(option)]
    dict: Option<String>,
}

impl Args {
    fn round_config(&self) -> RoundConfig {
        RoundConfig {
            rows: self.rows.max(1),
            cols: self.cols.clamp(1, 9),
            blank_len: self.blanks.max(1),
            shift_budget: self.shifts,
            delete_budget: self.deletes,
            countdown_secs: (self.timer > 0).then_some(self.timer),
            min_feasible_words: self.min_words,
            max_grid_attempts: self.attempts,
            loss_rule: if self.strict {
                LossRule::BudgetsExhausted
            } else {
                LossRule::ImmediateZero
            },
            drop_style: if self.survival {
                DropStyle::Refill
            } else {
                DropStyle::Deplete
            },
        }
    }
}

fn main() -> io::Result<()> {
    let args: Args = argh::from_env();
    let config = args.round_config();

    let corpus = match &args.words {
        Some(path) => Arc::new(Wordlist::parse(&fs::read_to_string(path)?)),
        None => Arc::new(Wordlist::builtin().clone()),
    };
    if corpus.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "word list is empty",
        ));
    }

    let dictionary = match &args.dict {
        Some(path) => Wordlist::parse(&fs::read_to_string(path)?),
        None => Wordlist::builtin().clone(),
    };
    let oracle = OracleClient::spawn(Box::new(WordSetOracle::new(dictionary.iter())));

    // Initialize terminal
    let mut terminal = Tui::new()?;
    let mut app = App::new(config, corpus, oracle);

    // Main event loop
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &app))?;

        // Surface any oracle verdicts that arrived between frames
        app.poll_oracle();

        // Calculate timeout for next tick, capped so pending verdicts
        // never wait a full tick to show up
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(Duration::from_millis(100));

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            app.quit();
                        }
                        KeyCode::Up => {
                            app.on_row_up();
                        }
                        KeyCode::Down => {
                            app.on_row_down();
                        }
                        KeyCode::Char(c) if c.is_ascii_digit() => {
                            app.on_digit(c as usize - '0' as usize);
                        }
                        KeyCode::Char(c) => match c.to_ascii_lowercase() {
                            's' => app.on_shift(),
                            'x' => app.on_delete(),
                            'p' => app.toggle_words(),
                            'n' => app.play_again(),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }

        // Handle timer tick
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
