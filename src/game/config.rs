//! Round configuration: grid shape, budgets, and the policy switches
//! that select between the game's variants.

pub const DEFAULT_GRID_ROWS: usize = 4;
pub const DEFAULT_GRID_COLS: usize = 5;
pub const DEFAULT_BLANK_COUNT: usize = 5;
pub const DEFAULT_SHIFT_BUDGET: u32 = 5;
pub const DEFAULT_DELETE_BUDGET: u32 = 3;
pub const DEFAULT_MIN_FEASIBLE: usize = 3;
pub const DEFAULT_GRID_ATTEMPTS: u32 = 100;

/// What happens to the bottom cell a drop vacates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropStyle {
    /// The column shifts down and the top cell is left empty, so the
    /// letter pool is finite within a round.
    Deplete,
    /// A fresh random letter replaces the dropped one and the grid never
    /// drains (survival variant).
    Refill,
}

/// When a round is declared lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossRule {
    /// Lose the moment the live feasibility count reaches zero.
    ImmediateZero,
    /// Lose only once both budgets are spent, the pattern is incomplete,
    /// and no single remaining drop could leave a word feasible.
    BudgetsExhausted,
}

/// The constant surface of a round. Built once at startup; nothing here
/// changes while a round is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of slots in the blank pattern, i.e. the target word length.
    pub blank_len: usize,
    pub shift_budget: u32,
    pub delete_budget: u32,
    /// Countdown in seconds for the timed variant; `None` disables it.
    pub countdown_secs: Option<u32>,
    /// Fresh grids are rerolled until at least this many words are
    /// feasible after the seed drop.
    pub min_feasible_words: usize,
    /// Cap on grid rerolls before the last candidate is accepted as-is.
    pub max_grid_attempts: u32,
    pub loss_rule: LossRule,
    pub drop_style: DropStyle,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            blank_len: DEFAULT_BLANK_COUNT,
            shift_budget: DEFAULT_SHIFT_BUDGET,
            delete_budget: DEFAULT_DELETE_BUDGET,
            countdown_secs: None,
            min_feasible_words: DEFAULT_MIN_FEASIBLE,
            max_grid_attempts: DEFAULT_GRID_ATTEMPTS,
            loss_rule: LossRule::ImmediateZero,
            drop_style: DropStyle::Deplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_standard_rules() {
        let config = RoundConfig::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 5);
        assert_eq!(config.blank_len, 5);
        assert_eq!(config.shift_budget, 5);
        assert_eq!(config.delete_budget, 3);
        assert_eq!(config.countdown_secs, None);
        assert_eq!(config.loss_rule, LossRule::ImmediateZero);
        assert_eq!(config.drop_style, DropStyle::Deplete);
    }
}
