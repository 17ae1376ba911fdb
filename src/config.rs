//! Game configuration and input validation.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Validated dimensions and win condition for one game.
///
/// Set once at game creation; changing the configuration means starting a
/// new game, never reconfiguring a running one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: usize,
    columns: usize,
    win_condition: usize,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any value is zero, or when the win
    /// condition exceeds the longest line the board can hold.
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_condition: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::InvalidRows("0".to_string()));
        }
        if columns == 0 {
            return Err(ConfigError::InvalidColumns("0".to_string()));
        }
        if win_condition == 0 {
            return Err(ConfigError::InvalidWinCondition("0".to_string()));
        }
        let limit = rows.max(columns);
        if win_condition > limit {
            return Err(ConfigError::WinConditionTooLarge {
                win_condition,
                limit,
            });
        }
        Ok(Self {
            rows,
            columns,
            win_condition,
        })
    }

    /// Parses a configuration from free-text numeric input.
    ///
    /// Non-numeric or non-positive input is rejected here instead of
    /// flowing into grid construction as a degenerate board.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field and carrying
    /// the raw input.
    #[instrument]
    pub fn parse(rows: &str, columns: &str, win_condition: &str) -> Result<Self, ConfigError> {
        let rows_n = parse_field(rows).ok_or_else(|| ConfigError::InvalidRows(rows.to_string()))?;
        let columns_n =
            parse_field(columns).ok_or_else(|| ConfigError::InvalidColumns(columns.to_string()))?;
        let win_n = parse_field(win_condition)
            .ok_or_else(|| ConfigError::InvalidWinCondition(win_condition.to_string()))?;
        Self::new(rows_n, columns_n, win_n)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Required run length for a win.
    pub fn win_condition(&self) -> usize {
        self.win_condition
    }
}

impl Default for GameConfig {
    /// The classic 3x3 board with three in a row to win.
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            win_condition: 3,
        }
    }
}

/// Parses a positive integer from free text.
fn parse_field(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Errors rejecting a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Rows input was not a positive integer.
    #[display("rows must be a positive integer, got {:?}", _0)]
    InvalidRows(String),

    /// Columns input was not a positive integer.
    #[display("columns must be a positive integer, got {:?}", _0)]
    InvalidColumns(String),

    /// Win condition input was not a positive integer.
    #[display("win condition must be a positive integer, got {:?}", _0)]
    InvalidWinCondition(String),

    /// Win condition longer than any line on the board.
    #[display(
        "win condition {} exceeds the longest possible line ({})",
        win_condition,
        limit
    )]
    WinConditionTooLarge {
        /// Requested run length.
        win_condition: usize,
        /// Longest line the board can hold: `max(rows, columns)`.
        limit: usize,
    },
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_three_by_three() {
        let config = GameConfig::default();
        assert_eq!(config.rows(), 3);
        assert_eq!(config.columns(), 3);
        assert_eq!(config.win_condition(), 3);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GameConfig::new(0, 3, 3),
            Err(ConfigError::InvalidRows(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 0, 3),
            Err(ConfigError::InvalidColumns(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 3, 0),
            Err(ConfigError::InvalidWinCondition(_))
        ));
    }

    #[test]
    fn test_win_condition_bounded_by_longest_line() {
        assert!(matches!(
            GameConfig::new(3, 3, 4),
            Err(ConfigError::WinConditionTooLarge {
                win_condition: 4,
                limit: 3
            })
        ));

        // A 3x5 board holds a five-long horizontal line.
        assert!(GameConfig::new(3, 5, 5).is_ok());
    }

    #[test]
    fn test_win_condition_of_one_is_valid() {
        let config = GameConfig::new(3, 3, 1).expect("degenerate but valid");
        assert_eq!(config.win_condition(), 1);
    }

    #[test]
    fn test_parse_accepts_padded_numbers() {
        let config = GameConfig::parse(" 4 ", "5", "4").expect("valid input");
        assert_eq!(config.rows(), 4);
        assert_eq!(config.columns(), 5);
        assert_eq!(config.win_condition(), 4);
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        assert_eq!(
            GameConfig::parse("abc", "3", "3"),
            Err(ConfigError::InvalidRows("abc".to_string()))
        );
        assert_eq!(
            GameConfig::parse("3", "", "3"),
            Err(ConfigError::InvalidColumns("".to_string()))
        );
        assert_eq!(
            GameConfig::parse("3", "3", "2.5"),
            Err(ConfigError::InvalidWinCondition("2.5".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_positive_input() {
        assert_eq!(
            GameConfig::parse("-1", "3", "3"),
            Err(ConfigError::InvalidRows("-1".to_string()))
        );
        assert_eq!(
            GameConfig::parse("3", "0", "3"),
            Err(ConfigError::InvalidColumns("0".to_string()))
        );
    }
}
