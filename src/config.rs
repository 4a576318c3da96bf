//! Runtime configuration for a generation run.
//!
//! The binary fills a [`Config`] from command-line flags and their
//! environment-variable fallbacks; [`Config::validate`] rejects board
//! geometries the engine cannot play on.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{
    DEFAULT_BLACK_NAME, DEFAULT_BOARD_SIZE, DEFAULT_KOMI, DEFAULT_MAX_RETRIES, DEFAULT_MIN_LINE,
    DEFAULT_OUTPUT_DIR, DEFAULT_RULE, DEFAULT_STONES, DEFAULT_WHITE_NAME, MAX_BOARD_SIZE,
};
use crate::position::PlayableRegion;
use crate::sgf::GameInfo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Board size should be equal to or less than {max}! (got {size})", max = MAX_BOARD_SIZE)]
    BoardTooLarge { size: usize },
    #[error("Board size must be at least 1")]
    EmptyBoard,
    #[error("MIN must be at least 1")]
    MarginTooSmall,
    #[error("MIN ({min_line}) should be less than half of board size ({size})!")]
    MarginTooLarge { min_line: usize, size: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stones per colour in a random opening.
    pub stones: usize,
    pub board_size: usize,
    pub min_line: usize,
    /// Fixed move list; replaces random sampling when set.
    pub coords: Option<String>,
    pub komi: f64,
    pub rule: String,
    pub black: String,
    pub white: String,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub max_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stones: DEFAULT_STONES,
            board_size: DEFAULT_BOARD_SIZE,
            min_line: DEFAULT_MIN_LINE,
            coords: None,
            komi: DEFAULT_KOMI,
            rule: DEFAULT_RULE.to_string(),
            black: DEFAULT_BLACK_NAME.to_string(),
            white: DEFAULT_WHITE_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Check the board geometry and return the playable region.
    pub fn validate(&self) -> Result<PlayableRegion, ConfigError> {
        PlayableRegion::new(self.board_size, self.min_line)
    }

    /// Header metadata for the game record.
    pub fn game_info(&self) -> GameInfo {
        GameInfo {
            size: self.board_size,
            black: self.black.clone(),
            white: self.white.clone(),
            komi: self.komi,
            rule: self.rule.clone(),
        }
    }
}
