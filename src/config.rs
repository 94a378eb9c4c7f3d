//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest useful search on a 3x3 board.
pub const MAX_DEPTH: u32 = 9;

/// Errors produced while validating or loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} depth {depth} exceeds the deepest possible search")]
    DepthTooLarge { name: &'static str, depth: u32 },

    #[error("depths must not decrease towards the end of the game: {early} / {middle} / {late}")]
    NonMonotonicDepths { early: u32, middle: u32, late: u32 },

    #[error("invalid empty-cell thresholds: early_min_empty {early_min_empty}, late_max_empty {late_max_empty}")]
    InvalidThresholds {
        early_min_empty: u32,
        late_max_empty: u32,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Search depth per game phase, where the phase is derived from the number of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthSchedule {
    /// Depth used while at least `early_min_empty` cells are empty.
    pub early_depth: u32,
    /// Depth used between the two thresholds.
    pub middle_depth: u32,
    /// Depth used once at most `late_max_empty` cells are empty.
    /// `MAX_DEPTH` searches every line to the end of the game.
    pub late_depth: u32,
    pub early_min_empty: u32,
    pub late_max_empty: u32,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            early_depth: 4,
            middle_depth: 6,
            late_depth: MAX_DEPTH,
            early_min_empty: 8,
            late_max_empty: 4,
        }
    }
}

impl DepthSchedule {
    /// Searches every position exhaustively.
    pub fn exhaustive() -> Self {
        Self {
            early_depth: MAX_DEPTH,
            middle_depth: MAX_DEPTH,
            late_depth: MAX_DEPTH,
            ..Self::default()
        }
    }

    /// Depth for a board with `empty_cells` empty cells.
    pub fn depth_for(&self, empty_cells: u32) -> u32 {
        if empty_cells >= self.early_min_empty {
            self.early_depth
        } else if empty_cells <= self.late_max_empty {
            self.late_depth
        } else {
            self.middle_depth
        }
    }

    /// Rejects depths above [`MAX_DEPTH`] or decreasing towards the end of the game. The phase
    /// thresholds must not overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [
            ("early", self.early_depth),
            ("middle", self.middle_depth),
            ("late", self.late_depth),
        ] {
            if depth > MAX_DEPTH {
                return Err(ConfigError::DepthTooLarge { name, depth });
            }
        }

        if self.early_depth > self.middle_depth || self.middle_depth > self.late_depth {
            return Err(ConfigError::NonMonotonicDepths {
                early: self.early_depth,
                middle: self.middle_depth,
                late: self.late_depth,
            });
        }

        if self.late_max_empty >= self.early_min_empty || self.early_min_empty > MAX_DEPTH {
            return Err(ConfigError::InvalidThresholds {
                early_min_empty: self.early_min_empty,
                late_max_empty: self.late_max_empty,
            });
        }

        Ok(())
    }
}

/// Configuration of a [`TicTacToeEngine`](crate::engine::TicTacToeEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Use alpha-beta instead of plain minimax. Both return the same move.
    pub use_alpha_beta_pruning: bool,
    /// Search moves in tactical/positional order instead of row-major order.
    pub use_move_ordering: bool,
    /// Play immediate wins and blocks without searching.
    pub use_immediate_moves: bool,
    pub depth_schedule: DepthSchedule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_alpha_beta_pruning: true,
            use_move_ordering: true,
            use_immediate_moves: true,
            depth_schedule: DepthSchedule::default(),
        }
    }
}

impl EngineConfig {
    /// Full-depth search on every move.
    pub fn exhaustive() -> Self {
        Self {
            depth_schedule: DepthSchedule::exhaustive(),
            ..Self::default()
        }
    }

    /// Cheap settings for tests.
    pub fn for_testing() -> Self {
        Self {
            depth_schedule: DepthSchedule {
                early_depth: 2,
                middle_depth: 4,
                ..DepthSchedule::default()
            },
            ..Self::default()
        }
    }

    /// Checks the depth schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.depth_schedule.validate()
    }

    /// Parses a JSON config. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
