//! Tic-tac-toe move selection.
//!
//! A decision is made in two stages. The tactical stage plays an immediate win, or else an
//! immediate block, without searching. Otherwise the search stage picks a depth from the number
//! of empty cells and runs the move search, optionally over ordered moves.

use crate::board::Board;
use crate::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};
use crate::config::{ConfigError, DepthSchedule, EngineConfig};
use crate::metrics::{MoveDecision, SearchMetrics};
use crate::move_search;
use crate::ordering::{find_immediate_move, order_moves};
use log::debug;

/// Chooses tic-tac-toe moves according to an [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct TicTacToeEngine {
    config: EngineConfig,
}

/// A builder for creating instances of `TicTacToeEngine`.
pub struct TicTacToeEngineBuilder {
    config: EngineConfig,
}

impl Default for TicTacToeEngineBuilder {
    fn default() -> Self {
        TicTacToeEngineBuilder::new()
    }
}

impl TicTacToeEngineBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.config.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Enables or disables move ordering.
    pub fn with_move_ordering(mut self, use_ordering: bool) -> Self {
        self.config.use_move_ordering = use_ordering;
        self
    }

    /// Enables or disables the immediate win/block shortcut.
    pub fn with_immediate_moves(mut self, use_immediate: bool) -> Self {
        self.config.use_immediate_moves = use_immediate;
        self
    }

    /// Sets the depth used in each game phase.
    pub fn with_depth_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.config.depth_schedule = schedule;
        self
    }

    /// Validates the configuration and builds the engine.
    pub fn build(self) -> Result<TicTacToeEngine, ConfigError> {
        TicTacToeEngine::new(self.config)
    }
}

impl TicTacToeEngine {
    /// Returns a new builder for `TicTacToeEngine`.
    pub fn builder() -> TicTacToeEngineBuilder {
        TicTacToeEngineBuilder::new()
    }

    /// Creates an engine from a configuration, rejecting invalid ones.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the best move for `mover`, or `None` if the game is over.
    pub fn find_best_move(&self, board: &TicTacToeBoard, mover: Mark) -> Option<Cell> {
        self.find_best_move_with_metrics(board, mover).best_move
    }

    /// Returns the best move for `mover` along with how it was found.
    pub fn find_best_move_with_metrics(
        &self,
        board: &TicTacToeBoard,
        mover: Mark,
    ) -> MoveDecision<Cell> {
        let board = board.with_to_move(mover);
        if board.is_terminal() {
            debug!("no move for {mover}: game is over ({:?})", board.check_winner());
            return MoveDecision {
                best_move: None,
                metrics: SearchMetrics::terminal(),
            };
        }

        if self.config.use_immediate_moves
            && let Some(cell) = find_immediate_move(&board, mover)
        {
            debug!("{mover} plays immediate move {cell}");
            return MoveDecision {
                best_move: Some(cell),
                metrics: SearchMetrics::immediate(),
            };
        }

        let depth = self.choose_depth(&board);
        let best_move = self.search(&board, depth);
        debug!(
            "{mover} plays {:?} after searching {depth} plies ({} empty cells)",
            best_move,
            board.empty_count()
        );
        MoveDecision {
            best_move,
            metrics: SearchMetrics::searched(depth),
        }
    }

    /// Searches at a fixed depth, skipping the tactical stage and the depth schedule.
    pub fn find_best_move_at_depth(
        &self,
        board: &TicTacToeBoard,
        mover: Mark,
        depth: u32,
    ) -> Option<Cell> {
        self.search(&board.with_to_move(mover), depth)
    }

    /// Depth the search stage would use on `board`.
    pub fn choose_depth(&self, board: &TicTacToeBoard) -> u32 {
        self.config
            .depth_schedule
            .depth_for(board.empty_count() as u32)
    }

    fn search(&self, board: &TicTacToeBoard, depth: u32) -> Option<Cell> {
        let heuristic = |b: &TicTacToeBoard, cell: &Cell| b.evaluate_move(cell);
        let apply_move = |b: &TicTacToeBoard, cell: &Cell| b.apply_move(cell);
        let use_ordering = self.config.use_move_ordering;
        let get_moves = |b: &TicTacToeBoard| {
            if use_ordering {
                order_moves(b, b.get_current_player())
            } else {
                b.get_available_moves()
            }
        };

        if self.config.use_alpha_beta_pruning {
            move_search::alphabeta(depth, &heuristic, &get_moves, &apply_move, board)
        } else {
            move_search::minimax(depth, &heuristic, &get_moves, &apply_move, board)
        }
    }
}

/// [`TicTacToeEngine::find_best_move`] with the default configuration.
pub fn find_best_move(board: &TicTacToeBoard, mover: Mark) -> Option<Cell> {
    TicTacToeEngine::default().find_best_move(board, mover)
}

/// [`TicTacToeEngine::find_best_move_with_metrics`] with the default configuration.
pub fn find_best_move_with_metrics(board: &TicTacToeBoard, mover: Mark) -> MoveDecision<Cell> {
    TicTacToeEngine::default().find_best_move_with_metrics(board, mover)
}
