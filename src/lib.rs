//! A small and simple library for minimax and alpha-beta game tree search.
//!
//! The library provides generic minimax and alpha-beta search for deterministic, two-player,
//! zero-sum games with perfect information. Games plug in through the [`board::Board`] trait or,
//! at the lowest level, through plain functions for move generation, move application and
//! evaluation. On top of the generic search sits a tic-tac-toe engine with move ordering,
//! immediate win/block detection and a search depth that adapts to the phase of the game.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};
//! use minimax_lib::config::DepthSchedule;
//! use minimax_lib::engine::TicTacToeEngine;
//!
//! // X threatens the top row, so O has to block
//! let board = TicTacToeBoard::parse("XX./.O./...", Mark::O).unwrap();
//!
//! // Create and configure a new engine using the builder
//! let engine = TicTacToeEngine::builder()
//!     .with_alpha_beta_pruning(true)
//!     .with_move_ordering(true)
//!     .with_depth_schedule(DepthSchedule::default())
//!     .build()
//!     .unwrap();
//!
//! // Ask for the best move and how it was found
//! let decision = engine.find_best_move_with_metrics(&board, Mark::O);
//!
//! assert_eq!(decision.best_move, Some(Cell::new(0, 2)));
//! assert!(decision.metrics.immediate_move);
//! ```

/// Contains the `Board` trait, scores and outcomes that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// Configuration of the tic-tac-toe engine.
pub mod config;
/// The tic-tac-toe engine: tactical shortcuts followed by an adaptive-depth search.
pub mod engine;
/// Contains the record describing how a move was chosen.
pub mod metrics;
/// Minimax and alpha-beta search returning the best move.
pub mod move_search;
/// Move ordering and immediate win/block detection for tic-tac-toe.
pub mod ordering;
/// Contains traits and implementations for random number generation and random playouts.
pub mod random;
/// Minimax and alpha-beta search returning the value of a position.
pub mod score_search;
/// Observers of the search, including a recorder of the explored tree.
pub mod trace;
