extern crate minimax_lib;

use log::info;
use minimax_lib::board::Board;
use minimax_lib::boards::nim::NimBoard;
use minimax_lib::boards::tic_tac_toe::{Cell, TicTacToeBoard};
use minimax_lib::config::EngineConfig;
use minimax_lib::engine::TicTacToeEngine;
use minimax_lib::move_search;
use minimax_lib::trace::SearchTrace;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Play a full game of the engine against itself
    let engine = TicTacToeEngine::new(EngineConfig::default()).expect("default config is valid");
    let mut board = TicTacToeBoard::default();
    loop {
        let mover = board.get_current_player();
        let decision = engine.find_best_move_with_metrics(&board, mover);
        let Some(cell) = decision.best_move else {
            break;
        };
        info!(
            "{mover} plays {cell} (immediate: {}, depth: {})",
            decision.metrics.immediate_move, decision.metrics.search_depth
        );
        board = board.apply_move(&cell);
        println!("{board}\n");
    }
    println!("Outcome: {:?}", board.get_outcome());

    // Compare how much of the tree each search explores
    let empty = TicTacToeBoard::default();
    let heuristic = |b: &TicTacToeBoard, m: &Cell| b.evaluate_move(m);
    let get_moves = |b: &TicTacToeBoard| b.get_available_moves();
    let apply_move = |b: &TicTacToeBoard, m: &Cell| b.apply_move(m);
    let mut full = SearchTrace::new();
    let mut pruned = SearchTrace::new();
    move_search::minimax_observed(5, &heuristic, &get_moves, &apply_move, &empty, &mut full);
    move_search::alphabeta_observed(5, &heuristic, &get_moves, &apply_move, &empty, &mut pruned);
    println!(
        "Depth 5 from the empty board: minimax visits {} nodes, alpha-beta {}",
        full.node_count(),
        pruned.node_count()
    );

    // Nim works through the same interface
    let nim = NimBoard::default();
    println!(
        "Nim {:?}: the best move is {:?}",
        nim.heaps(),
        move_search::alphabeta_board(&nim, 3)
    );
}
