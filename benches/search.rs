//! Search benchmarks.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Plain minimax against alpha-beta at increasing depths
//! - The adaptive engine in the opening, middle game and endgame

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use minimax_lib::boards::tic_tac_toe::{Mark, TicTacToeBoard};
use minimax_lib::engine::TicTacToeEngine;
use minimax_lib::move_search;

fn bench_move_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_search");
    let board = TicTacToeBoard::default();

    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            b.iter(|| move_search::minimax_board(black_box(&board), depth))
        });
        group.bench_with_input(BenchmarkId::new("alphabeta", depth), &depth, |b, &depth| {
            b.iter(|| move_search::alphabeta_board(black_box(&board), depth))
        });
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let engine = TicTacToeEngine::default();
    let positions = [
        ("opening", ".../.X./...", Mark::O),
        ("middle", "X../.O./..X", Mark::O),
        ("endgame", "XOX/.O./.X.", Mark::O),
    ];

    for (name, text, mover) in positions {
        let board = TicTacToeBoard::parse(text, mover).expect("valid board");
        group.bench_function(name, |b| {
            b.iter(|| engine.find_best_move_with_metrics(black_box(&board), mover))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_search, bench_engine);
criterion_main!(benches);
