//! Minimax and alpha-beta search returning the best move from the root.
//!
//! Unlike [`score_search`](crate::score_search), the heuristic here scores a *move* from a
//! state, from the point of view of the player making it. Every candidate root move is valued
//! by running the score search over an [`Edge`] tree, where each node is a (state, move) pair
//! and the children of a pair are the replies available after the move.
//!
//! `depth` counts heuristic-refinement plies: at depth 0 every root move is scored with the
//! heuristic directly, at depth 1 the opponent's replies are scored instead, and so on.

use crate::board::{Board, INFINITY, NEG_INFINITY, Score, clamp_score};
use crate::score_search;
use crate::trace::SearchObserver;
use log::trace;

/// A move considered from the state it is played in.
///
/// `root_side` is `true` when the move belongs to the player searching from the root.
#[derive(Debug, Clone)]
pub struct Edge<S, M> {
    pub state: S,
    pub b_move: M,
    pub root_side: bool,
}

/// Returns the best move found by plain minimax, or `None` if `state` has no legal moves.
///
/// Ties between equally valued moves go to the first one in `get_moves` order.
pub fn minimax<S, M, H, G, A>(
    depth: u32,
    heuristic: &H,
    get_moves: &G,
    apply_move: &A,
    state: &S,
) -> Option<M>
where
    S: Clone,
    M: Clone,
    H: Fn(&S, &M) -> Score,
    G: Fn(&S) -> Vec<M>,
    A: Fn(&S, &M) -> S,
{
    minimax_observed(depth, heuristic, get_moves, apply_move, state, &mut ())
}

/// Returns the best move found by alpha-beta search, or `None` if `state` has no legal moves.
///
/// Always returns the same move as [`minimax`] for the same inputs.
pub fn alphabeta<S, M, H, G, A>(
    depth: u32,
    heuristic: &H,
    get_moves: &G,
    apply_move: &A,
    state: &S,
) -> Option<M>
where
    S: Clone,
    M: Clone,
    H: Fn(&S, &M) -> Score,
    G: Fn(&S) -> Vec<M>,
    A: Fn(&S, &M) -> S,
{
    alphabeta_observed(depth, heuristic, get_moves, apply_move, state, &mut ())
}

/// [`minimax`], reporting every explored move to `observer`.
pub fn minimax_observed<S, M, H, G, A, O>(
    depth: u32,
    heuristic: &H,
    get_moves: &G,
    apply_move: &A,
    state: &S,
    observer: &mut O,
) -> Option<M>
where
    S: Clone,
    M: Clone,
    H: Fn(&S, &M) -> Score,
    G: Fn(&S) -> Vec<M>,
    A: Fn(&S, &M) -> S,
    O: SearchObserver<M>,
{
    let mut adapter = EdgeObserver { inner: observer };
    best_root_move(get_moves, state, &mut adapter, |edge, _alpha, adapter| {
        score_search::minimax_observed(
            depth,
            false,
            &edge_heuristic(heuristic),
            &edge_children(get_moves, apply_move),
            edge,
            adapter,
        )
    })
}

/// [`alphabeta`], reporting every explored move to `observer`.
pub fn alphabeta_observed<S, M, H, G, A, O>(
    depth: u32,
    heuristic: &H,
    get_moves: &G,
    apply_move: &A,
    state: &S,
    observer: &mut O,
) -> Option<M>
where
    S: Clone,
    M: Clone,
    H: Fn(&S, &M) -> Score,
    G: Fn(&S) -> Vec<M>,
    A: Fn(&S, &M) -> S,
    O: SearchObserver<M>,
{
    let mut adapter = EdgeObserver { inner: observer };
    best_root_move(get_moves, state, &mut adapter, |edge, alpha, adapter| {
        // Only values strictly above the best root move so far matter, so the window is
        // (alpha, +inf). Anything that fails low comes back <= alpha and is never selected.
        score_search::alphabeta_observed(
            alpha,
            INFINITY,
            depth,
            false,
            &edge_heuristic(heuristic),
            &edge_children(get_moves, apply_move),
            edge,
            adapter,
        )
    })
}

/// Best move of `board` found by plain minimax, using the board's own move heuristic.
pub fn minimax_board<T: Board>(board: &T, depth: u32) -> Option<T::Move> {
    minimax(
        depth,
        &|b: &T, m: &T::Move| b.evaluate_move(m),
        &|b: &T| b.get_available_moves(),
        &|b: &T, m: &T::Move| b.apply_move(m),
        board,
    )
}

/// Best move of `board` found by alpha-beta search, using the board's own move heuristic.
pub fn alphabeta_board<T: Board>(board: &T, depth: u32) -> Option<T::Move> {
    alphabeta(
        depth,
        &|b: &T, m: &T::Move| b.evaluate_move(m),
        &|b: &T| b.get_available_moves(),
        &|b: &T, m: &T::Move| b.apply_move(m),
        board,
    )
}

fn best_root_move<S, M, G, E, O>(
    get_moves: &G,
    state: &S,
    observer: &mut O,
    mut evaluate_edge: E,
) -> Option<M>
where
    S: Clone,
    M: Clone,
    G: Fn(&S) -> Vec<M>,
    E: FnMut(&Edge<S, M>, Score, &mut O) -> Score,
    O: SearchObserver<Edge<S, M>>,
{
    let mut best: Option<(M, Score)> = None;
    for b_move in get_moves(state) {
        let edge = Edge {
            state: state.clone(),
            b_move,
            root_side: true,
        };
        let alpha = best.as_ref().map_or(NEG_INFINITY, |(_, score)| *score);

        observer.on_enter(&edge);
        let score = evaluate_edge(&edge, alpha, observer);
        observer.on_exit(score);
        trace!("root move value {}", score);

        // Strict improvement keeps the first of several equally good moves.
        if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
            best = Some((edge.b_move, score));
        }
    }
    best.map(|(b_move, _)| b_move)
}

fn edge_heuristic<S, M, H>(heuristic: &H) -> impl Fn(&Edge<S, M>) -> Score
where
    H: Fn(&S, &M) -> Score,
{
    move |edge| {
        let score = clamp_score(heuristic(&edge.state, &edge.b_move));
        if edge.root_side { score } else { -score }
    }
}

fn edge_children<'a, S, M, G, A>(
    get_moves: &'a G,
    apply_move: &'a A,
) -> impl Fn(&Edge<S, M>) -> Vec<Edge<S, M>>
where
    S: Clone,
    G: Fn(&S) -> Vec<M>,
    A: Fn(&S, &M) -> S,
{
    move |edge| {
        let next = apply_move(&edge.state, &edge.b_move);
        get_moves(&next)
            .into_iter()
            .map(|b_move| Edge {
                state: next.clone(),
                b_move,
                root_side: !edge.root_side,
            })
            .collect()
    }
}

/// Forwards edge events to an observer of moves.
struct EdgeObserver<'a, O> {
    inner: &'a mut O,
}

impl<S, M, O: SearchObserver<M>> SearchObserver<Edge<S, M>> for EdgeObserver<'_, O> {
    fn on_enter(&mut self, label: &Edge<S, M>) {
        self.inner.on_enter(&label.b_move);
    }

    fn on_exit(&mut self, score: Score) {
        self.inner.on_exit(score);
    }
}
