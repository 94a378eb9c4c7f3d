//! Minimax and alpha-beta search over positions, returning only the value of the root.
//!
//! Both functions advance by *state*: `get_children` enumerates successor positions and
//! `heuristic` statically evaluates a position from the maximizing player's point of view.
//! A node is a leaf when `depth == 0` or when it has no children; leaves are evaluated with
//! `heuristic` and nothing else. Leaf values are clamped to `NEG_INFINITY..=INFINITY`.

use crate::board::{Board, INFINITY, NEG_INFINITY, Score, clamp_score};
use crate::trace::SearchObserver;

/// Plain minimax. Returns the value of `state` searched `depth` plies deep.
pub fn minimax<S, H, C>(
    depth: u32,
    maximizing: bool,
    heuristic: &H,
    get_children: &C,
    state: &S,
) -> Score
where
    H: Fn(&S) -> Score,
    C: Fn(&S) -> Vec<S>,
{
    minimax_observed(depth, maximizing, heuristic, get_children, state, &mut ())
}

/// Minimax with alpha-beta pruning. With `alpha = NEG_INFINITY` and `beta = INFINITY` the
/// result is identical to [`minimax`].
///
/// Inside a narrower window the result is fail-soft: a value `<= alpha` is an upper bound of
/// the true value and a value `>= beta` a lower bound.
pub fn alphabeta<S, H, C>(
    alpha: Score,
    beta: Score,
    depth: u32,
    maximizing: bool,
    heuristic: &H,
    get_children: &C,
    state: &S,
) -> Score
where
    H: Fn(&S) -> Score,
    C: Fn(&S) -> Vec<S>,
{
    alphabeta_observed(
        alpha,
        beta,
        depth,
        maximizing,
        heuristic,
        get_children,
        state,
        &mut (),
    )
}

/// [`minimax`], reporting every explored child to `observer`.
pub fn minimax_observed<S, H, C, O>(
    depth: u32,
    maximizing: bool,
    heuristic: &H,
    get_children: &C,
    state: &S,
    observer: &mut O,
) -> Score
where
    H: Fn(&S) -> Score,
    C: Fn(&S) -> Vec<S>,
    O: SearchObserver<S>,
{
    if depth == 0 {
        return clamp_score(heuristic(state));
    }

    let children = get_children(state);
    if children.is_empty() {
        return clamp_score(heuristic(state));
    }

    let mut value = if maximizing { NEG_INFINITY } else { INFINITY };
    for child in &children {
        observer.on_enter(child);
        let score = minimax_observed(
            depth - 1,
            !maximizing,
            heuristic,
            get_children,
            child,
            observer,
        );
        observer.on_exit(score);

        value = if maximizing {
            value.max(score)
        } else {
            value.min(score)
        };
    }

    value
}

/// [`alphabeta`], reporting every explored child to `observer`.
#[allow(clippy::too_many_arguments)]
pub fn alphabeta_observed<S, H, C, O>(
    mut alpha: Score,
    mut beta: Score,
    depth: u32,
    maximizing: bool,
    heuristic: &H,
    get_children: &C,
    state: &S,
    observer: &mut O,
) -> Score
where
    H: Fn(&S) -> Score,
    C: Fn(&S) -> Vec<S>,
    O: SearchObserver<S>,
{
    if depth == 0 {
        return clamp_score(heuristic(state));
    }

    let children = get_children(state);
    if children.is_empty() {
        return clamp_score(heuristic(state));
    }

    if maximizing {
        let mut value = NEG_INFINITY;
        for child in &children {
            observer.on_enter(child);
            let score = alphabeta_observed(
                alpha,
                beta,
                depth - 1,
                false,
                heuristic,
                get_children,
                child,
                observer,
            );
            observer.on_exit(score);

            value = value.max(score);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = INFINITY;
        for child in &children {
            observer.on_enter(child);
            let score = alphabeta_observed(
                alpha,
                beta,
                depth - 1,
                true,
                heuristic,
                get_children,
                child,
                observer,
            );
            observer.on_exit(score);

            value = value.min(score);
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

/// Evaluates `board` with plain minimax from the point of view of `perspective`.
pub fn minimax_board<T: Board>(board: &T, depth: u32, perspective: T::Player) -> Score {
    minimax(
        depth,
        board.get_current_player() == perspective,
        &|b: &T| b.evaluate(perspective),
        &|b: &T| b.get_children(),
        board,
    )
}

/// Evaluates `board` with alpha-beta from the point of view of `perspective`.
pub fn alphabeta_board<T: Board>(board: &T, depth: u32, perspective: T::Player) -> Score {
    alphabeta(
        NEG_INFINITY,
        INFINITY,
        depth,
        board.get_current_player() == perspective,
        &|b: &T| b.evaluate(perspective),
        &|b: &T| b.get_children(),
        board,
    )
}
