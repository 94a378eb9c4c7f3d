//! Move ordering for tic-tac-toe.
//!
//! Good moves first means earlier alpha-beta cutoffs, and at shallow depths it also decides
//! which of several equally scored moves the search returns.

use crate::board::Board;
use crate::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};

/// Priority class of a candidate move. Lower classes are searched first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum MoveClass {
    /// Completes three in a row for the mover.
    Win,
    /// Takes the cell the opponent needs to complete three in a row.
    Block,
    Center,
    Corner,
    /// An edge that leaves the mover with two open threats at once.
    Fork,
    Edge,
}

/// Classifies `cell` for `mover`. The first matching class wins.
pub fn classify(board: &TicTacToeBoard, cell: Cell, mover: Mark) -> MoveClass {
    if board.completes_line(cell, mover) {
        MoveClass::Win
    } else if board.completes_line(cell, mover.opponent()) {
        MoveClass::Block
    } else if cell.is_center() {
        MoveClass::Center
    } else if cell.is_corner() {
        MoveClass::Corner
    } else if creates_fork(board, cell, mover) {
        MoveClass::Fork
    } else {
        MoveClass::Edge
    }
}

/// Returns `true` if `mover` on `cell` leaves at least two lines one mark short of completion.
pub fn creates_fork(board: &TicTacToeBoard, cell: Cell, mover: Mark) -> bool {
    board.with_mark(cell, mover).count_threats(mover) >= 2
}

/// Legal moves of `board` for `mover`, ordered by [`MoveClass`].
///
/// Moves in the same class keep the generator's row-major order.
pub fn order_moves(board: &TicTacToeBoard, mover: Mark) -> Vec<Cell> {
    let mut moves: Vec<(MoveClass, Cell)> = board
        .get_available_moves()
        .into_iter()
        .map(|cell| (classify(board, cell, mover), cell))
        .collect();
    // `sort_by_key` is stable.
    moves.sort_by_key(|(class, _)| *class);
    moves.into_iter().map(|(_, cell)| cell).collect()
}

/// First cell (row-major) where `mover` completes a line, if any.
pub fn find_winning_move(board: &TicTacToeBoard, mover: Mark) -> Option<Cell> {
    board
        .get_available_moves()
        .into_iter()
        .find(|&cell| board.completes_line(cell, mover))
}

/// First cell (row-major) where the opponent of `mover` would complete a line, if any.
pub fn find_blocking_move(board: &TicTacToeBoard, mover: Mark) -> Option<Cell> {
    find_winning_move(board, mover.opponent())
}

/// A winning move if there is one, otherwise a blocking move.
pub fn find_immediate_move(board: &TicTacToeBoard, mover: Mark) -> Option<Cell> {
    find_winning_move(board, mover).or_else(|| find_blocking_move(board, mover))
}

#[cfg(test)]
mod tests {
    use crate::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};
    use crate::ordering::{
        MoveClass, classify, creates_fork, find_blocking_move, find_immediate_move,
        find_winning_move, order_moves,
    };

    fn cells(list: &[(u8, u8)]) -> Vec<Cell> {
        list.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn empty_board_order() {
        let board = TicTacToeBoard::default();
        assert_eq!(
            order_moves(&board, Mark::X),
            cells(&[
                (1, 1),
                (0, 0),
                (0, 2),
                (2, 0),
                (2, 2),
                (0, 1),
                (1, 0),
                (1, 2),
                (2, 1),
            ])
        );
    }

    #[test]
    fn win_before_block_before_positional() {
        // arrange
        let board = TicTacToeBoard::parse("XX./OO./...", Mark::X).unwrap();

        // act
        let ordered = order_moves(&board, Mark::X);

        // assert
        assert_eq!(ordered[0], Cell::new(0, 2));
        assert_eq!(ordered[1], Cell::new(1, 2));
        assert_eq!(classify(&board, Cell::new(0, 2), Mark::X), MoveClass::Win);
        assert_eq!(classify(&board, Cell::new(1, 2), Mark::X), MoveClass::Block);
    }

    #[test]
    fn block_is_first_when_no_win() {
        let board = TicTacToeBoard::parse("OO./.../...", Mark::X).unwrap();
        assert_eq!(order_moves(&board, Mark::X)[0], Cell::new(0, 2));
    }

    #[test]
    fn fork_edges_rank_above_plain_edges() {
        // X on (0, 0) and (2, 1): (0, 1) threatens both the top row and the middle column.
        let board = TicTacToeBoard::parse("X../.../.X.", Mark::X).unwrap();
        assert!(creates_fork(&board, Cell::new(0, 1), Mark::X));
        assert!(!creates_fork(&board, Cell::new(1, 0), Mark::X));
        assert_eq!(
            order_moves(&board, Mark::X),
            cells(&[(1, 1), (0, 2), (2, 0), (2, 2), (0, 1), (1, 0), (1, 2)])
        );
    }

    #[test]
    fn ordering_is_a_deterministic_permutation() {
        let board = TicTacToeBoard::parse("X.O/.X./O..", Mark::O).unwrap();
        let first = order_moves(&board, Mark::O);
        assert_eq!(first, order_moves(&board, Mark::O));

        let mut sorted = first.clone();
        sorted.sort_by_key(|cell| cell.index());
        assert_eq!(sorted, board.empty_cells());
    }

    #[test]
    fn immediate_moves() {
        let board = TicTacToeBoard::parse("XX./OO./...", Mark::O).unwrap();
        assert_eq!(find_winning_move(&board, Mark::O), Some(Cell::new(1, 2)));
        assert_eq!(find_blocking_move(&board, Mark::O), Some(Cell::new(0, 2)));
        assert_eq!(find_immediate_move(&board, Mark::O), Some(Cell::new(1, 2)));

        let quiet = TicTacToeBoard::parse("X../.O./...", Mark::X).unwrap();
        assert_eq!(find_immediate_move(&quiet, Mark::X), None);
    }

    #[test]
    fn terminal_board_has_nothing_to_order() {
        let board = TicTacToeBoard::parse("XXX/OO./...", Mark::O).unwrap();
        assert!(order_moves(&board, Mark::O).is_empty());
        assert_eq!(find_immediate_move(&board, Mark::O), None);
    }
}
