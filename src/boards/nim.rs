use crate::board::{Board, GameOutcome, Player, Score};

/// A Nim move: shrink heap `heap` to exactly `new_size` objects.
///
/// Moves name the size a heap is left at, not the number of objects removed.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct NimMove {
    pub heap: usize,
    pub new_size: u32,
}

/// A Nim position: heap sizes and the player to move.
///
/// The player who empties the last heap wins.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct NimBoard {
    heaps: Vec<u32>,
    to_move: Player,
}

impl Default for NimBoard {
    fn default() -> Self {
        NimBoard::new(vec![3, 4, 5])
    }
}

impl NimBoard {
    /// Creates a position with `Player::First` to move.
    pub fn new(heaps: Vec<u32>) -> Self {
        Self {
            heaps,
            to_move: Player::First,
        }
    }

    /// Current heap sizes.
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Total number of objects left on the board.
    pub fn total(&self) -> u32 {
        self.heaps.iter().sum()
    }

    /// XOR of all heap sizes. The player to move can force a win iff this is non-zero.
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }
}

impl Board for NimBoard {
    type Move = NimMove;
    type Player = Player;

    fn get_current_player(&self) -> Player {
        self.to_move
    }

    /// Once every heap is empty, the player who made the last move has won.
    fn get_outcome(&self) -> GameOutcome<Player> {
        if self.total() == 0 {
            GameOutcome::Won(self.to_move.opponent())
        } else {
            GameOutcome::InProgress
        }
    }

    /// Heaps in order, and for each heap every smaller size in ascending order.
    fn get_available_moves(&self) -> Vec<NimMove> {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| (0..size).map(move |new_size| NimMove { heap, new_size }))
            .collect()
    }

    fn apply_move(&self, b_move: &NimMove) -> Self {
        let mut heaps = self.heaps.clone();
        heaps[b_move.heap] = b_move.new_size;
        Self {
            heaps,
            to_move: self.to_move.opponent(),
        }
    }

    fn evaluate(&self, perspective: Player) -> Score {
        match self.get_outcome() {
            GameOutcome::Won(winner) if winner == perspective => 1,
            GameOutcome::Won(_) => -1,
            _ => 0,
        }
    }

    /// 1 if the move takes the last object, otherwise 0.
    fn evaluate_move(&self, b_move: &NimMove) -> Score {
        let remaining = self.total() - self.heaps[b_move.heap] + b_move.new_size;
        if remaining == 0 { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome, Player};
    use crate::boards::nim::{NimBoard, NimMove};

    fn nim_move(heap: usize, new_size: u32) -> NimMove {
        NimMove { heap, new_size }
    }

    #[test]
    fn single_heap_moves_are_target_sizes() {
        let board = NimBoard::new(vec![5]);
        assert_eq!(
            board.get_available_moves(),
            vec![
                nim_move(0, 0),
                nim_move(0, 1),
                nim_move(0, 2),
                nim_move(0, 3),
                nim_move(0, 4),
            ]
        );
    }

    #[test]
    fn two_single_heaps() {
        let board = NimBoard::new(vec![1, 1]);
        assert_eq!(
            board.get_available_moves(),
            vec![nim_move(0, 0), nim_move(1, 0)]
        );
    }

    #[test]
    fn empty_heaps_are_skipped() {
        let board = NimBoard::new(vec![0, 2, 0]);
        assert_eq!(
            board.get_available_moves(),
            vec![nim_move(1, 0), nim_move(1, 1)]
        );
    }

    #[test]
    fn last_mover_wins() {
        // arrange
        let board = NimBoard::new(vec![0, 3]);

        // act
        let next = board.apply_move(&nim_move(1, 0));

        // assert
        assert_eq!(board.heaps(), &[0, 3]);
        assert_eq!(next.heaps(), &[0, 0]);
        assert_eq!(next.get_current_player(), Player::Second);
        assert_eq!(next.get_outcome(), GameOutcome::Won(Player::First));
        assert!(next.get_available_moves().is_empty());
        assert_eq!(next.evaluate(Player::First), 1);
        assert_eq!(next.evaluate(Player::Second), -1);
    }

    #[test]
    fn move_heuristic_scores_emptying_moves() {
        let board = NimBoard::new(vec![0, 3]);
        assert_eq!(board.evaluate_move(&nim_move(1, 0)), 1);
        assert_eq!(board.evaluate_move(&nim_move(1, 1)), 0);

        let board = NimBoard::new(vec![2, 3]);
        assert_eq!(board.evaluate_move(&nim_move(1, 0)), 0);
    }

    #[test]
    fn nim_sum_and_total() {
        let board = NimBoard::default();
        assert_eq!(board.total(), 12);
        assert_eq!(board.nim_sum(), 2);
        assert_eq!(NimBoard::new(vec![1, 2, 3]).nim_sum(), 0);
    }
}
