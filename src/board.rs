use std::fmt::Debug;

/// The numeric type produced by heuristics and backed up by the search.
pub type Score = i32;

/// Upper bound of every score. Used as the initial `beta` of a search.
pub const INFINITY: Score = Score::MAX;

/// Lower bound of every score. Kept symmetric to [`INFINITY`] so that negation never overflows.
pub const NEG_INFINITY: Score = -Score::MAX;

/// Brings a heuristic value into `NEG_INFINITY..=INFINITY`. `Score::MIN` becomes
/// `NEG_INFINITY`, every other value is unchanged.
pub fn clamp_score(score: Score) -> Score {
    score.clamp(NEG_INFINITY, INFINITY)
}

/// The central trait of the library, defining the interface for a game state.
///
/// To search a custom game, this trait must be implemented. A board is an immutable value:
/// `apply_move` returns a new board and never modifies `self`, so the search can share
/// positions freely between branches.
pub trait Board: Clone {
    /// The type representing a move in the game. Equality must be structural.
    type Move: Clone + PartialEq + Debug;

    /// The type identifying one of the two players.
    type Player: Copy + PartialEq + Debug;

    /// Returns the player whose turn it is to make a move.
    fn get_current_player(&self) -> Self::Player;

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome<Self::Player>;

    /// Returns a list of all legal moves available from the current state.
    ///
    /// Must be empty exactly when the game is over.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a move produced by `get_available_moves` and returns the resulting board.
    fn apply_move(&self, b_move: &Self::Move) -> Self;

    /// Static evaluation of the position from the point of view of `perspective`.
    fn evaluate(&self, perspective: Self::Player) -> Score;

    /// Scores a move from the point of view of the player making it.
    fn evaluate_move(&self, b_move: &Self::Move) -> Score {
        self.apply_move(b_move).evaluate(self.get_current_player())
    }

    /// Returns every position reachable in one move, in move generation order.
    fn get_children(&self) -> Vec<Self> {
        self.get_available_moves()
            .iter()
            .map(|b_move| self.apply_move(b_move))
            .collect()
    }

    /// Returns `true` if no further moves can be made.
    fn is_terminal(&self) -> bool {
        self.get_outcome() != GameOutcome::InProgress
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum GameOutcome<P> {
    /// The game is still ongoing.
    InProgress,
    /// The given player has won.
    Won(P),
    /// The game has ended in a draw.
    Draw,
}

impl<P> GameOutcome<P> {
    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<P> {
        match self {
            GameOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Generic two-player identity for games without their own notion of sides.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Player {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{GameOutcome, INFINITY, NEG_INFINITY, Player, Score, clamp_score};

    #[test]
    fn sentinels_negate_without_overflow() {
        assert_eq!(-INFINITY, NEG_INFINITY);
        assert_eq!(-NEG_INFINITY, INFINITY);
    }

    #[test]
    fn clamped_scores_negate_without_overflow() {
        assert_eq!(clamp_score(Score::MIN), NEG_INFINITY);
        assert_eq!(-clamp_score(Score::MIN), INFINITY);
        assert_eq!(clamp_score(Score::MAX), INFINITY);
        assert_eq!(clamp_score(-7), -7);
    }

    #[test]
    fn opponent_flips() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent().opponent(), Player::Second);
    }

    #[test]
    fn winner_only_for_won() {
        assert_eq!(GameOutcome::Won(Player::First).winner(), Some(Player::First));
        assert_eq!(GameOutcome::<Player>::Draw.winner(), None);
        assert_eq!(GameOutcome::<Player>::InProgress.winner(), None);
    }
}
