use serde::Serialize;

/// How a move decision was reached. Created once per top-level search and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMetrics {
    /// The move was an immediate win or block, played without searching.
    pub immediate_move: bool,
    /// The depth bound handed to the search; 0 when no search ran.
    pub search_depth: u32,
}

impl SearchMetrics {
    /// Metrics of a move taken by the tactical shortcut.
    pub const fn immediate() -> Self {
        Self {
            immediate_move: true,
            search_depth: 0,
        }
    }

    /// Metrics of a move found by a search `depth` plies deep.
    pub const fn searched(depth: u32) -> Self {
        Self {
            immediate_move: false,
            search_depth: depth,
        }
    }

    /// Metrics of a position with no legal moves.
    pub const fn terminal() -> Self {
        Self::searched(0)
    }
}

/// The move chosen by the engine together with the metrics describing how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveDecision<M> {
    /// `None` exactly when the position has no legal moves.
    pub best_move: Option<M>,
    pub metrics: SearchMetrics,
}

impl<M> MoveDecision<M> {
    /// Whether the move came from the tactical shortcut.
    pub fn immediate_move(&self) -> bool {
        self.metrics.immediate_move
    }

    /// The depth bound handed to the search.
    pub fn search_depth(&self) -> u32 {
        self.metrics.search_depth
    }
}
