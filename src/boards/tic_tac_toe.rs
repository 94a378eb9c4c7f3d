use crate::board::{Board, GameOutcome, Score};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Every line of three cells, as board indices: rows, then columns, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Base score of a won position. Positional scores always stay far below it.
pub const WIN_SCORE: Score = 1_000;

/// Positional weight of an open line holding 0, 1 or 2 marks of a single player.
const LINE_WEIGHTS: [Score; 3] = [0, 1, 10];

/// Errors produced while building a board from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 3 rows, found {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {len} cells, expected 3")]
    InvalidRowLength { row: usize, len: usize },

    #[error("unknown cell symbol {0:?}")]
    InvalidSymbol(char),

    #[error("cell ({row}, {col}) is outside the board")]
    CellOutOfRange { row: u8, col: u8 },
}

/// One of the two tic-tac-toe symbols.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell of the board, addressed by row and column (both 0..3).
///
/// Coordinates are checked on construction and on deserialization, so every `Cell` is on the
/// board.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawCell {
    row: u8,
    col: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = BoardError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::try_new(raw.row, raw.col)
    }
}

impl Cell {
    /// The middle cell.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// Creates a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more. Use [`Cell::try_new`] for unchecked input.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "cell out of range");
        Self { row, col }
    }

    /// Creates a cell, rejecting coordinates outside the board.
    pub fn try_new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(BoardError::CellOutOfRange { row, col })
        }
    }

    /// Row of the cell, 0..3.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column of the cell, 0..3.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index of the cell, 0..9.
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Inverse of [`Cell::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or more.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 9, "cell index out of range");
        Self {
            row: (index / 3) as u8,
            col: (index % 3) as u8,
        }
    }

    /// Whether this is the middle cell.
    pub fn is_center(self) -> bool {
        self == Cell::CENTER
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable tic-tac-toe position: the 3x3 grid and the mark to move next.
///
/// The board does not check that the mark counts are consistent with `to_move`, so any grid
/// can be analysed from either side.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct TicTacToeBoard {
    cells: [Option<Mark>; 9],
    to_move: Mark,
}

impl Default for TicTacToeBoard {
    /// Creates an empty board with 'X' to move.
    fn default() -> Self {
        TicTacToeBoard::new(Mark::X)
    }
}

impl TicTacToeBoard {
    /// Creates an empty board with `to_move` to move.
    pub fn new(to_move: Mark) -> Self {
        Self {
            cells: [None; 9],
            to_move,
        }
    }

    /// Creates a board from rows of cells.
    pub fn from_rows(rows: [[Option<Mark>; 3]; 3], to_move: Mark) -> Self {
        let mut cells = [None; 9];
        for (i, cell) in rows.iter().flatten().enumerate() {
            cells[i] = *cell;
        }
        Self { cells, to_move }
    }

    /// Parses a board from text.
    ///
    /// Rows are separated by `/` or newlines. `X` and `O` (either case) are marks, while `.`,
    /// `_`, `-` and spaces are empty cells.
    ///
    /// ```
    /// use minimax_lib::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};
    ///
    /// let board = TicTacToeBoard::parse("XX./.O./...", Mark::O).unwrap();
    /// assert_eq!(board.get(Cell::new(0, 1)), Some(Mark::X));
    /// assert_eq!(board.empty_count(), 6);
    /// ```
    pub fn parse(text: &str, to_move: Mark) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .split(['/', '\n'])
            .map(|row| row.trim_end_matches('\r'))
            .collect();
        if rows.len() != 3 {
            return Err(BoardError::InvalidRowCount(rows.len()));
        }

        let mut cells = [None; 9];
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != 3 {
                return Err(BoardError::InvalidRowLength { row, len });
            }
            for (col, symbol) in text.chars().enumerate() {
                cells[row * 3 + col] = match symbol {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    '.' | '_' | '-' | ' ' => None,
                    other => return Err(BoardError::InvalidSymbol(other)),
                };
            }
        }
        Ok(Self { cells, to_move })
    }

    /// Returns the same grid with `to_move` to move.
    pub fn with_to_move(self, to_move: Mark) -> Self {
        Self { to_move, ..self }
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark occupying `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        (0..9)
            .filter(|&i| self.cells[i].is_none())
            .map(Cell::from_index)
            .collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Returns `Won` if any line holds three equal marks, otherwise `Draw` for a full board
    /// and `InProgress` for everything else. A completed line always beats a full board.
    pub fn check_winner(&self) -> GameOutcome<Mark> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return GameOutcome::Won(mark);
                }
            }
        }

        if self.cells.iter().any(|c| c.is_none()) {
            GameOutcome::InProgress
        } else {
            GameOutcome::Draw
        }
    }

    /// Returns `true` if `mark` placed on the empty `cell` completes a line.
    pub fn completes_line(&self, cell: Cell, mark: Mark) -> bool {
        let index = cell.index();
        self.cells[index].is_none()
            && LINES.iter().filter(|line| line.contains(&index)).any(|line| {
                line.iter()
                    .all(|&i| i == index || self.cells[i] == Some(mark))
            })
    }

    /// Number of lines where `mark` has two cells and the third is empty.
    pub fn count_threats(&self, mark: Mark) -> usize {
        LINES
            .iter()
            .filter(|line| {
                let (mine, empty) = self.line_counts(line, mark);
                mine == 2 && empty == 1
            })
            .count()
    }

    /// Places `mark` on `cell` without changing the side to move.
    pub fn with_mark(self, cell: Cell, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[cell.index()] = Some(mark);
        Self { cells, ..self }
    }

    fn line_counts(&self, line: &[usize; 3], mark: Mark) -> (usize, usize) {
        line.iter().fold((0, 0), |(mine, empty), &i| match self.cells[i] {
            Some(m) if m == mark => (mine + 1, empty),
            None => (mine, empty + 1),
            Some(_) => (mine, empty),
        })
    }

    /// Open-line score of an undecided position from the point of view of `mark`.
    fn positional_score(&self, mark: Mark) -> Score {
        let opponent = mark.opponent();
        LINES
            .iter()
            .map(|line| {
                let (mine, _) = self.line_counts(line, mark);
                let (theirs, _) = self.line_counts(line, opponent);
                match (mine, theirs) {
                    (m, 0) => LINE_WEIGHTS[m.min(2)],
                    (0, t) => -LINE_WEIGHTS[t.min(2)],
                    _ => 0,
                }
            })
            .sum()
    }
}

impl Board for TicTacToeBoard {
    type Move = Cell;
    type Player = Mark;

    fn get_current_player(&self) -> Mark {
        self.to_move
    }

    fn get_outcome(&self) -> GameOutcome<Mark> {
        self.check_winner()
    }

    fn get_available_moves(&self) -> Vec<Cell> {
        if self.check_winner() != GameOutcome::InProgress {
            return Vec::new();
        }
        self.empty_cells()
    }

    fn apply_move(&self, b_move: &Cell) -> Self {
        let mut cells = self.cells;
        cells[b_move.index()] = Some(self.to_move);
        Self {
            cells,
            to_move: self.to_move.opponent(),
        }
    }

    /// Won positions score `WIN_SCORE` plus the number of empty cells, so quicker wins and
    /// slower losses are preferred. Undecided positions get a small open-line score.
    fn evaluate(&self, perspective: Mark) -> Score {
        match self.check_winner() {
            GameOutcome::Won(winner) => {
                let score = WIN_SCORE + self.empty_count() as Score;
                if winner == perspective { score } else { -score }
            }
            GameOutcome::Draw => 0,
            GameOutcome::InProgress => self.positional_score(perspective),
        }
    }
}

impl Display for TicTacToeBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                let symbol = self.cells[row * 3 + col].map_or('.', Mark::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome};
    use crate::boards::tic_tac_toe::{BoardError, Cell, LINES, Mark, TicTacToeBoard, WIN_SCORE};

    #[test]
    fn every_line_wins() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                // arrange
                let mut board = TicTacToeBoard::default();
                for i in line {
                    board = board.with_mark(Cell::from_index(i), mark);
                }

                // act
                let outcome = board.check_winner();

                // assert
                assert_eq!(outcome, GameOutcome::Won(mark), "line {line:?}");
                assert!(board.get_available_moves().is_empty());
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = TicTacToeBoard::parse("XOX/XOO/OXX", Mark::O).unwrap();
        assert_eq!(board.check_winner(), GameOutcome::Draw);
        assert!(board.get_available_moves().is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn full_board_with_line_is_won_not_draw() {
        let board = TicTacToeBoard::parse("XXX/OOX/XOO", Mark::O).unwrap();
        assert_eq!(board.check_winner(), GameOutcome::Won(Mark::X));
    }

    #[test]
    fn partial_board_in_progress() {
        let board = TicTacToeBoard::parse("XO./.X./..O", Mark::X).unwrap();
        assert_eq!(board.check_winner(), GameOutcome::InProgress);
        assert_eq!(TicTacToeBoard::default().check_winner(), GameOutcome::InProgress);
    }

    #[test]
    fn moves_are_row_major_empty_cells() {
        let board = TicTacToeBoard::parse("X.O/.X./O..", Mark::X).unwrap();
        assert_eq!(
            board.get_available_moves(),
            vec![
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
        assert_eq!(TicTacToeBoard::default().get_available_moves().len(), 9);
    }

    #[test]
    fn apply_move_returns_new_board() {
        // arrange
        let board = TicTacToeBoard::default();

        // act
        let next = board.apply_move(&Cell::CENTER);

        // assert
        assert_eq!(board, TicTacToeBoard::default());
        assert_eq!(next.get(Cell::CENTER), Some(Mark::X));
        assert_eq!(next.to_move(), Mark::O);
        assert_eq!(next.get_children().len(), 8);
    }

    #[test]
    fn parse_accepts_newlines_and_rejects_garbage() {
        let board = TicTacToeBoard::parse("X_O\n_ _\n..x", Mark::O).unwrap();
        assert_eq!(board.to_string(), "X.O\n...\n..X");
        assert_eq!(
            TicTacToeBoard::parse(&board.to_string(), Mark::O).unwrap(),
            board
        );

        assert_eq!(
            TicTacToeBoard::parse("XX./...", Mark::X),
            Err(BoardError::InvalidRowCount(2))
        );
        assert_eq!(
            TicTacToeBoard::parse("XX./..../...", Mark::X),
            Err(BoardError::InvalidRowLength { row: 1, len: 4 })
        );
        assert_eq!(
            TicTacToeBoard::parse("XX./.Z./...", Mark::X),
            Err(BoardError::InvalidSymbol('Z'))
        );
    }

    #[test]
    fn cell_geometry() {
        assert_eq!(Cell::try_new(3, 0), Err(BoardError::CellOutOfRange { row: 3, col: 0 }));
        assert_eq!(Cell::try_new(2, 2), Ok(Cell::new(2, 2)));
        assert!(Cell::new(1, 1).is_center());
        assert!(Cell::new(2, 0).is_corner());
        assert!(!Cell::new(0, 1).is_corner());
        assert!(!Cell::new(1, 1).is_corner());
        for i in 0..9 {
            assert_eq!(Cell::from_index(i).index(), i);
        }
    }

    #[test]
    fn deserialized_cells_stay_on_the_board() {
        // act
        let off_board = serde_json::from_str::<Cell>(r#"{"row":3,"col":1}"#);
        let huge = serde_json::from_str::<Cell>(r#"{"row":255,"col":255}"#);
        let corner = serde_json::from_str::<Cell>(r#"{"row":2,"col":0}"#);

        // assert
        assert!(off_board.is_err());
        assert!(huge.is_err());
        let corner = corner.unwrap();
        assert_eq!((corner.row(), corner.col()), (2, 0));
        assert_eq!(TicTacToeBoard::default().get(corner), None);
        assert_eq!(serde_json::to_string(&corner).unwrap(), r#"{"row":2,"col":0}"#);
    }

    #[test]
    #[should_panic(expected = "cell out of range")]
    fn new_rejects_off_board_cell() {
        Cell::new(3, 1);
    }

    #[test]
    fn completes_line_and_threats() {
        let board = TicTacToeBoard::parse("XX./.O./..O", Mark::X).unwrap();
        assert!(board.completes_line(Cell::new(0, 2), Mark::X));
        assert!(!board.completes_line(Cell::new(0, 2), Mark::O));
        assert!(!board.completes_line(Cell::new(0, 0), Mark::O));
        assert_eq!(board.count_threats(Mark::X), 1);
        assert_eq!(board.count_threats(Mark::O), 0);
    }

    #[test]
    fn evaluation_prefers_center_and_quick_wins() {
        let empty = TicTacToeBoard::default();
        let center = empty.evaluate_move(&Cell::CENTER);
        let corner = empty.evaluate_move(&Cell::new(0, 0));
        let edge = empty.evaluate_move(&Cell::new(0, 1));
        assert!(center > corner && corner > edge);

        let won = TicTacToeBoard::parse("XXX/OO./...", Mark::O).unwrap();
        assert_eq!(won.evaluate(Mark::X), WIN_SCORE + 4);
        assert_eq!(won.evaluate(Mark::O), -(WIN_SCORE + 4));
    }
}
