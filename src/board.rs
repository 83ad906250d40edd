//! Board model: squares, winning rows and the string encoding.

use crate::common::{BoardError, Cell, Player};
use crate::config::BOARD_CELLS;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A square on the board, numbered 1..=9 left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Build a position from its square number.
    pub fn new(number: usize) -> Result<Self, BoardError> {
        if (1..=BOARD_CELLS).contains(&number) {
            Ok(Position(number as u8))
        } else {
            Err(BoardError::InvalidPosition(number))
        }
    }

    /// Square number, 1..=9.
    pub fn number(self) -> usize {
        self.0 as usize
    }

    /// Zero-based index into the cell array.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All nine positions in order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_CELLS as u8).map(Position)
    }
}

impl TryFrom<u8> for Position {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::new(value as usize)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line of three squares that wins the game when one player holds all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row([Position; 3]);

impl Row {
    pub(crate) const fn new(a: u8, b: u8, c: u8) -> Self {
        Row([Position(a), Position(b), Position(c)])
    }

    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0.map(|p| board.get(p));
        match a.player() {
            Some(p) if a == b && a == c => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

/// Nine squares in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Build a board from a loosely formatted encoding.
    ///
    /// Characters other than `x`, `o` and `_` (in either case) are dropped,
    /// the rest fill squares in order and missing squares stay empty. Cells
    /// past the ninth are ignored. Never fails.
    pub fn normalize(raw: &str) -> Self {
        let mut board = Board::new();
        let symbols = raw
            .chars()
            .filter_map(|ch| Cell::from_symbol(ch.to_ascii_lowercase()))
            .take(BOARD_CELLS);
        for (slot, cell) in board.cells.iter_mut().zip(symbols) {
            *slot = cell;
        }
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Copy of this board with one square replaced.
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Number of squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions of the empty squares, in order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.get(p).is_empty())
    }

    /// Compact nine-character encoding, e.g. `xo_______`.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }

    /// Encoding grouped into rows, e.g. `xo_ ___ ___`.
    pub fn pretty(&self) -> String {
        let flat = self.encode();
        let mut out = String::with_capacity(BOARD_CELLS + 2);
        for (i, ch) in flat.chars().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_noise_and_pads() {
        let board = Board::normalize("#X-o  _X");
        assert_eq!(board.encode(), "xo_x_____");
    }

    #[test]
    fn normalize_drops_extra_cells() {
        let board = Board::normalize("xoxoxoxoxoxo");
        assert_eq!(board.encode(), "xoxoxoxox");
    }

    #[test]
    fn pretty_groups_rows() {
        let board = Board::normalize("xo_x_o__x");
        assert_eq!(board.pretty(), "xo_ x_o __x");
    }

    #[test]
    fn position_bounds() {
        assert!(Position::new(0).is_err());
        assert_eq!(Position::new(9).unwrap().index(), 8);
        assert_eq!(Position::new(10), Err(BoardError::InvalidPosition(10)));
    }

    #[test]
    fn row_owner_requires_three_equal_marks() {
        let board = Board::normalize("xx_ ooo ___");
        assert_eq!(Row::new(1, 2, 3).owner(&board), None);
        assert_eq!(Row::new(4, 5, 6).owner(&board), Some(Player::O));
        assert_eq!(Row::new(7, 8, 9).owner(&board), None);
    }
}
