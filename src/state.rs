//! Everything about a game that can be worked out from the board alone.

use crate::board::{Board, Position, Row};
use crate::common::{Cell, Player};
use crate::config::{BOARD_CELLS, ROWS};

/// Number of squares held by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// Outcome of a game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// State derived from a board. Never stored; recompute it whenever the board
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedState {
    pub board: Board,
    pub counts: Counts,
    /// 1 on an empty board, 10 once every square is filled.
    pub turn_number: usize,
    pub current_player: Player,
    /// Empty squares, or nothing at all once a row has been won.
    pub valid_moves: Vec<Position>,
    pub winning_rows: Vec<Row>,
}

impl DerivedState {
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.valid_moves.contains(&pos)
    }

    /// Winner is whoever holds the first winning row.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winning_rows.first().and_then(|row| row.owner(&self.board)) {
            GameStatus::Won(player)
        } else if self.valid_moves.is_empty() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::InProgress)
    }
}

/// Derive the full game state from a board.
pub fn derive(board: &Board) -> DerivedState {
    let counts = Counts {
        x: board.count(Cell::Taken(Player::X)),
        o: board.count(Cell::Taken(Player::O)),
        empty: board.count(Cell::Empty),
    };
    let turn_number = BOARD_CELLS - counts.empty + 1;
    let current_player = if turn_number % 2 == 1 {
        Player::X
    } else {
        Player::O
    };

    let winning_rows: Vec<Row> = ROWS
        .iter()
        .copied()
        .filter(|row| row.owner(board).is_some())
        .collect();

    // A won game has no legal moves left, however many squares are empty.
    let valid_moves = if winning_rows.is_empty() {
        board.empty_positions().collect()
    } else {
        Vec::new()
    };

    DerivedState {
        board: *board,
        counts,
        turn_number,
        current_player,
        valid_moves,
        winning_rows,
    }
}

/// Normalize a raw board encoding and derive its state.
pub fn derive_str(raw: &str) -> DerivedState {
    derive(&Board::normalize(raw))
}
