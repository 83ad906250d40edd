//! Common types for tic-tac-toe: players, cells and board errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Lower-case symbol used in board encodings.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Parse a board symbol, ignoring case.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'x' => Some(Player::X),
            'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => crate::config::EMPTY_SYMBOL,
            Cell::Taken(p) => p.symbol(),
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        if ch == crate::config::EMPTY_SYMBOL {
            Some(Cell::Empty)
        } else {
            Player::from_symbol(ch).map(Cell::Taken)
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Square number outside 1..=9.
    InvalidPosition(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPosition(n) => {
                write!(f, "Position {} is out of range - must be 1-9", n)
            }
        }
    }
}

impl std::error::Error for BoardError {}
