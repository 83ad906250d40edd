//! Commonly used types and utilities for ease of import.

pub use crate::{
    derive, parse_input, process, project, Board, DerivedState, Event, EventLog, GameConfig,
    GameStatus, Player, Position, Session,
};
