use crate::board::Row;

/// Number of squares on the board.
pub const BOARD_CELLS: usize = 9;

/// Symbol used for an empty square in board encodings.
pub const EMPTY_SYMBOL: char = '_';

/// Command letter used when the player just presses enter.
pub const DEFAULT_COMMAND: char = 'q';

/// The eight winning lines, horizontal first, then vertical, then diagonal.
pub const ROWS: [Row; 8] = [
    Row::new(1, 2, 3),
    Row::new(4, 5, 6),
    Row::new(7, 8, 9),
    Row::new(1, 4, 7),
    Row::new(2, 5, 8),
    Row::new(3, 6, 9),
    Row::new(1, 5, 9),
    Row::new(3, 5, 7),
];

/// Runtime options for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Command letter substituted for empty input.
    pub default_command: char,
    /// Clear the terminal before each render. Turned off in debug mode so
    /// log output stays on screen.
    pub clear_screen: bool,
}

impl GameConfig {
    pub fn new(default_command: char, clear_screen: bool) -> Self {
        Self {
            default_command: default_command.to_ascii_lowercase(),
            clear_screen,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND, true)
    }
}
