//! Domain events. The event log is built from these and nothing else.

use crate::board::{Position, Row};
use crate::common::Player;
use serde::{Deserialize, Serialize};

/// Something that happened in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data", rename_all = "kebab-case")]
pub enum Event {
    /// A player took a square.
    Moved { player: Player, position: Position },
    /// The board was cleared.
    StartedNewGame,
    /// The board was overwritten from a raw encoding. The encoding is stored
    /// as typed and normalized when the log is projected.
    BoardSet { board: String },
    /// A move was rejected. `position` is the requested square number, if
    /// one could be read or picked.
    GotInvalidMove {
        player: Player,
        position: Option<usize>,
    },
    GotCommandNotImplemented { command: char },
    GotCommandUnknown { command: char },
    /// The player asked to leave.
    GotQuit,
    /// Legacy: older logs recorded wins explicitly. The outcome is now
    /// derived from the board, so this is never emitted.
    GameWon {
        player: Player,
        winning_rows: Vec<Row>,
    },
    /// Legacy counterpart of [`Event::GameWon`] for a full board.
    GameTied,
}

impl Event {
    /// Stable kebab-case name of the event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Moved { .. } => "moved",
            Event::StartedNewGame => "started-new-game",
            Event::BoardSet { .. } => "board-set",
            Event::GotInvalidMove { .. } => "got-invalid-move",
            Event::GotCommandNotImplemented { .. } => "got-command-not-implemented",
            Event::GotCommandUnknown { .. } => "got-command-unknown",
            Event::GotQuit => "got-quit",
            Event::GameWon { .. } => "game-won",
            Event::GameTied => "game-tied",
        }
    }

    /// Whether projecting this event can change the board.
    pub fn affects_board(&self) -> bool {
        matches!(
            self,
            Event::Moved { .. } | Event::StartedNewGame | Event::BoardSet { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_matches_name() {
        let events = [
            Event::Moved {
                player: Player::X,
                position: Position::new(5).unwrap(),
            },
            Event::StartedNewGame,
            Event::BoardSet {
                board: "xo".to_string(),
            },
            Event::GotInvalidMove {
                player: Player::O,
                position: None,
            },
            Event::GotCommandUnknown { command: 'z' },
            Event::GotQuit,
            Event::GameTied,
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["name"], event.name());
        }
    }

    #[test]
    fn moved_payload_shape() {
        let event = Event::Moved {
            player: Player::O,
            position: Position::new(3).unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"name":"moved","data":{"player":"o","position":3}}"#
        );
    }
}
