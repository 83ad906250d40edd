use crate::{
    common::Cell,
    event::Event,
    state::{DerivedState, GameStatus},
    Board,
};

const MOVE_MENU_TEXT: &str = "\
1 2 3
4 5 6  [1-9] Make move corresponding to square
7 8 9
       [R]andom square
       [H]euristic AI    (TODO)";

const GAME_MENU: [(char, &str); 4] = [
    ('u', "[U]ndo last move  (TODO)"),
    ('n', "[N]ew Game"),
    ('s', "[S]et board"),
    ('q', "[Q]uit"),
];

const MENU_WIDTH: usize = 80;

/// Draw the 3x3 grid with up to three lines of text beside it.
pub fn render_board(board: &Board, side: [&str; 3]) -> String {
    let marks: Vec<char> = board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => ' ',
            Cell::Taken(p) => p.symbol(),
        })
        .collect();
    let mut out = String::new();
    for (row, text) in side.iter().enumerate() {
        let base = row * 3;
        out.push_str(&format!(
            " {} | {} | {}      {}",
            marks[base],
            marks[base + 1],
            marks[base + 2],
            text
        ));
        if row < 2 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(state: &DerivedState) -> String {
    match state.status() {
        GameStatus::InProgress => format!(
            "Turn {}: Player {}",
            state.turn_number, state.current_player
        ),
        GameStatus::Won(player) => format!("Player {} won!", player),
        GameStatus::Tied => "Tie game...".to_string(),
    }
}

/// Command menu; square choices are only listed while moves remain.
pub fn menu_text(state: &DerivedState, default_command: char) -> String {
    let mut out = format!("\n{:_<width$}\n", "______ Commands ", width = MENU_WIDTH);
    if !state.valid_moves.is_empty() {
        out.push_str(MOVE_MENU_TEXT);
        out.push_str("\n\n");
    }
    for (letter, label) in GAME_MENU {
        out.push_str("       ");
        out.push_str(label);
        if letter == default_command {
            let pad = 18usize.saturating_sub(label.len());
            out.push_str(&" ".repeat(pad));
            out.push_str("[Default]");
        }
        out.push('\n');
    }
    out
}

/// Prompt listing the commands, with the default upper-cased.
pub fn prompt_text(default_command: char) -> String {
    let letters: Vec<String> = ['r', 'h', 'u', 'n', 's', 'q']
        .iter()
        .map(|&c| {
            if c == default_command {
                c.to_ascii_uppercase().to_string()
            } else {
                c.to_string()
            }
        })
        .collect();
    format!("Enter command (1-9/{}): ", letters.join("/"))
}

/// Human-readable outcome of the last command. The last event that has
/// something to say wins.
pub fn result_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Moved { player, position } => {
                text = format!("Player {} played square {}", player, position);
            }
            Event::GotInvalidMove { .. } => text = "Invalid move!".to_string(),
            Event::GotCommandNotImplemented { .. } => {
                text = "Sorry~ Not implemented yet!".to_string();
            }
            Event::GotCommandUnknown { command } => {
                text = format!("Unknown command '{}'", command);
            }
            Event::StartedNewGame => text = "Started a new game".to_string(),
            Event::BoardSet { board } => {
                text = format!("Board set to {}", Board::normalize(board));
            }
            Event::GameWon { player, .. } => text = format!("Player {} won!", player),
            Event::GameTied => text = "Tie game...".to_string(),
            Event::GotQuit => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::derive_str;

    #[test]
    fn board_layout() {
        let board = Board::normalize("x_o ___ __x");
        let text = render_board(&board, ["a", "b", "c"]);
        let expected = " x |   | o      a\n---+---+---\n   |   |        b\n---+---+---\n   |   | x      c";
        assert_eq!(text, expected);
    }

    #[test]
    fn status_lines() {
        assert_eq!(status_line(&derive_str("")), "Turn 1: Player X");
        assert_eq!(status_line(&derive_str("ooo xx_ x__")), "Player O won!");
        assert_eq!(status_line(&derive_str("xox xoo oxx")), "Tie game...");
    }

    #[test]
    fn menu_hides_moves_when_game_is_over() {
        let open = menu_text(&derive_str(""), 'q');
        let done = menu_text(&derive_str("xxx oo_ ___"), 'q');
        assert!(open.contains("[R]andom square"));
        assert!(!done.contains("[R]andom square"));
        assert!(done.contains("[Q]uit"));
        assert!(done.contains("[Default]"));
    }

    #[test]
    fn prompt_marks_default() {
        assert_eq!(prompt_text('q'), "Enter command (1-9/r/h/u/n/s/Q): ");
        assert_eq!(prompt_text('r'), "Enter command (1-9/R/h/u/n/s/q): ");
    }

    #[test]
    fn last_event_wins() {
        let events = [
            Event::GotCommandUnknown { command: 'z' },
            Event::StartedNewGame,
        ];
        assert_eq!(result_text(&events), "Started a new game");
        assert_eq!(result_text(&[Event::GotQuit]), "");
    }
}
