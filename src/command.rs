//! Turning a raw input line into a command and its parameters.

/// Commands understood at the prompt, keyed by their first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `m`: move to the square named in the params. Digits 1-9 are shorthand.
    Move,
    /// `r`: move to a random free square.
    Random,
    /// `h`: let the heuristic AI pick a square.
    Heuristic,
    /// `u`: undo the last move.
    Undo,
    /// `n`: start a new game.
    NewGame,
    /// `s`: replace the board with the encoding in the params.
    SetBoard,
    /// `q`: leave the game.
    Quit,
    /// Anything else, carrying the letter that was typed.
    Unknown(char),
}

impl Command {
    pub fn from_letter(letter: char) -> Self {
        match letter.to_ascii_lowercase() {
            'm' => Command::Move,
            'r' => Command::Random,
            'h' => Command::Heuristic,
            'u' => Command::Undo,
            'n' => Command::NewGame,
            's' => Command::SetBoard,
            'q' => Command::Quit,
            other => Command::Unknown(other),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Command::Move => 'm',
            Command::Random => 'r',
            Command::Heuristic => 'h',
            Command::Undo => 'u',
            Command::NewGame => 'n',
            Command::SetBoard => 's',
            Command::Quit => 'q',
            Command::Unknown(c) => c,
        }
    }
}

/// A command together with whatever text followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub params: String,
}

/// Split an input line into a command and its params.
///
/// Input is trimmed and lower-cased first. A leading digit 1-9 is a move to
/// that square. Otherwise the first character picks the command and
/// `default_command` stands in for an empty line. When the line has several
/// words the params are the words after the first; otherwise they are the
/// characters after the first, so `m5` and `m 5` mean the same thing.
pub fn parse_input(raw: &str, default_command: char) -> ParsedInput {
    let line = raw.trim().to_lowercase();

    let mut chars = line.chars();
    let first = chars.next();

    if let Some(digit) = first.filter(|&c| matches!(c, '1'..='9')) {
        return ParsedInput {
            command: Command::Move,
            params: digit.to_string(),
        };
    }

    let command = Command::from_letter(first.unwrap_or(default_command));
    let params = if line.contains(' ') {
        line.split(' ').skip(1).collect::<Vec<_>>().join(" ")
    } else {
        chars.collect()
    };

    ParsedInput { command, params }
}
