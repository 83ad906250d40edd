//! Decides which events a command produces. Never touches the log itself.

use crate::{
    board::Position,
    command::{Command, ParsedInput},
    event::Event,
    state::DerivedState,
    strategy::{HeuristicStrategy, RandomStrategy, Strategy},
};
use rand::rngs::SmallRng;

/// Read the square number at the start of `params`, the way a lenient
/// integer parse would: leading whitespace skipped, trailing junk ignored.
fn requested_square(params: &str) -> Option<usize> {
    let digits: String = params
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Emit `Moved` if `requested` is a valid move for the current player and
/// `GotInvalidMove` otherwise.
fn resolve_move(requested: Option<usize>, state: &DerivedState) -> Event {
    let player = state.current_player;
    match requested.and_then(|n| Position::new(n).ok()) {
        Some(position) if state.is_valid_move(position) => Event::Moved { player, position },
        _ => {
            log::info!("rejected move {:?} for player {}", requested, player);
            Event::GotInvalidMove {
                player,
                position: requested,
            }
        }
    }
}

/// Turn a parsed command into the events it produces against `state`.
pub fn process(input: &ParsedInput, state: &DerivedState, rng: &mut SmallRng) -> Vec<Event> {
    let event = match input.command {
        Command::Move => resolve_move(requested_square(&input.params), state),
        Command::Random => {
            let pick = RandomStrategy::new().select_position(rng, state);
            resolve_move(pick.map(Position::number), state)
        }
        Command::Heuristic => match HeuristicStrategy::new().select_position(rng, state) {
            Some(pos) => resolve_move(Some(pos.number()), state),
            None => Event::GotCommandNotImplemented {
                command: input.command.letter(),
            },
        },
        // Undo would truncate the log to before the last move; not supported yet.
        Command::Undo => Event::GotCommandNotImplemented {
            command: input.command.letter(),
        },
        Command::NewGame => Event::StartedNewGame,
        Command::SetBoard => Event::BoardSet {
            board: input.params.clone(),
        },
        Command::Quit => Event::GotQuit,
        Command::Unknown(command) => Event::GotCommandUnknown { command },
    };
    vec![event]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_input;
    use crate::common::Player;
    use crate::state::derive_str;
    use rand::SeedableRng;

    fn run(line: &str, board: &str) -> Vec<Event> {
        let mut rng = SmallRng::seed_from_u64(1);
        process(&parse_input(line, 'q'), &derive_str(board), &mut rng)
    }

    #[test]
    fn lenient_square_parse() {
        assert_eq!(requested_square(" 5abc"), Some(5));
        assert_eq!(requested_square("abc"), None);
        assert_eq!(requested_square(""), None);
    }

    #[test]
    fn occupied_square_is_invalid() {
        assert_eq!(
            run("5", "____x____"),
            vec![Event::GotInvalidMove {
                player: Player::O,
                position: Some(5)
            }]
        );
    }

    #[test]
    fn out_of_range_is_invalid() {
        assert_eq!(
            run("m 42", ""),
            vec![Event::GotInvalidMove {
                player: Player::X,
                position: Some(42)
            }]
        );
    }

    #[test]
    fn random_move_on_won_board_is_invalid() {
        assert_eq!(
            run("r", "ooo xx_ x__"),
            vec![Event::GotInvalidMove {
                player: Player::X,
                position: None
            }]
        );
    }

    #[test]
    fn stubs_and_plain_commands() {
        assert_eq!(
            run("h", ""),
            vec![Event::GotCommandNotImplemented { command: 'h' }]
        );
        assert_eq!(
            run("u", ""),
            vec![Event::GotCommandNotImplemented { command: 'u' }]
        );
        assert_eq!(run("n", "xo"), vec![Event::StartedNewGame]);
        assert_eq!(run("", ""), vec![Event::GotQuit]);
        assert_eq!(
            run("s x?o", ""),
            vec![Event::BoardSet {
                board: "x?o".to_string()
            }]
        );
    }
}
