use proptest::prelude::*;
use tictactoe::{derive, derive_str, Board, Event, EventLog, Player, Position};

/// Play the requested squares in order, skipping any that are not legal.
fn alternate_moves(squares: &[usize]) -> Board {
    let mut log = EventLog::new();
    for &n in squares {
        let state = derive(&log.project());
        let Ok(position) = Position::new(n) else {
            continue;
        };
        if state.is_valid_move(position) {
            log.append([Event::Moved {
                player: state.current_player,
                position,
            }]);
        }
    }
    log.project()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn normalization_is_a_fixed_point(raw in "[xXoO_ #a-z0-9]{0,20}") {
        let state = derive_str(&raw);
        prop_assert_eq!(derive(&state.board), state.clone());
        prop_assert_eq!(derive_str(&state.board.encode()), state.clone());
        prop_assert_eq!(derive_str(&state.board.pretty()), state);
    }

    #[test]
    fn won_boards_have_no_moves(raw in "[xo_]{9}") {
        let state = derive_str(&raw);
        if !state.winning_rows.is_empty() {
            prop_assert!(state.valid_moves.is_empty());
        } else {
            prop_assert_eq!(state.valid_moves.len(), state.counts.empty);
        }
    }

    #[test]
    fn counts_cover_the_board(raw in ".{0,30}") {
        let state = derive_str(&raw);
        prop_assert_eq!(state.counts.x + state.counts.o + state.counts.empty, 9);
        prop_assert_eq!(state.turn_number, 10 - state.counts.empty);
    }

    #[test]
    fn turn_parity(squares in proptest::collection::vec(1usize..=9, 0..20)) {
        let board = alternate_moves(&squares);
        let state = derive(&board);
        let filled = 9 - state.counts.empty;
        prop_assert_eq!(state.current_player == Player::X, filled % 2 == 0);
        prop_assert!(state.counts.x == state.counts.o || state.counts.x == state.counts.o + 1);
    }
}
