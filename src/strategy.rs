use crate::{board::Position, state::DerivedState};
use rand::{rngs::SmallRng, Rng};

/// Something that can pick a square for the current player.
pub trait Strategy {
    /// Choose a square, or `None` when there is nothing to choose or the
    /// strategy cannot decide.
    fn select_position(&mut self, rng: &mut SmallRng, state: &DerivedState) -> Option<Position>;
}

/// Picks uniformly among the valid moves.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn select_position(&mut self, rng: &mut SmallRng, state: &DerivedState) -> Option<Position> {
        if state.valid_moves.is_empty() {
            return None;
        }
        let i = rng.random_range(0..state.valid_moves.len());
        Some(state.valid_moves[i])
    }
}

/// Placeholder for a row-scoring AI.
///
/// The intended approach scores each row from how many of its squares hold
/// the mover's mark, are empty, or hold the opponent's mark, then plays the
/// free square with the best total, opening with a random move. Until the
/// row weights are settled this never picks anything.
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for HeuristicStrategy {
    fn select_position(&mut self, _rng: &mut SmallRng, _state: &DerivedState) -> Option<Position> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{derive, derive_str};
    use crate::Board;
    use rand::SeedableRng;

    #[test]
    fn random_only_picks_valid_moves() {
        let mut rng = SmallRng::seed_from_u64(7);
        let state = derive_str("xo_ x_o ox_");
        for _ in 0..50 {
            let pos = RandomStrategy::new()
                .select_position(&mut rng, &state)
                .unwrap();
            assert!(state.is_valid_move(pos));
        }
    }

    #[test]
    fn random_has_nothing_on_finished_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let state = derive_str("xxx oo_ ___");
        assert_eq!(RandomStrategy::new().select_position(&mut rng, &state), None);
    }

    #[test]
    fn heuristic_is_not_ready() {
        let mut rng = SmallRng::seed_from_u64(7);
        let state = derive(&Board::new());
        assert_eq!(HeuristicStrategy::new().select_position(&mut rng, &state), None);
    }
}
