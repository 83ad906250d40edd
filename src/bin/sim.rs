use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::prelude::*;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::new('r', false);

    let mut session = Session::new();
    let mut turns = 0usize;
    while !session.state().is_over() {
        session = session.step("r", &config, &mut rng).session;
        turns += 1;
    }

    let state = session.state();
    let winner = match state.status() {
        GameStatus::Won(player) => Some(player),
        _ => None,
    };

    let result = json!({
        "winner": winner,
        "turns": turns,
        "board": state.board.pretty(),
        "events": session.log().events(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
