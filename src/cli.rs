//! Line-oriented terminal front end.

use std::io::{BufRead, Write};

use crate::{config::GameConfig, session::Session, ui};
use rand::rngs::SmallRng;

/// Clear the terminal and move the cursor to the top left.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[0;0H";

/// Run the prompt loop until the player quits or input ends, returning the
/// final session.
pub fn run_cli<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &GameConfig,
    rng: &mut SmallRng,
) -> anyhow::Result<Session> {
    let mut session = Session::new();
    loop {
        if config.clear_screen {
            write!(output, "{}", CLEAR_SCREEN)?;
        }
        writeln!(output, "{}", session.render(config))?;
        write!(output, "{}", ui::prompt_text(config.default_command))?;
        output.flush()?;

        let mut line = String::new();
        let line = if input.read_line(&mut line)? == 0 {
            log::info!("end of input, quitting");
            writeln!(output)?;
            "q".to_string()
        } else {
            line.trim_end_matches(['\r', '\n']).to_string()
        };

        session = session.step(&line, config, rng).session;
        if session.is_finished() {
            break;
        }
    }
    Ok(session)
}
