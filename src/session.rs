//! A play session: the event log plus what the last screen needs to show.

use crate::{
    command::parse_input,
    config::GameConfig,
    event::Event,
    event_log::EventLog,
    processor::process,
    state::{derive, DerivedState},
    ui,
};
use rand::rngs::SmallRng;

/// Immutable session value. Each input line consumes it and produces the
/// next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    log: EventLog,
    last_input: String,
    result_text: String,
    quit: bool,
}

/// Outcome of feeding one line to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    /// Events appended to the log by this line.
    pub events: Vec<Event>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Set once a quit command has been processed.
    pub fn is_finished(&self) -> bool {
        self.quit
    }

    /// Current state, derived from the projected log.
    pub fn state(&self) -> DerivedState {
        derive(&self.log.project())
    }

    /// Process one input line.
    pub fn step(self, line: &str, config: &GameConfig, rng: &mut SmallRng) -> Step {
        let state = self.state();
        log::debug!("state before input: {:?}", state);

        let parsed = parse_input(line, config.default_command);
        log::debug!("parsed input {:?}", parsed);

        let events = process(&parsed, &state, rng);
        for event in &events {
            log::debug!("event {}: {:?}", event.name(), event);
        }

        let mut history = self.log;
        history.append(events.iter().cloned());
        if events.iter().any(Event::affects_board) {
            log::debug!("board now {}", history.project());
        }

        let session = Session {
            log: history,
            last_input: line.to_string(),
            result_text: ui::result_text(&events),
            quit: events.iter().any(|e| matches!(e, Event::GotQuit)),
        };
        Step { session, events }
    }

    /// Full screen text: board, status, last input, result and menu.
    pub fn render(&self, config: &GameConfig) -> String {
        let state = self.state();
        let status = ui::status_line(&state);
        let last_input = if self.last_input.is_empty() {
            String::new()
        } else {
            format!("Last input: {}", self.last_input)
        };
        let board = ui::render_board(
            &state.board,
            [status.as_str(), last_input.as_str(), self.result_text.as_str()],
        );
        format!(
            "\n{}\n{}",
            board,
            ui::menu_text(&state, config.default_command)
        )
    }
}
