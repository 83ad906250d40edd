//! Append-only event log and the fold that turns it into a board.

use crate::{board::Board, common::Cell, event::Event};
use serde::{Deserialize, Serialize};

/// Apply a single event to a board.
pub fn apply(board: Board, event: &Event) -> Board {
    match event {
        Event::Moved { player, position } => board.with(*position, Cell::Taken(*player)),
        Event::StartedNewGame => Board::new(),
        Event::BoardSet { board: raw } => Board::normalize(raw),
        _ => board,
    }
}

/// Replay events, in order, starting from an empty board.
pub fn project(events: &[Event]) -> Board {
    events.iter().fold(Board::new(), apply)
}

/// Ordered history of everything that happened in a session.
///
/// Events are only ever added at the end, one batch per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a batch of events at the end of the log.
    pub fn append<I: IntoIterator<Item = Event>>(&mut self, batch: I) {
        self.events.extend(batch);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The first `len` events, or the whole log if it is shorter.
    pub fn prefix(&self, len: usize) -> &[Event] {
        &self.events[..len.min(self.events.len())]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Current board.
    pub fn project(&self) -> Board {
        project(&self.events)
    }

    /// Board as it stood after the first `len` events.
    pub fn project_prefix(&self, len: usize) -> Board {
        project(self.prefix(len))
    }
}

impl From<Vec<Event>> for EventLog {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}
