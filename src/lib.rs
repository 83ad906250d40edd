//! Terminal tic-tac-toe built around an event log.
//!
//! Every input line is parsed into a [`Command`], turned into [`Event`]s by
//! [`process`] and appended to an [`EventLog`]. The board is never stored:
//! it is [`project`]ed from the log and everything else about the game is
//! [`derive`]d from the board.

mod board;
mod cli;
mod command;
mod common;
mod config;
mod event;
mod event_log;
mod logging;
mod processor;
mod session;
mod state;
mod strategy;
pub mod prelude;
pub mod ui;

pub use board::*;
pub use cli::run_cli;
pub use command::*;
pub use common::*;
pub use config::*;
pub use event::*;
pub use event_log::*;
pub use logging::init_logging;
pub use processor::*;
pub use session::*;
pub use state::*;
pub use strategy::*;
