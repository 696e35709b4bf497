//! Terminal front end
//!
//! This module drives the search controller from a line-oriented terminal
//! session and configures logging for the binary.
//!
//! - [`Command`]: one parsed input line
//! - [`Session`]: applies commands and prints the projected view
//! - [`LoggingConfig`]: tracing subscriber setup

pub mod command;
pub mod logging;
pub mod repl;

pub use command::{Command, HELP};
pub use logging::LoggingConfig;
pub use repl::{Flow, Session};
