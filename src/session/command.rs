//! Session input lines
//!
//! Every line is the new content of the search field, except lines starting
//! with `:` which are commands. A leading `::` types a literal colon.

use crate::error::{SessionError, SessionResult};
use crate::types::{FacilityId, RoomId};

/// Help text listing the session commands
pub const HELP: &str = "\
Type to search. Each line replaces the content of the search field.
Commands:
  :enter            press Enter (selects the only remaining match)
  :compose-enter    press Enter while composing (ignored)
  :facility <id>    click a facility button
  :room <id>        click a room button
  :selection        show the current selection
  :help             show this help
  :quit             leave the session
Start a line with '::' to search for text beginning with ':'.";

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New content of the search field
    Input(String),
    /// Enter key
    Enter,
    /// Enter key during an input method composition
    ComposeEnter,
    /// Click on a facility button
    Facility(FacilityId),
    /// Click on a room button
    Room(RoomId),
    /// Show the current selection
    ShowSelection,
    /// Show help
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one input line (without its line terminator)
    pub fn parse(line: &str) -> SessionResult<Self> {
        if let Some(literal) = line.strip_prefix("::") {
            return Ok(Command::Input(format!(":{}", literal)));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Command::Input(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(SessionError::invalid_command(line, "too many arguments"));
        }

        let parsed = match (name, argument) {
            ("enter", None) => Command::Enter,
            ("compose-enter", None) => Command::ComposeEnter,
            ("facility" | "f", Some(id)) => Command::Facility(FacilityId::new(parse_id(line, id)?)),
            ("room" | "r", Some(id)) => Command::Room(RoomId::new(parse_id(line, id)?)),
            ("selection" | "s", None) => Command::ShowSelection,
            ("help" | "h" | "?", None) => Command::Help,
            ("quit" | "q" | "exit", None) => Command::Quit,
            ("facility" | "f" | "room" | "r", None) => {
                return Err(SessionError::invalid_command(line, "expected an id"));
            }
            ("", _) => return Err(SessionError::invalid_command(line, "missing command name")),
            (_, Some(_)) if is_known(name) => {
                return Err(SessionError::invalid_command(line, "takes no argument"));
            }
            _ => return Err(SessionError::invalid_command(line, "unknown command, try :help")),
        };
        Ok(parsed)
    }
}

fn is_known(name: &str) -> bool {
    matches!(
        name,
        "enter" | "compose-enter" | "selection" | "s" | "help" | "h" | "?" | "quit" | "q" | "exit"
    )
}

fn parse_id(line: &str, id: &str) -> SessionResult<u32> {
    match id.parse::<u32>() {
        Ok(0) => Err(SessionError::invalid_command(line, "id 0 means unset")),
        Ok(value) => Ok(value),
        Err(_) => Err(SessionError::invalid_command(line, format!("'{}' is not an id", id))),
    }
}
