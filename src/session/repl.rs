//! Line-driven search session
//!
//! Feeds [`Command`]s into a [`SearchController`], keeps the selection the
//! controller reports, and prints the projected view after every event.

use crate::directory::Directory;
use crate::error::{SessionError, SessionResult};
use crate::search::{KeyPress, SearchController, SearchView, Selection};
use crate::session::command::{Command, HELP};
use crate::types::{Key, OutputFormat, DEFAULT_MAX_DISPLAY};
use serde::Serialize;
use serde_json::json;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the session goes on after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading
    Continue,
    /// Stop reading
    Quit,
}

/// An interactive search session over one directory
#[derive(Debug)]
pub struct Session<'a> {
    controller: SearchController<'a>,
    selection: Selection,
    output_format: OutputFormat,
    max_display: usize,
}

impl<'a> Session<'a> {
    /// Create a session with text output and the default display limit
    pub fn new(directory: &'a Directory) -> Self {
        Self {
            controller: SearchController::new(directory),
            selection: Selection::INITIAL,
            output_format: OutputFormat::Text,
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }

    /// Set the output format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Set the number of buttons shown per category
    pub fn with_max_display(mut self, max_display: usize) -> Self {
        self.max_display = max_display;
        self
    }

    /// The current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The controller driving this session
    pub fn controller(&self) -> &SearchController<'a> {
        &self.controller
    }

    /// Project the current state into a view
    pub fn view(&self) -> SearchView {
        SearchView::project_with_limit(
            self.controller.state(),
            self.controller.directory(),
            self.selection,
            self.max_display,
        )
    }

    /// Apply one command to the controller
    pub fn handle(&mut self, command: &Command) -> SessionResult<Flow> {
        let selection = &mut self.selection;
        let mut on_selection_change = |s: Selection| *selection = s;

        match command {
            Command::Input(text) => {
                let outcome = self.controller.on_input(text, &mut on_selection_change);
                debug!(?outcome, "Input applied");
            }
            Command::Enter => {
                let key = KeyPress::new(Key::Enter);
                self.controller.on_key_down(&key, &mut on_selection_change);
            }
            Command::ComposeEnter => {
                let key = KeyPress::composing(Key::Enter);
                self.controller.on_key_down(&key, &mut on_selection_change);
            }
            Command::Facility(id) => {
                self.controller.on_facility_button_click(*id, &mut on_selection_change);
            }
            Command::Room(id) => {
                let room = self
                    .controller
                    .directory()
                    .get_room(*id)
                    .ok_or(SessionError::UnknownRoom(*id))?;
                self.controller.on_room_button_click(
                    room.id,
                    room.building_id,
                    &mut on_selection_change,
                );
            }
            Command::ShowSelection | Command::Help => {}
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Describe the selection with facility and room names
    pub fn describe_selection(&self) -> String {
        let directory = self.controller.directory();
        if self.selection.is_initial() {
            return "選択: なし".to_string();
        }

        let facility = directory
            .get_facility(self.selection.facility)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("#{}", self.selection.facility));
        match directory.get_room(self.selection.room) {
            Some(room) => format!("選択: {} {} {}", facility, room.label, self.selection),
            None => format!("選択: {} {}", facility, self.selection),
        }
    }

    /// Write the current view (and selection) in the configured format
    pub fn render<W: Write>(&self, output: &mut W) -> SessionResult<()> {
        let view = self.view();
        match self.output_format {
            OutputFormat::Json => write_json_line(output, &view)?,
            OutputFormat::Text => {
                write!(output, "{}", view)?;
                writeln!(output, "{}", self.describe_selection())?;
            }
        }
        Ok(())
    }

    /// Write the help text, as a `{"help": ...}` object in JSON mode
    pub fn render_help<W: Write>(&self, output: &mut W) -> SessionResult<()> {
        match self.output_format {
            OutputFormat::Json => write_json_line(output, &json!({ "help": HELP })),
            OutputFormat::Text => Ok(writeln!(output, "{}", HELP)?),
        }
    }

    /// Write the selection, with the description alongside it in JSON mode
    pub fn render_selection<W: Write>(&self, output: &mut W) -> SessionResult<()> {
        let description = self.describe_selection();
        match self.output_format {
            OutputFormat::Json => write_json_line(
                output,
                &json!({ "selection": self.selection, "description": description }),
            ),
            OutputFormat::Text => Ok(writeln!(output, "{}", description)?),
        }
    }

    /// Report a rejected line, as an `{"error": ...}` object in JSON mode
    pub fn render_error<W: Write>(&self, output: &mut W, error: &SessionError) -> SessionResult<()> {
        match self.output_format {
            OutputFormat::Json => write_json_line(
                output,
                &json!({ "error": error.to_string(), "category": error.category() }),
            ),
            OutputFormat::Text => Ok(writeln!(output, "error: {}", error)?),
        }
    }

    /// Read lines from `input` until end of input or `:quit`
    ///
    /// Malformed commands are reported on `output` and skipped; I/O failures end
    /// the session with an error. In JSON mode every line written is one JSON
    /// object.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> SessionResult<()> {
        info!("Session started");

        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');

            let step = match Command::parse(line).and_then(|c| self.handle(&c).map(|f| (c, f))) {
                Ok(pair) => pair,
                Err(error) if error.is_recoverable() => {
                    warn!(%error, category = error.category(), "Rejected session line");
                    self.render_error(&mut output, &error)?;
                    output.flush()?;
                    continue;
                }
                Err(error) => return Err(error),
            };

            match step {
                (_, Flow::Quit) => break,
                (Command::Help, _) => self.render_help(&mut output)?,
                (Command::ShowSelection, _) => self.render_selection(&mut output)?,
                _ => self.render(&mut output)?,
            }
            output.flush()?;
        }

        info!(selection = %self.selection, "Session ended");
        Ok(())
    }
}

fn write_json_line<W: Write, T: Serialize + ?Sized>(output: &mut W, value: &T) -> SessionResult<()> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)?;
    Ok(())
}
