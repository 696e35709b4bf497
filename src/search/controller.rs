//! Filter and selection controller
//!
//! The controller owns the text of the search field and the two most recent
//! result lists. The current [`Selection`] is owned by the caller; the
//! controller only ever proposes a replacement through the
//! `on_selection_change` callback passed to each event handler.

use crate::directory::{Directory, Facility, Room};
use crate::search::normalize::search_key;
use crate::types::{FacilityId, Key, RoomId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// The facility/room pair chosen by the user
///
/// An id of `0` means the field is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Selected facility
    pub facility: FacilityId,
    /// Selected room
    pub room: RoomId,
}

impl Selection {
    /// Nothing selected
    pub const INITIAL: Selection = Selection { facility: FacilityId::NONE, room: RoomId::NONE };

    /// A facility on its own
    pub fn facility(facility: FacilityId) -> Self {
        Self { facility, room: RoomId::NONE }
    }

    /// A room together with the facility it belongs to
    pub fn room(room: RoomId, building: FacilityId) -> Self {
        Self { facility: building, room }
    }

    /// Whether nothing is selected
    pub fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{facility: {}, room: {}}}", self.facility, self.room)
    }
}

/// A key press delivered to the search field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Which key was pressed
    pub key: Key,
    /// Whether an input method composition is in progress
    pub is_composing: bool,
}

impl KeyPress {
    /// A plain key press outside of any composition
    pub fn new(key: Key) -> Self {
        Self { key, is_composing: false }
    }

    /// A key press while the input method is composing
    pub fn composing(key: Key) -> Self {
        Self { key, is_composing: true }
    }
}

/// What a text change did to the result lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The normalized query was empty; both lists were cleared
    Cleared,
    /// Nothing matched; the previous lists were kept
    KeptPrevious,
    /// The lists were replaced and the selection reset
    Updated {
        /// Number of matching facilities
        facilities: usize,
        /// Number of matching rooms
        rooms: usize,
    },
}

/// Query text and the result lists derived from it
///
/// The lists always borrow from the directory tables and keep table order.
#[derive(Debug, Clone, Default)]
pub struct SearchState<'a> {
    query: String,
    matched_facilities: Vec<&'a Facility>,
    matched_rooms: Vec<&'a Room>,
}

impl<'a> SearchState<'a> {
    /// Compute the state that follows a change of the search field
    ///
    /// Does not touch `self`; the caller decides whether to adopt the result.
    pub fn after_input(&self, directory: &'a Directory, raw: &str) -> (SearchState<'a>, InputOutcome) {
        let key = search_key(raw);

        if key.is_empty() {
            let state = SearchState { query: raw.to_string(), ..Default::default() };
            return (state, InputOutcome::Cleared);
        }

        let facilities: Vec<&'a Facility> =
            directory.facilities().iter().filter(|f| f.matches(&key)).collect();
        let rooms: Vec<&'a Room> = directory.rooms().iter().filter(|r| r.matches(&key)).collect();

        debug!(
            key = %key,
            facilities = facilities.len(),
            rooms = rooms.len(),
            "Filtered directory"
        );

        if facilities.is_empty() && rooms.is_empty() {
            let state = SearchState { query: raw.to_string(), ..self.clone() };
            return (state, InputOutcome::KeptPrevious);
        }

        let outcome = InputOutcome::Updated { facilities: facilities.len(), rooms: rooms.len() };
        let state =
            SearchState { query: raw.to_string(), matched_facilities: facilities, matched_rooms: rooms };
        (state, outcome)
    }

    /// Raw text of the search field, as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching facilities in table order
    pub fn matched_facilities(&self) -> &[&'a Facility] {
        &self.matched_facilities
    }

    /// Matching rooms in table order
    pub fn matched_rooms(&self) -> &[&'a Room] {
        &self.matched_rooms
    }

    /// Combined number of matches
    pub fn match_count(&self) -> usize {
        self.matched_facilities.len() + self.matched_rooms.len()
    }

    /// The selection Enter would produce, if exactly one match remains
    ///
    /// A room match supplies both ids; a facility match supplies only its own.
    pub fn unique_selection(&self) -> Option<Selection> {
        if self.match_count() != 1 {
            return None;
        }

        let room = self.matched_rooms.first();
        let facility = room
            .map(|r| r.building_id)
            .or_else(|| self.matched_facilities.first().map(|f| f.id))
            .unwrap_or(FacilityId::NONE);

        Some(Selection { facility, room: room.map(|r| r.id).unwrap_or(RoomId::NONE) })
    }
}

/// Drives a search field over a directory
#[derive(Debug, Clone)]
pub struct SearchController<'a> {
    directory: &'a Directory,
    state: SearchState<'a>,
}

impl<'a> SearchController<'a> {
    /// Create a controller with an empty search field
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory, state: SearchState::default() }
    }

    /// The directory this controller searches
    pub fn directory(&self) -> &'a Directory {
        self.directory
    }

    /// Current state snapshot
    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }

    /// Raw text of the search field
    pub fn query(&self) -> &str {
        self.state.query()
    }

    /// Matching facilities in table order
    pub fn matched_facilities(&self) -> &[&'a Facility] {
        self.state.matched_facilities()
    }

    /// Matching rooms in table order
    pub fn matched_rooms(&self) -> &[&'a Room] {
        self.state.matched_rooms()
    }

    /// Handle a change of the search field
    ///
    /// `raw` is the full new content of the field. When the lists are replaced
    /// the selection is reset to [`Selection::INITIAL`] first.
    #[instrument(level = "debug", skip(self, on_selection_change))]
    pub fn on_input<F>(&mut self, raw: &str, on_selection_change: &mut F) -> InputOutcome
    where
        F: FnMut(Selection),
    {
        let (next, outcome) = self.state.after_input(self.directory, raw);

        match outcome {
            InputOutcome::Updated { .. } => on_selection_change(Selection::INITIAL),
            InputOutcome::KeptPrevious => debug!("No matches, keeping previous results"),
            InputOutcome::Cleared => {}
        }

        self.state = next;
        outcome
    }

    /// Handle a key press on the search field
    ///
    /// Only Enter outside of an input method composition does anything.
    pub fn on_key_down<F>(&self, key: &KeyPress, on_selection_change: &mut F) -> Option<Selection>
    where
        F: FnMut(Selection),
    {
        if key.is_composing || key.key != Key::Enter {
            return None;
        }
        self.on_enter_key(on_selection_change)
    }

    /// Handle Enter: select the only remaining match, if there is exactly one
    pub fn on_enter_key<F>(&self, on_selection_change: &mut F) -> Option<Selection>
    where
        F: FnMut(Selection),
    {
        let selection = self.state.unique_selection()?;
        debug!(%selection, "Selected unique match");
        on_selection_change(selection);
        Some(selection)
    }

    /// Handle a click on a facility button
    pub fn on_facility_button_click<F>(
        &self,
        facility: FacilityId,
        on_selection_change: &mut F,
    ) -> Selection
    where
        F: FnMut(Selection),
    {
        let selection = Selection::facility(facility);
        on_selection_change(selection);
        selection
    }

    /// Handle a click on a room button
    pub fn on_room_button_click<F>(
        &self,
        room: RoomId,
        building: FacilityId,
        on_selection_change: &mut F,
    ) -> Selection
    where
        F: FnMut(Selection),
    {
        let selection = Selection::room(room, building);
        on_selection_change(selection);
        selection
    }
}
