//! Projection of search state into renderable buttons
//!
//! The view is rebuilt from scratch on every change and holds no state of its
//! own. Each category shows at most `max_display` buttons; the remainder is
//! reported as a count.

use crate::directory::Directory;
use crate::search::{SearchState, Selection};
use crate::types::{FacilityId, RoomId, DEFAULT_MAX_DISPLAY};
use serde::Serialize;
use std::fmt;

/// A selectable room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomButton {
    /// Room the button selects
    pub room: RoomId,
    /// Facility the room belongs to
    pub building: FacilityId,
    /// `"<room>(<facility name>)"`
    pub label: String,
    /// Whether this room is the current selection
    pub active: bool,
}

/// A selectable facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityButton {
    /// Facility the button selects
    pub facility: FacilityId,
    /// Facility name
    pub label: String,
    /// Whether this facility is the current selection
    pub active: bool,
}

/// The visible part of one result category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonGroup<T> {
    /// Buttons to render, in table order
    pub buttons: Vec<T>,
    /// Matches that did not fit
    pub remaining: usize,
}

impl<T> ButtonGroup<T> {
    fn truncate(mut buttons: Vec<T>, max_display: usize) -> Self {
        let remaining = buttons.len().saturating_sub(max_display);
        buttons.truncate(max_display);
        Self { buttons, remaining }
    }

    /// Whether nothing is shown in this category
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The "and N more" text, if anything was cut off
    pub fn remainder_text(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("他{}件...", self.remaining))
    }
}

/// Everything a renderer needs to draw the search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchView {
    /// Raw text of the search field
    pub query: String,
    /// Room buttons, shown first
    pub rooms: ButtonGroup<RoomButton>,
    /// Facility buttons
    pub facilities: ButtonGroup<FacilityButton>,
    /// Selection the buttons were marked against
    pub selection: Selection,
}

impl SearchView {
    /// Project a search state with the default display limit
    pub fn project(state: &SearchState<'_>, directory: &Directory, selection: Selection) -> Self {
        Self::project_with_limit(state, directory, selection, DEFAULT_MAX_DISPLAY)
    }

    /// Project a search state showing at most `max_display` buttons per category
    pub fn project_with_limit(
        state: &SearchState<'_>,
        directory: &Directory,
        selection: Selection,
        max_display: usize,
    ) -> Self {
        let rooms = state
            .matched_rooms()
            .iter()
            .map(|room| {
                let facility_name = directory
                    .get_facility_for_room(room)
                    .map(|f| f.name.as_str())
                    .unwrap_or_default();
                RoomButton {
                    room: room.id,
                    building: room.building_id,
                    label: format!("{}({})", room.label, facility_name),
                    active: selection.room == room.id,
                }
            })
            .collect();

        let facilities = state
            .matched_facilities()
            .iter()
            .map(|facility| FacilityButton {
                facility: facility.id,
                label: facility.name.clone(),
                active: selection.facility == facility.id,
            })
            .collect();

        Self {
            query: state.query().to_string(),
            rooms: ButtonGroup::truncate(rooms, max_display),
            facilities: ButtonGroup::truncate(facilities, max_display),
            selection,
        }
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "検索: {}", self.query)?;

        if !self.rooms.is_empty() {
            writeln!(f, "教室:")?;
            for button in &self.rooms.buttons {
                writeln!(f, "  {} #{} {}", marker(button.active), button.room, button.label)?;
            }
            if let Some(text) = self.rooms.remainder_text() {
                writeln!(f, "  {}", text)?;
            }
        }

        if !self.facilities.is_empty() {
            writeln!(f, "施設:")?;
            for button in &self.facilities.buttons {
                writeln!(f, "  {} #{} {}", marker(button.active), button.facility, button.label)?;
            }
            if let Some(text) = self.facilities.remainder_text() {
                writeln!(f, "  {}", text)?;
            }
        }

        Ok(())
    }
}

fn marker(active: bool) -> &'static str {
    if active {
        "[*]"
    } else {
        "[ ]"
    }
}
