//! Incremental search over the campus directory
//!
//! - [`normalize`]: canonical form for queries
//! - [`SearchController`]: reacts to text changes, Enter, and button clicks
//! - [`SearchView`]: stateless projection into renderable buttons
//!
//! # Usage Example
//!
//! ```rust
//! use campus_directory_search::directory::Directory;
//! use campus_directory_search::search::*;
//! use campus_directory_search::types::{FacilityId, Key};
//!
//! let directory = Directory::builtin();
//! let mut selection = Selection::INITIAL;
//! let mut controller = SearchController::new(&directory);
//!
//! controller.on_input("図書", &mut |s| selection = s);
//! controller.on_key_down(&KeyPress::new(Key::Enter), &mut |s| selection = s);
//! assert_eq!(selection, Selection::facility(FacilityId::new(21)));
//!
//! let view = SearchView::project(controller.state(), &directory, selection);
//! assert!(view.facilities.buttons[0].active);
//! ```

pub mod controller;
pub mod normalize;
pub mod view;

pub use controller::{InputOutcome, KeyPress, SearchController, SearchState, Selection};
pub use normalize::{normalize, search_key};
pub use view::{ButtonGroup, FacilityButton, RoomButton, SearchView};
