//! Campus Directory Search
//!
//! Incremental search over a campus facility and room directory, with the
//! Japanese input normalization needed to match whatever form a query is
//! typed in.
//!
//! # Overview
//!
//! A user types into a search field. Each change is normalized (full-width to
//! half-width, hiragana to katakana, a few kanji readings, upper case) and used
//! to filter two static tables: facilities and rooms. Matching entries become
//! buttons; clicking one, or pressing Enter when exactly one match remains,
//! reports a facility/room [`Selection`] to whoever owns it.
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_directory_search::*;
//!
//! let directory = Directory::builtin();
//! let mut controller = SearchController::new(&directory);
//! let mut selection = Selection::INITIAL;
//!
//! controller.on_input("ｐｃ", &mut |s| selection = s);
//! assert_eq!(controller.matched_rooms().len(), 3);
//!
//! let view = SearchView::project(controller.state(), &directory, selection);
//! assert_eq!(view.rooms.buttons[0].label, "PC1(情報教育センター)");
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, and configuration
//! - [`directory`]: facility and room tables
//! - [`search`]: normalizer, controller, and view projection
//! - [`session`]: terminal session and logging setup
//! - [`error`]: error types for loading and sessions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Directory  │    │   Search    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Facilities  │◄───┤ Normalizer  │
//! │ Enums       │    │ Rooms       │    │ Controller  │
//! │ Config      │    │             │    │ View        │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                                              ▲
//!                                              │
//!                                       ┌─────────────┐
//!                                       │   Session   │
//!                                       │ Commands    │
//!                                       │ Logging     │
//!                                       └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod directory;
pub mod error;
pub mod search;
pub mod session;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    FacilityId,
    // Enums
    FacilityKind,
    Key,
    OutputFormat,
    RoomId,
    SearchConfig,
};

// Directory tables
pub use directory::{Directory, DirectoryData, Facility, Room};

// Search
pub use search::{
    normalize, search_key, InputOutcome, KeyPress, SearchController, SearchState, SearchView,
    Selection,
};

// Session
pub use session::{Command, LoggingConfig, Session};

// Errors
pub use error::{DirectoryError, SessionError};
