//! Campus directory reference data
//!
//! This module holds the two static lookup tables the search runs against:
//!
//! - **Facility**: buildings and campus areas, each in one of five categories
//! - **Room**: labelled sub-locations that belong to exactly one facility
//! - **Directory**: the immutable pair of tables with id lookups and validation
//!
//! The tables are built once at startup, either from the built-in campus data
//! or from a JSON data file, and are only ever read afterwards.
//!
//! # Usage Example
//!
//! ```rust
//! use campus_directory_search::directory::*;
//! use campus_directory_search::types::*;
//!
//! let directory = Directory::new(
//!     vec![Facility::new(21, "図書館", FacilityKind::SupportFacility)],
//!     vec![Room::new(1, "閲覧室", 21)],
//! );
//! directory.validate().unwrap();
//!
//! let room = directory.get_room(RoomId::new(1)).unwrap();
//! assert_eq!(directory.get_facility_for_room(room).unwrap().name, "図書館");
//!
//! // The built-in campus tables
//! let campus = Directory::builtin();
//! assert_eq!(campus.facility_count(), 55);
//! ```

pub mod builtin;
pub mod facility;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use facility::Facility;
pub use registry::{Directory, DirectoryData};
pub use room::Room;
