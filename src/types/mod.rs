//! Core types and identifiers for the campus directory search
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: integer identifiers for facilities and rooms (`0` = unset)
//! - **Enums**: facility categories, key identifiers, output formats
//! - **Configuration**: search configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use campus_directory_search::types::*;
//!
//! let facility = FacilityId::new(21);
//! assert!(facility.is_set());
//! assert!(!RoomId::NONE.is_set());
//!
//! let kind = FacilityKind::try_from(3).unwrap();
//! assert_eq!(kind, FacilityKind::Parking);
//!
//! let config = SearchConfig { max_display: 10, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
