//! Identifier types for the campus directory
//!
//! Facilities and rooms are keyed by small integers assigned in the directory
//! tables. The value `0` is reserved to mean "nothing selected", which is how a
//! [`Selection`](crate::search::Selection) encodes an unset field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a facility (building or campus area)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FacilityId(pub u32);

impl FacilityId {
    /// The reserved "no facility" value
    pub const NONE: FacilityId = FacilityId(0);

    /// Create a facility ID from its table value
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Whether this ID refers to an actual facility
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }

    /// Raw integer value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FacilityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    /// The reserved "no room" value
    pub const NONE: RoomId = RoomId(0);

    /// Create a room ID from its table value
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Whether this ID refers to an actual room
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }

    /// Raw integer value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
