//! Room records
//!
//! A room is a labelled sub-location of exactly one facility.

use crate::types::{FacilityId, RoomId};
use serde::{Deserialize, Serialize};

/// Represents a room within a facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// Room label, also the search target
    #[serde(rename = "room")]
    pub label: String,
    /// ID of the facility this room belongs to
    #[serde(rename = "buildId")]
    pub building_id: FacilityId,
}

impl Room {
    /// Create a new room
    pub fn new(id: u32, label: impl Into<String>, building_id: u32) -> Self {
        Self {
            id: RoomId::new(id),
            label: label.into(),
            building_id: FacilityId::new(building_id),
        }
    }

    /// Whether the room label contains the (already normalized) search key
    pub fn matches(&self, key: &str) -> bool {
        self.label.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation() {
        let room = Room::new(5, "2101", 4);

        assert_eq!(room.id, RoomId::new(5));
        assert_eq!(room.label, "2101");
        assert_eq!(room.building_id, FacilityId::new(4));
    }

    #[test]
    fn test_room_matches_label() {
        let room = Room::new(1, "CALL1", 22);

        assert!(room.matches("CALL"));
        assert!(room.matches("L1"));
        assert!(!room.matches("call"));
    }

    #[test]
    fn test_room_uses_table_field_names() {
        let room = Room::new(3, "1201", 1);
        let json = serde_json::to_string(&room).unwrap();
        assert_eq!(json, r#"{"id":3,"room":"1201","buildId":1}"#);

        let parsed: Room = serde_json::from_str(r#"{"id":3,"room":"1201","buildId":1}"#).unwrap();
        assert_eq!(parsed, room);
    }
}
