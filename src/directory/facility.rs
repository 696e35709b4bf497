//! Facility records
//!
//! A facility is a named building or campus area. Names are stored in the
//! canonical search form (half-width digits and Latin letters, upper case,
//! katakana), so a normalized query can be matched against them directly.

use crate::types::{FacilityId, FacilityKind};
use serde::{Deserialize, Serialize};

/// A building or campus area in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique identifier of the facility
    pub id: FacilityId,
    /// Display name, also the search target
    pub name: String,
    /// Category of the facility
    #[serde(rename = "type")]
    pub kind: FacilityKind,
}

impl Facility {
    /// Create a new facility
    pub fn new(id: u32, name: impl Into<String>, kind: FacilityKind) -> Self {
        Self { id: FacilityId::new(id), name: name.into(), kind }
    }

    /// Whether the facility name contains the (already normalized) search key
    pub fn matches(&self, key: &str) -> bool {
        self.name.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_creation() {
        let facility = Facility::new(21, "図書館", FacilityKind::SupportFacility);

        assert_eq!(facility.id, FacilityId::new(21));
        assert_eq!(facility.name, "図書館");
        assert_eq!(facility.kind, FacilityKind::SupportFacility);
    }

    #[test]
    fn test_matches_is_plain_containment() {
        let facility = Facility::new(33, "AITプラザ", FacilityKind::SupportFacility);

        assert!(facility.matches("AIT"));
        assert!(facility.matches("プラザ"));
        assert!(facility.matches(""));
        // The stored name is not normalized on the fly
        assert!(!facility.matches("ait"));
        assert!(!facility.matches("ぷらざ"));
    }

    #[test]
    fn test_facility_uses_table_field_names() {
        let facility = Facility::new(46, "第一駐車場", FacilityKind::Parking);
        let json = serde_json::to_string(&facility).unwrap();
        assert_eq!(json, r#"{"id":46,"name":"第一駐車場","type":3}"#);

        let parsed: Facility = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, facility);
    }
}
