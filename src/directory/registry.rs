//! Directory registry and lookup
//!
//! This module contains the [`Directory`], the immutable pair of reference
//! tables the search runs against, together with id indices for lookups and
//! load-time validation.

use crate::directory::{builtin, Facility, Room};
use crate::error::{DirectoryError, DirectoryResult};
use crate::types::{FacilityId, FacilityKind, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// On-disk layout of a directory data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryData {
    /// Facility table, in display order
    pub facilities: Vec<Facility>,
    /// Room table, in display order
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// The facility and room tables with lookup capabilities
#[derive(Debug, Clone)]
pub struct Directory {
    data: DirectoryData,
    /// Quick lookup map from facility ID to table index
    facility_index: HashMap<FacilityId, usize>,
    /// Quick lookup map from room ID to table index
    room_index: HashMap<RoomId, usize>,
}

impl Directory {
    /// Create a directory from its two tables
    ///
    /// Table order is kept as given. When ids repeat, lookups resolve to the
    /// first record; [`Directory::validate`] reports the duplicate.
    pub fn new(facilities: Vec<Facility>, rooms: Vec<Room>) -> Self {
        Self::from_data(DirectoryData { facilities, rooms })
    }

    /// Create a directory from a parsed data file
    pub fn from_data(data: DirectoryData) -> Self {
        let mut facility_index = HashMap::with_capacity(data.facilities.len());
        for (idx, facility) in data.facilities.iter().enumerate() {
            facility_index.entry(facility.id).or_insert(idx);
        }

        let mut room_index = HashMap::with_capacity(data.rooms.len());
        for (idx, room) in data.rooms.iter().enumerate() {
            room_index.entry(room.id).or_insert(idx);
        }

        Self { data, facility_index, room_index }
    }

    /// The built-in campus directory
    pub fn builtin() -> Self {
        Self::new(builtin::facilities(), builtin::rooms())
    }

    /// Load and validate a directory from a JSON data file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DirectoryError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let data: DirectoryData = serde_json::from_str(&content)?;
        let directory = Self::from_data(data);
        directory.validate()?;

        info!(
            path = %path.display(),
            facilities = directory.facility_count(),
            rooms = directory.room_count(),
            "Loaded directory from file"
        );
        Ok(directory)
    }

    /// Validate ids and cross references
    pub fn validate(&self) -> DirectoryResult<()> {
        let mut seen_facilities = HashSet::new();
        for facility in &self.data.facilities {
            if !facility.id.is_set() {
                return Err(DirectoryError::ReservedId {
                    record: format!("facility '{}'", facility.name),
                });
            }
            if !seen_facilities.insert(facility.id) {
                return Err(DirectoryError::DuplicateFacility(facility.id));
            }
        }

        let mut seen_rooms = HashSet::new();
        for room in &self.data.rooms {
            if !room.id.is_set() {
                return Err(DirectoryError::ReservedId { record: format!("room '{}'", room.label) });
            }
            if !seen_rooms.insert(room.id) {
                return Err(DirectoryError::DuplicateRoom(room.id));
            }
            if !self.facility_index.contains_key(&room.building_id) {
                return Err(DirectoryError::UnknownFacility {
                    room: room.id,
                    label: room.label.clone(),
                    building: room.building_id,
                });
            }
        }

        debug!(
            facilities = self.facility_count(),
            rooms = self.room_count(),
            "Directory validated"
        );
        Ok(())
    }

    /// Get a facility by ID
    pub fn get_facility(&self, facility_id: FacilityId) -> Option<&Facility> {
        self.facility_index.get(&facility_id).and_then(|&idx| self.data.facilities.get(idx))
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.room_index.get(&room_id).and_then(|&idx| self.data.rooms.get(idx))
    }

    /// Get the facility that contains a specific room
    pub fn get_facility_for_room(&self, room: &Room) -> Option<&Facility> {
        self.get_facility(room.building_id)
    }

    /// All facilities in table order
    pub fn facilities(&self) -> &[Facility] {
        &self.data.facilities
    }

    /// All rooms in table order
    pub fn rooms(&self) -> &[Room] {
        &self.data.rooms
    }

    /// Facilities grouped by category, one group per [`FacilityKind`] in code order
    pub fn grouped_by_kind(&self) -> Vec<(FacilityKind, Vec<&Facility>)> {
        FacilityKind::ALL
            .iter()
            .map(|&kind| {
                let group = self.data.facilities.iter().filter(|f| f.kind == kind).collect();
                (kind, group)
            })
            .collect()
    }

    /// Number of facilities
    pub fn facility_count(&self) -> usize {
        self.data.facilities.len()
    }

    /// Number of rooms
    pub fn room_count(&self) -> usize {
        self.data.rooms.len()
    }

    /// Serialize the tables as pretty JSON
    pub fn to_json(&self) -> DirectoryResult<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn small_directory() -> Directory {
        Directory::new(
            vec![
                Facility::new(1, "1号館", FacilityKind::AcademicBuilding),
                Facility::new(21, "図書館", FacilityKind::SupportFacility),
                Facility::new(46, "第一駐車場", FacilityKind::Parking),
            ],
            vec![Room::new(1, "1101", 1), Room::new(2, "1102", 1), Room::new(3, "閲覧室", 21)],
        )
    }

    #[test]
    fn test_builtin_directory_is_valid() {
        let directory = Directory::builtin();
        directory.validate().unwrap();
        assert_eq!(directory.facility_count(), 55);
        assert!(directory.room_count() > 0);
    }

    #[test]
    fn test_lookups() {
        let directory = small_directory();

        assert_eq!(directory.get_facility(FacilityId::new(21)).unwrap().name, "図書館");
        assert!(directory.get_facility(FacilityId::new(99)).is_none());
        assert!(directory.get_facility(FacilityId::NONE).is_none());

        let room = directory.get_room(RoomId::new(3)).unwrap();
        assert_eq!(room.label, "閲覧室");
        assert_eq!(directory.get_facility_for_room(room).unwrap().id, FacilityId::new(21));
    }

    #[test]
    fn test_grouped_by_kind_covers_every_category() {
        let directory = small_directory();
        let groups = directory.grouped_by_kind();

        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].0, FacilityKind::AcademicBuilding);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[2].1[0].name, "第一駐車場");
        assert!(groups[3].1.is_empty());
        assert!(groups[4].1.is_empty());
    }

    #[test]
    fn test_builtin_groups_keep_table_order() {
        let directory = Directory::builtin();
        let groups = directory.grouped_by_kind();
        let parking: Vec<_> = groups[2].1.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(parking, vec!["第一駐車場", "第二駐車場", "第三駐車場", "バイク駐車場"]);

        let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
        assert_eq!(total, directory.facility_count());
    }

    #[test]
    fn test_validation_rejects_duplicate_facility() {
        let directory = Directory::new(
            vec![
                Facility::new(1, "1号館", FacilityKind::AcademicBuilding),
                Facility::new(1, "2号館", FacilityKind::AcademicBuilding),
            ],
            vec![],
        );
        assert!(matches!(
            directory.validate(),
            Err(DirectoryError::DuplicateFacility(id)) if id == FacilityId::new(1)
        ));
        // Lookups resolve to the first record
        assert_eq!(directory.get_facility(FacilityId::new(1)).unwrap().name, "1号館");
    }

    #[test]
    fn test_validation_rejects_duplicate_room() {
        let directory = Directory::new(
            vec![Facility::new(1, "1号館", FacilityKind::AcademicBuilding)],
            vec![Room::new(7, "1101", 1), Room::new(7, "1102", 1)],
        );
        assert!(matches!(directory.validate(), Err(DirectoryError::DuplicateRoom(_))));
    }

    #[test]
    fn test_validation_rejects_reserved_ids() {
        let directory =
            Directory::new(vec![Facility::new(0, "正門", FacilityKind::SupportFacility)], vec![]);
        assert!(matches!(directory.validate(), Err(DirectoryError::ReservedId { .. })));

        let directory = Directory::new(
            vec![Facility::new(55, "正門", FacilityKind::SupportFacility)],
            vec![Room::new(0, "守衛所", 55)],
        );
        assert!(matches!(directory.validate(), Err(DirectoryError::ReservedId { .. })));
    }

    #[test]
    fn test_validation_rejects_dangling_building_id() {
        let directory = Directory::new(
            vec![Facility::new(1, "1号館", FacilityKind::AcademicBuilding)],
            vec![Room::new(1, "9901", 99)],
        );
        assert!(matches!(
            directory.validate(),
            Err(DirectoryError::UnknownFacility { building, .. }) if building == FacilityId::new(99)
        ));
    }

    #[test]
    fn test_from_file_round_trips_json_tables() {
        let original = small_directory();
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", original.to_json().unwrap()).unwrap();

        let loaded = Directory::from_file(file.path()).unwrap();
        assert_eq!(loaded.facilities(), original.facilities());
        assert_eq!(loaded.rooms(), original.rooms());
    }

    #[test]
    fn test_from_file_accepts_missing_room_table() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "facilities": [{{ "id": 21, "name": "図書館", "type": 2 }}] }}"#)
            .unwrap();

        let loaded = Directory::from_file(file.path()).unwrap();
        assert_eq!(loaded.facility_count(), 1);
        assert_eq!(loaded.room_count(), 0);
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            Directory::from_file("/no/such/campus.json"),
            Err(DirectoryError::FileNotFound(_))
        ));

        let mut bad_type = Builder::new().suffix(".json").tempfile().unwrap();
        write!(bad_type, r#"{{ "facilities": [{{ "id": 1, "name": "X", "type": 9 }}] }}"#).unwrap();
        assert!(matches!(
            Directory::from_file(bad_type.path()),
            Err(DirectoryError::SerializationError(_))
        ));

        let mut dangling = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            dangling,
            r#"{{ "facilities": [], "rooms": [{{ "id": 1, "room": "1101", "buildId": 1 }}] }}"#
        )
        .unwrap();
        assert!(matches!(
            Directory::from_file(dangling.path()),
            Err(DirectoryError::UnknownFacility { .. })
        ));
    }
}
