//! Built-in campus tables
//!
//! Facility and room names are kept in the canonical search form: half-width
//! digits and Latin capitals, katakana rather than hiragana.

use super::{Facility, Room};
use crate::types::FacilityKind::{
    AcademicBuilding, Parking, ResearchFacility, SportsFacility, SupportFacility,
};
use crate::types::FacilityKind;

const FACILITIES: &[(u32, &str, FacilityKind)] = &[
    (1, "1号館", AcademicBuilding),
    (2, "1号館別館", AcademicBuilding),
    (4, "2号館", AcademicBuilding),
    (5, "3号館", AcademicBuilding),
    (6, "3号館別館", AcademicBuilding),
    (8, "4号館", AcademicBuilding),
    (9, "4号館別館", AcademicBuilding),
    (10, "5号館講義実験棟", AcademicBuilding),
    (11, "6号館", AcademicBuilding),
    (12, "7号館", AcademicBuilding),
    (13, "8号館", AcademicBuilding),
    (14, "9号館", AcademicBuilding),
    (15, "10号館", AcademicBuilding),
    (16, "10号館・旧1号館", AcademicBuilding),
    (17, "11号館", AcademicBuilding),
    (18, "12号館", AcademicBuilding),
    (19, "13号館", AcademicBuilding),
    (20, "14号館", AcademicBuilding),
    (55, "正門", SupportFacility),
    (49, "バス停", SupportFacility),
    (50, "守衛室", SupportFacility),
    (32, "愛和会館", SupportFacility),
    (33, "AITプラザ", SupportFacility),
    (34, "セントラルテラス", SupportFacility),
    (35, "鉀徳館", SupportFacility),
    (37, "小体育館", SupportFacility),
    (21, "図書館", SupportFacility),
    (22, "計算センター", SupportFacility),
    (23, "情報教育センター", SupportFacility),
    (29, "本部棟", SupportFacility),
    (30, "第1本部棟", SupportFacility),
    (31, "第2本部棟", SupportFacility),
    (46, "第一駐車場", Parking),
    (47, "第二駐車場", Parking),
    (48, "第三駐車場", Parking),
    (43, "バイク駐車場", Parking),
    (3, "土木・建築実験棟", ResearchFacility),
    (7, "バイオ環境化学実験棟", ResearchFacility),
    (24, "総合技術研究所", ResearchFacility),
    (25, "耐震実験センター", ResearchFacility),
    (26, "振動実験棟", ResearchFacility),
    (27, "地域防災研究センター", ResearchFacility),
    (28, "エコ電力研究センター", ResearchFacility),
    (38, "第3クラブハウス", SportsFacility),
    (39, "第4クラブハウス", SportsFacility),
    (40, "第5クラブハウス", SportsFacility),
    (36, "総合運動場管理棟", SportsFacility),
    (41, "庭球場管理ハウス", SportsFacility),
    (42, "セントラル広場", SportsFacility),
    (44, "テニスコート", SportsFacility),
    (51, "アーチェリー場", SportsFacility),
    (45, "サッカー場", SportsFacility),
    (52, "陸上競技場", SportsFacility),
    (53, "球技場", SportsFacility),
    (54, "野球場", SportsFacility),
];

// (room id, label, facility id)
const ROOMS: &[(u32, &str, u32)] = &[
    (1, "1101", 1),
    (2, "1102", 1),
    (3, "1103", 1),
    (4, "1201", 1),
    (5, "1202", 1),
    (6, "1301", 1),
    (7, "1B01", 2),
    (8, "1B02", 2),
    (9, "2101", 4),
    (10, "2102", 4),
    (11, "2201", 4),
    (12, "2202", 4),
    (13, "3101", 5),
    (14, "3102", 5),
    (15, "3201", 5),
    (16, "3B01", 6),
    (17, "4101", 8),
    (18, "4102", 8),
    (19, "4201", 8),
    (20, "4B01", 9),
    (21, "5101", 10),
    (22, "5102", 10),
    (23, "5201", 10),
    (24, "6101", 11),
    (25, "6201", 11),
    (26, "7101", 12),
    (27, "7201", 12),
    (28, "8101", 13),
    (29, "8201", 13),
    (30, "9101", 14),
    (31, "9201", 14),
    (32, "10201", 15),
    (33, "10202", 15),
    (34, "10301", 15),
    (35, "10401", 16),
    (36, "11201", 17),
    (37, "11301", 17),
    (38, "12201", 18),
    (39, "12301", 18),
    (40, "13101", 19),
    (41, "13201", 19),
    (42, "14101", 20),
    (43, "14201", 20),
    (44, "閲覧室", 21),
    (45, "自習室", 21),
    (46, "CALL1", 22),
    (47, "CALL2", 22),
    (48, "PC1", 23),
    (49, "PC2", 23),
    (50, "PC3", 23),
    (51, "大会議室", 32),
    (52, "小会議室", 32),
    (53, "学生相談室", 33),
    (54, "保健室", 33),
    (55, "教務課", 29),
    (56, "学生課", 29),
    (57, "体育室", 37),
    (58, "武道場", 37),
];

/// Facilities of the built-in campus, in table order
pub fn facilities() -> Vec<Facility> {
    FACILITIES.iter().map(|&(id, name, kind)| Facility::new(id, name, kind)).collect()
}

/// Rooms of the built-in campus, in table order
pub fn rooms() -> Vec<Room> {
    ROOMS.iter().map(|&(id, label, building)| Room::new(id, label, building)).collect()
}
