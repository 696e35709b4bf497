//! Enumeration types for the campus directory
//!
//! This module contains the facility categories, the key identifiers the search
//! box reacts to, and the output formats of the command line front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a facility belongs to
///
/// Categories are stored in the directory tables as their integer code (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FacilityKind {
    /// Numbered lecture buildings
    AcademicBuilding,
    /// Library, halls, offices and other support facilities
    SupportFacility,
    /// Car and bike parking
    Parking,
    /// Laboratories and research centers
    ResearchFacility,
    /// Sports grounds and club houses
    SportsFacility,
}

impl FacilityKind {
    /// All categories in table order
    pub const ALL: [FacilityKind; 5] = [
        FacilityKind::AcademicBuilding,
        FacilityKind::SupportFacility,
        FacilityKind::Parking,
        FacilityKind::ResearchFacility,
        FacilityKind::SportsFacility,
    ];

    /// Integer code used in the directory tables
    pub fn code(&self) -> u8 {
        match self {
            FacilityKind::AcademicBuilding => 1,
            FacilityKind::SupportFacility => 2,
            FacilityKind::Parking => 3,
            FacilityKind::ResearchFacility => 4,
            FacilityKind::SportsFacility => 5,
        }
    }
}

impl TryFrom<u8> for FacilityKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FacilityKind::AcademicBuilding),
            2 => Ok(FacilityKind::SupportFacility),
            3 => Ok(FacilityKind::Parking),
            4 => Ok(FacilityKind::ResearchFacility),
            5 => Ok(FacilityKind::SportsFacility),
            _ => Err(format!("Unknown facility type code: {} (expected 1-5)", code)),
        }
    }
}

impl From<FacilityKind> for u8 {
    fn from(kind: FacilityKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::AcademicBuilding => write!(f, "Academic Building"),
            FacilityKind::SupportFacility => write!(f, "Support Facility"),
            FacilityKind::Parking => write!(f, "Parking"),
            FacilityKind::ResearchFacility => write!(f, "Research Facility"),
            FacilityKind::SportsFacility => write!(f, "Sports Facility"),
        }
    }
}

/// Key identifier carried by a key-press event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Enter / Return key
    Enter,
    /// Any other key, by its identifier
    Other(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        if name == "Enter" {
            Key::Enter
        } else {
            Key::Other(name.to_string())
        }
    }
}

/// Output formats for rendered search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain text for terminals
    Text,
    /// JSON for machine consumers
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
