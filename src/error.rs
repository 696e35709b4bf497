//! Error types and handling
//!
//! The search itself cannot fail: every string is a valid query and every key
//! event is handled. Errors only arise at the edges, when loading the directory
//! tables or when driving a session over I/O.

use crate::types::{FacilityId, RoomId};
use thiserror::Error;

/// Errors raised while loading or validating a directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Data file not found
    #[error("Directory file not found: {0}")]
    FileNotFound(String),

    /// I/O error
    #[error("Failed to read directory file: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Failed to parse directory JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Two facilities share an ID
    #[error("Duplicate facility id {0}")]
    DuplicateFacility(FacilityId),

    /// Two rooms share an ID
    #[error("Duplicate room id {0}")]
    DuplicateRoom(RoomId),

    /// A record uses the reserved "unset" ID
    #[error("Reserved id 0 used by {record}")]
    ReservedId {
        /// Description of the offending record
        record: String,
    },

    /// A room points at a facility that is not in the directory
    #[error("Room {room} ({label}) refers to unknown facility {building}")]
    UnknownFacility {
        /// The dangling room
        room: RoomId,
        /// Its label
        label: String,
        /// The facility it refers to
        building: FacilityId,
    },
}

impl DirectoryError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            DirectoryError::FileNotFound(_) | DirectoryError::IoError(_) => "IO",
            DirectoryError::SerializationError(_) => "Serialization",
            DirectoryError::DuplicateFacility(_)
            | DirectoryError::DuplicateRoom(_)
            | DirectoryError::ReservedId { .. }
            | DirectoryError::UnknownFacility { .. } => "Validation",
        }
    }
}

/// Errors raised by an interactive session
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O error on the session streams
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error while writing JSON output
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A command line could not be understood
    #[error("Invalid command '{line}': {reason}")]
    InvalidCommand {
        /// The line as typed
        line: String,
        /// Why it was rejected
        reason: String,
    },

    /// A command referenced a room that is not in the directory
    #[error("Unknown room id {0}")]
    UnknownRoom(RoomId),
}

impl SessionError {
    /// Create an invalid command error
    pub fn invalid_command(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCommand { line: line.into(), reason: reason.into() }
    }

    /// Check if the session can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::IoError(_) => false,
            SessionError::SerializationError(_) => false,
            SessionError::InvalidCommand { .. } => true,
            SessionError::UnknownRoom(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SessionError::IoError(_) => "IO",
            SessionError::SerializationError(_) => "Serialization",
            SessionError::InvalidCommand { .. } => "Command",
            SessionError::UnknownRoom(_) => "Directory",
        }
    }
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
