//! Unified error codes for the deskmate workspace
//!
//! This module defines all error codes used by the engine and the
//! presentation layer on top of it. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Roster errors
//! - 2xxx: Grouping errors
//! - 3xxx: Seating errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Roster ====================
    /// Person not found in the roster
    PersonNotFound = 1001,
    /// Person name is empty or blank
    PersonNameEmpty = 1002,

    // ==================== 2xxx: Grouping ====================
    /// Group count must be at least 1
    GroupCountInvalid = 2001,
    /// Group size must be at least 1
    GroupSizeInvalid = 2002,

    // ==================== 3xxx: Seating ====================
    /// Seating chart not found
    ChartNotFound = 3001,
    /// Chart topology is invalid (zero tables or zero seats per table)
    ChartTopologyInvalid = 3002,
    /// Constraint references the same person twice
    ConstraintSelfReference = 3003,
    /// Constraint not found on the chart
    ConstraintNotFound = 3004,
    /// Seat not found on the chart
    SeatNotFound = 3005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage error
    StorageFailure = 9002,
    /// Serialization error
    SerializationFailure = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::PersonNotFound => "Person not found",
            Self::PersonNameEmpty => "Person name must not be empty",

            Self::GroupCountInvalid => "Group count must be at least 1",
            Self::GroupSizeInvalid => "Group size must be at least 1",

            Self::ChartNotFound => "Seating chart not found",
            Self::ChartTopologyInvalid => "Chart needs at least one table and one seat per table",
            Self::ConstraintSelfReference => "Constraint must reference two different people",
            Self::ConstraintNotFound => "Constraint not found",
            Self::SeatNotFound => "Seat not found",

            Self::InternalError => "Internal error",
            Self::StorageFailure => "Storage error",
            Self::SerializationFailure => "Serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::PersonNotFound,
            1002 => Self::PersonNameEmpty,

            2001 => Self::GroupCountInvalid,
            2002 => Self::GroupSizeInvalid,

            3001 => Self::ChartNotFound,
            3002 => Self::ChartTopologyInvalid,
            3003 => Self::ConstraintSelfReference,
            3004 => Self::ConstraintNotFound,
            3005 => Self::SeatNotFound,

            9001 => Self::InternalError,
            9002 => Self::StorageFailure,
            9003 => Self::SerializationFailure,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
