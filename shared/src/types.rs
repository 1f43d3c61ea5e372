//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Person identifier (snowflake-style, see [`crate::util::snowflake_id`])
pub type PersonId = i64;

/// Seating chart identifier
pub type ChartId = i64;
