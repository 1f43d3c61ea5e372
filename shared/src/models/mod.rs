//! Data models
//!
//! Shared between the engine and the presentation layer.
//! Person, chart and constraint IDs are snowflake-style `i64`
//! (see [`crate::util::snowflake_id`]); table and seat IDs are
//! 1-based sequence numbers local to their chart.

pub mod group;
pub mod person;
pub mod seating_chart;

// Re-exports
pub use group::*;
pub use person::*;
pub use seating_chart::*;
