//! Shared types for the deskmate classroom tools
//!
//! Common types used across the workspace: data models, the unified
//! error system, and utility types.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
