//! Person Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Person entity (a roster member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub created_at: Timestamp,
}

