//! Seating Chart Model

use crate::types::{PersonId, Timestamp};
use serde::{Deserialize, Serialize};

/// Seat entity
///
/// `table_id` is a back-reference to the owning table, not ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub table_id: i64,
    pub occupant_id: Option<PersonId>,
}

/// Table entity (a group of seats in a seating chart)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub seats: Vec<Seat>,
}

/// Pairwise seating rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    /// The two people must not share a table
    Apart,
    /// The two people must share a table
    Together,
}

/// Pairwise seating rule between two people
///
/// The pair is unordered: (A, B) is equivalent to (B, A) for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: i64,
    pub kind: ConstraintKind,
    pub person_a: PersonId,
    pub person_b: PersonId,
}

impl Constraint {
    /// Whether this constraint references the given person
    pub fn references(&self, person_id: PersonId) -> bool {
        self.person_a == person_id || self.person_b == person_id
    }
}

/// Seating chart entity: a fixed table/seat topology plus its rules
///
/// Total seats = tables x seats-per-table at creation time; the topology
/// is fixed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingChart {
    pub id: i64,
    pub name: String,
    pub tables: Vec<Table>,
    pub constraints: Vec<Constraint>,
    pub created_at: Timestamp,
}

impl SeatingChart {
    /// Total number of seats across all tables
    pub fn total_seats(&self) -> usize {
        self.tables.iter().map(|t| t.seats.len()).sum()
    }

    /// Iterate all seats in table order
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.tables.iter().flat_map(|t| t.seats.iter())
    }

    /// The table a person is currently seated at, if any
    pub fn table_of(&self, person_id: PersonId) -> Option<i64> {
        self.seats()
            .find(|s| s.occupant_id == Some(person_id))
            .map(|s| s.table_id)
    }
}

/// Create seating chart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingChartCreate {
    pub name: String,
    pub table_count: u32,
    pub seats_per_table: u32,
}

/// Create constraint payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintCreate {
    pub kind: ConstraintKind,
    pub person_a: PersonId,
    pub person_b: PersonId,
}
