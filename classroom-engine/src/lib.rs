//! Classroom engine: random grouping and constrained seating
//!
//! The computation core behind the grouping and seating features of the
//! deskmate classroom tools. The engine is a plain synchronous library:
//! every operation runs to completion in one call, with no I/O except in
//! the [`storage`] adapter, which the embedding application owns.
//!
//! Two sibling use cases share one conceptual algorithm:
//! - **Group formation** ([`grouping`]): partition a roster into random
//!   groups by target count or target size.
//! - **Constrained seating** ([`seating`]): assign a roster to the fixed
//!   seats of a chart, honoring pairwise apart/together rules via bounded
//!   randomized retry, degrading gracefully when the rules cannot be met.
//!
//! # Example
//!
//! ```
//! use classroom_engine::roster::Roster;
//! use classroom_engine::seating::{assign_seating, create_chart};
//! use shared::models::SeatingChartCreate;
//!
//! let mut roster = Roster::new();
//! roster.add_bulk("Ada\nGrace\nEdsger\nBarbara").unwrap();
//!
//! let chart = create_chart(SeatingChartCreate {
//!     name: "Period 3".into(),
//!     table_count: 2,
//!     seats_per_table: 2,
//! })
//! .unwrap();
//!
//! let assignment = assign_seating(&chart, &roster.people, 100);
//! assert!(assignment.constraints_satisfied);
//! ```

pub mod config;
pub mod grouping;
pub mod roster;
pub mod seating;
pub mod storage;
pub mod utils;

// Re-exports of the engine surface
pub use config::EngineConfig;
pub use grouping::{partition, partition_by_count, partition_by_size, shuffle};
pub use roster::{Roster, remove_person_cascade};
pub use seating::{
    SeatingAssignment, add_constraint, apply_assignment, assign_seating, clear_all_seats,
    clear_seat, create_chart, purge_person, remove_constraint,
};
pub use storage::{FeatureStore, StorageError, StorageResult};
