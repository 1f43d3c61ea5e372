//! Randomized constrained seat assignment
//!
//! Bounded randomized retry (Las Vegas search, no backtracking): shuffle
//! the roster, place people onto the flattened seat list, validate every
//! rule, and keep the first valid layout. Exhaustive constraint solving is
//! graph-coloring-like; at classroom scale a bounded retry loop finds a
//! valid layout almost surely whenever one exists, and the budget caps the
//! worst-case latency on unsatisfiable rule sets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::models::{Constraint, ConstraintKind, Person, SeatingChart, Table};
use shared::types::PersonId;

use crate::grouping::shuffle;

/// Result of a seating search.
///
/// A fresh value; the input chart is never mutated by the search. Commit
/// with [`apply_assignment`] once the caller accepts the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingAssignment {
    /// The chart's tables with seats filled
    pub tables: Vec<Table>,
    /// False when the attempt budget ran out before all rules held
    pub constraints_satisfied: bool,
    /// Number of attempts actually spent
    pub attempts: u32,
}

/// Search for a seat assignment satisfying every rule on the chart.
///
/// Each attempt shuffles the roster and fills the flattened seat list in
/// order; extra seats stay empty and extra people stay unseated. A rule
/// whose endpoints are not both placed is vacuously satisfied. When the
/// budget is exhausted the last generated layout is returned with
/// `constraints_satisfied = false`; unsatisfiable rule sets degrade, they
/// never error or hang.
pub fn assign_seating(
    chart: &SeatingChart,
    roster: &[Person],
    max_attempts: u32,
) -> SeatingAssignment {
    let budget = max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let shuffled = shuffle(roster);
        let tables = place(chart, &shuffled);

        if satisfies_all(&chart.constraints, &tables) {
            tracing::debug!(
                chart_id = chart.id,
                attempt,
                "seating assignment satisfies all constraints"
            );
            return SeatingAssignment {
                tables,
                constraints_satisfied: true,
                attempts: attempt,
            };
        }

        if attempt >= budget {
            tracing::warn!(
                chart_id = chart.id,
                attempts = attempt,
                constraints = chart.constraints.len(),
                "attempt budget exhausted, committing layout with violated rules"
            );
            return SeatingAssignment {
                tables,
                constraints_satisfied: false,
                attempts: attempt,
            };
        }
    }
}

/// Commit an assignment's seat occupancy onto the chart.
pub fn apply_assignment(chart: &mut SeatingChart, assignment: &SeatingAssignment) {
    chart.tables = assignment.tables.clone();
}

/// Fill the chart's seats with `people` in order, one person per seat.
fn place(chart: &SeatingChart, people: &[Person]) -> Vec<Table> {
    let mut tables = chart.tables.clone();
    let mut next = people.iter();
    for seat in tables.iter_mut().flat_map(|t| t.seats.iter_mut()) {
        seat.occupant_id = next.next().map(|p| p.id);
    }
    tables
}

/// Validate every rule against a placement.
fn satisfies_all(constraints: &[Constraint], tables: &[Table]) -> bool {
    let placement: HashMap<PersonId, i64> = tables
        .iter()
        .flat_map(|t| t.seats.iter())
        .filter_map(|s| s.occupant_id.map(|p| (p, s.table_id)))
        .collect();

    constraints.iter().all(|c| {
        match (placement.get(&c.person_a), placement.get(&c.person_b)) {
            (Some(table_a), Some(table_b)) => match c.kind {
                ConstraintKind::Apart => table_a != table_b,
                ConstraintKind::Together => table_a == table_b,
            },
            // one or both people unplaced: vacuously satisfied
            _ => true,
        }
    })
}
