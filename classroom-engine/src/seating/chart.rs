//! Seating chart construction and direct mutations
//!
//! Chart topology (tables x seats-per-table) is validated and fixed at
//! creation. Constraints and seat occupancy are the only mutable parts.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Constraint, ConstraintCreate, Seat, SeatingChart, SeatingChartCreate, Table,
};
use shared::types::PersonId;
use shared::util::{now_millis, snowflake_id};

use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Build a new seating chart with a uniform table/seat topology.
///
/// Table IDs are 1..=table_count; seat IDs are 1..=total_seats, numbered
/// across tables in order. Zero tables or zero seats per table is rejected
/// before any entity is created.
pub fn create_chart(payload: SeatingChartCreate) -> AppResult<SeatingChart> {
    let name = payload.name.trim();
    validate_required_text(name, "chart name", MAX_NAME_LEN)?;

    if payload.table_count == 0 || payload.seats_per_table == 0 {
        return Err(AppError::new(ErrorCode::ChartTopologyInvalid)
            .with_detail("table_count", payload.table_count)
            .with_detail("seats_per_table", payload.seats_per_table));
    }

    let mut tables = Vec::with_capacity(payload.table_count as usize);
    let mut seat_no: i64 = 0;
    for table_id in 1..=payload.table_count as i64 {
        let seats = (0..payload.seats_per_table)
            .map(|_| {
                seat_no += 1;
                Seat {
                    id: seat_no,
                    table_id,
                    occupant_id: None,
                }
            })
            .collect();
        tables.push(Table {
            id: table_id,
            seats,
        });
    }

    let chart = SeatingChart {
        id: snowflake_id(),
        name: name.to_string(),
        tables,
        constraints: Vec::new(),
        created_at: now_millis(),
    };
    tracing::debug!(
        chart_id = chart.id,
        tables = payload.table_count,
        seats = chart.total_seats(),
        "created seating chart"
    );
    Ok(chart)
}

/// Add a pairwise rule to a chart.
///
/// Self-referencing rules are rejected and the chart is left unchanged.
/// Duplicates are permitted; they are redundant but harmless.
pub fn add_constraint(
    chart: &mut SeatingChart,
    payload: ConstraintCreate,
) -> AppResult<Constraint> {
    if payload.person_a == payload.person_b {
        return Err(AppError::new(ErrorCode::ConstraintSelfReference)
            .with_detail("person", payload.person_a));
    }

    let constraint = Constraint {
        id: snowflake_id(),
        kind: payload.kind,
        person_a: payload.person_a,
        person_b: payload.person_b,
    };
    chart.constraints.push(constraint.clone());
    Ok(constraint)
}

/// Remove a rule by ID. Returns whether it was present.
pub fn remove_constraint(chart: &mut SeatingChart, constraint_id: i64) -> bool {
    let before = chart.constraints.len();
    chart.constraints.retain(|c| c.id != constraint_id);
    chart.constraints.len() != before
}

/// Clear a single seat.
///
/// Idempotent: clearing an already-empty seat is not an error. Returns
/// whether an occupant was removed; unknown seat IDs are rejected.
pub fn clear_seat(chart: &mut SeatingChart, seat_id: i64) -> AppResult<bool> {
    let seat = chart
        .tables
        .iter_mut()
        .flat_map(|t| t.seats.iter_mut())
        .find(|s| s.id == seat_id)
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::SeatNotFound, format!("Seat {} not found", seat_id))
        })?;
    Ok(seat.occupant_id.take().is_some())
}

/// Clear every seat on the chart. Returns the number of seats emptied.
pub fn clear_all_seats(chart: &mut SeatingChart) -> usize {
    chart
        .tables
        .iter_mut()
        .flat_map(|t| t.seats.iter_mut())
        .filter_map(|s| s.occupant_id.take())
        .count()
}

/// Remove every reference to a person from a chart: rules naming them are
/// pruned and any seat they occupy is cleared.
pub fn purge_person(chart: &mut SeatingChart, person_id: PersonId) {
    chart.constraints.retain(|c| !c.references(person_id));
    for seat in chart.tables.iter_mut().flat_map(|t| t.seats.iter_mut()) {
        if seat.occupant_id == Some(person_id) {
            seat.occupant_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ConstraintKind;

    fn payload(tables: u32, seats: u32) -> SeatingChartCreate {
        SeatingChartCreate {
            name: "Homeroom".into(),
            table_count: tables,
            seats_per_table: seats,
        }
    }

    #[test]
    fn test_create_chart_topology() {
        let chart = create_chart(payload(3, 4)).unwrap();
        assert_eq!(chart.tables.len(), 3);
        assert_eq!(chart.total_seats(), 12);

        // table ids 1..=3, seat ids 1..=12 in table order
        let table_ids: Vec<i64> = chart.tables.iter().map(|t| t.id).collect();
        assert_eq!(table_ids, vec![1, 2, 3]);
        let seat_ids: Vec<i64> = chart.seats().map(|s| s.id).collect();
        assert_eq!(seat_ids, (1..=12).collect::<Vec<i64>>());
        assert!(chart.seats().all(|s| s.occupant_id.is_none()));
    }

    #[test]
    fn test_create_chart_rejects_empty_topology() {
        let err = create_chart(payload(0, 4)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ChartTopologyInvalid);

        let err = create_chart(payload(4, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ChartTopologyInvalid);
    }

    #[test]
    fn test_create_chart_rejects_blank_name() {
        let mut p = payload(2, 2);
        p.name = "  ".into();
        assert!(create_chart(p).is_err());
    }

    #[test]
    fn test_add_constraint_rejects_self_reference() {
        let mut chart = create_chart(payload(2, 2)).unwrap();
        let err = add_constraint(
            &mut chart,
            ConstraintCreate {
                kind: ConstraintKind::Apart,
                person_a: 7,
                person_b: 7,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConstraintSelfReference);
        assert!(chart.constraints.is_empty());
    }

    #[test]
    fn test_add_and_remove_constraint() {
        let mut chart = create_chart(payload(2, 2)).unwrap();
        let constraint = add_constraint(
            &mut chart,
            ConstraintCreate {
                kind: ConstraintKind::Together,
                person_a: 1,
                person_b: 2,
            },
        )
        .unwrap();
        assert_eq!(chart.constraints.len(), 1);

        assert!(remove_constraint(&mut chart, constraint.id));
        assert!(chart.constraints.is_empty());
        assert!(!remove_constraint(&mut chart, constraint.id));
    }

    #[test]
    fn test_clear_seat_idempotent() {
        let mut chart = create_chart(payload(1, 2)).unwrap();
        chart.tables[0].seats[0].occupant_id = Some(42);

        assert!(clear_seat(&mut chart, 1).unwrap());
        // already empty: no error, nothing removed
        assert!(!clear_seat(&mut chart, 1).unwrap());
        assert!(!clear_seat(&mut chart, 2).unwrap());
    }

    #[test]
    fn test_clear_seat_unknown_id() {
        let mut chart = create_chart(payload(1, 2)).unwrap();
        let err = clear_seat(&mut chart, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeatNotFound);
    }

    #[test]
    fn test_clear_all_seats() {
        let mut chart = create_chart(payload(2, 2)).unwrap();
        chart.tables[0].seats[0].occupant_id = Some(1);
        chart.tables[1].seats[1].occupant_id = Some(2);

        assert_eq!(clear_all_seats(&mut chart), 2);
        assert!(chart.seats().all(|s| s.occupant_id.is_none()));
        assert_eq!(clear_all_seats(&mut chart), 0);
    }

    #[test]
    fn test_purge_person() {
        let mut chart = create_chart(payload(2, 1)).unwrap();
        add_constraint(
            &mut chart,
            ConstraintCreate {
                kind: ConstraintKind::Apart,
                person_a: 1,
                person_b: 2,
            },
        )
        .unwrap();
        add_constraint(
            &mut chart,
            ConstraintCreate {
                kind: ConstraintKind::Together,
                person_a: 2,
                person_b: 3,
            },
        )
        .unwrap();
        chart.tables[0].seats[0].occupant_id = Some(1);
        chart.tables[1].seats[0].occupant_id = Some(2);

        purge_person(&mut chart, 1);

        assert_eq!(chart.constraints.len(), 1);
        assert!(!chart.constraints[0].references(1));
        assert!(chart.table_of(1).is_none());
        assert_eq!(chart.table_of(2), Some(2));
    }
}
