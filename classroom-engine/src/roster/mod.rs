//! Roster management
//!
//! The roster is the shared list of people used by both the grouping and
//! seating features. Removing a person cascades: every constraint that
//! references them is pruned and any seat they occupy is cleared, across
//! all charts handed to [`remove_person_cascade`].

use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{Person, SeatingChart};
use shared::types::PersonId;
use shared::util::{now_millis, snowflake_id};

use crate::seating::purge_person;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// The shared people list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, person_id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == person_id)
    }

    pub fn contains(&self, person_id: PersonId) -> bool {
        self.get(person_id).is_some()
    }

    /// Add a single person by name.
    ///
    /// The name is trimmed; blank or over-long names are rejected and the
    /// roster is left unchanged.
    pub fn add(&mut self, name: &str) -> AppResult<Person> {
        let name = name.trim();
        validate_required_text(name, "name", MAX_NAME_LEN)?;

        let person = Person {
            id: snowflake_id(),
            name: name.to_string(),
            created_at: now_millis(),
        };
        self.people.push(person.clone());
        Ok(person)
    }

    /// Add people from a newline-delimited paste.
    ///
    /// Lines are trimmed and blank lines skipped. All lines are validated
    /// before any person is added, so a bad line leaves the roster
    /// unchanged. Returns the people that were added.
    pub fn add_bulk(&mut self, text: &str) -> AppResult<Vec<Person>> {
        let names: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        for name in &names {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }

        let added: Vec<Person> = names
            .into_iter()
            .map(|name| Person {
                id: snowflake_id(),
                name: name.to_string(),
                created_at: now_millis(),
            })
            .collect();
        self.people.extend(added.iter().cloned());

        tracing::debug!(added = added.len(), total = self.people.len(), "bulk roster paste");
        Ok(added)
    }

    /// Remove a person from the roster only.
    ///
    /// Returns whether the person was present. Prefer
    /// [`remove_person_cascade`] when charts may reference the person.
    pub fn remove(&mut self, person_id: PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p.id != person_id);
        self.people.len() != before
    }
}

/// Remove a person and every reference to them.
///
/// Cascades across all given charts: constraints naming the person are
/// pruned and any seat they occupy is cleared. Unknown IDs are a no-op.
pub fn remove_person_cascade(
    roster: &mut Roster,
    charts: &mut [SeatingChart],
    person_id: PersonId,
) -> bool {
    if !roster.remove(person_id) {
        return false;
    }
    for chart in charts.iter_mut() {
        purge_person(chart, person_id);
    }
    tracing::debug!(person_id, charts = charts.len(), "removed person with cascade");
    true
}
