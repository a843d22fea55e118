//! Database - in-memory aggregate over persons and cases.
//!
//! Persons are addressed by position and cases by their own id. The two
//! disciplines stay separate: removing a person shifts every later index
//! down by one, while a case id stays valid until that case is removed.
//!
//! Misses are ordinary outcomes here. Lookups return `Option`, mutations
//! return `bool`; nothing in this module fails with an error.

mod shared;

use tracing::debug;

use crate::case::{Case, CaseId};
use crate::person::{Person, PersonHandle};

pub use shared::SharedDatabase;

/// Owns every stored person and case.
///
/// Not synchronized. Wrap in [`SharedDatabase`] to share it across threads.
#[derive(Debug, Default)]
pub struct Database {
    persons: Vec<PersonHandle>,
    cases: Vec<Case>,
}

impl Database {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size both collections.
    pub fn with_capacity(persons: usize, cases: usize) -> Self {
        Self {
            persons: Vec::with_capacity(persons),
            cases: Vec::with_capacity(cases),
        }
    }

    // ===== persons =====

    /// Append a person. Returns `false` only for a missing handle.
    pub fn add_person(&mut self, person: Option<PersonHandle>) -> bool {
        let Some(person) = person else {
            debug!("rejected empty person handle");
            return false;
        };
        self.persons.push(person);
        debug!(index = self.persons.len() - 1, "person added");
        true
    }

    /// Wrap `person` in a handle, append it and return the handle.
    pub fn insert_person(&mut self, person: impl Into<Person>) -> PersonHandle {
        let handle = person.into().into_handle();
        self.add_person(Some(handle.clone()));
        handle
    }

    /// Get the handle at `index`, or `None` if out of range.
    pub fn get_person(&self, index: usize) -> Option<PersonHandle> {
        self.persons.get(index).cloned()
    }

    /// Remove the person at `index`. Later persons move down one position.
    pub fn remove_person(&mut self, index: usize) -> bool {
        if index >= self.persons.len() {
            return false;
        }
        self.persons.remove(index);
        debug!(index, "person removed");
        true
    }

    /// Swap the person at `index` for a new value, e.g. after a status change.
    /// Returns the previous handle, or `None` if `index` is out of range.
    pub fn replace_person(
        &mut self,
        index: usize,
        person: impl Into<Person>,
    ) -> Option<PersonHandle> {
        let slot = self.persons.get_mut(index)?;
        let previous = std::mem::replace(slot, person.into().into_handle());
        debug!(index, "person replaced");
        Some(previous)
    }

    /// Number of stored persons.
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Stored handles in positional order.
    pub fn persons(&self) -> impl Iterator<Item = &PersonHandle> + '_ {
        self.persons.iter()
    }

    // ===== cases =====

    /// Store a copy of `case`. Returns `false` if a case with the same id exists.
    pub fn add_case(&mut self, case: Case) -> bool {
        if self.cases.iter().any(|existing| existing.id() == case.id()) {
            debug!(case_id = case.id(), "rejected duplicate case id");
            return false;
        }
        debug!(case_id = case.id(), category = %case.category(), "case added");
        self.cases.push(case);
        true
    }

    /// Get a copy of the case with `id`, if any.
    pub fn get_case_by_id(&self, id: CaseId) -> Option<Case> {
        self.cases.iter().find(|case| case.id() == id).cloned()
    }

    /// Remove the case with `id`. Returns `true` if it existed.
    pub fn remove_case_by_id(&mut self, id: CaseId) -> bool {
        match self.cases.iter().position(|case| case.id() == id) {
            Some(position) => {
                self.cases.remove(position);
                debug!(case_id = id, "case removed");
                true
            }
            None => false,
        }
    }

    /// Number of stored cases.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Stored cases in insertion order.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    // ===== clear =====

    /// Drop every person and case.
    pub fn clear(&mut self) {
        debug!(
            persons = self.persons.len(),
            cases = self.cases.len(),
            "clearing database"
        );
        self.persons.clear();
        self.cases.clear();
    }
}
