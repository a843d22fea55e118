//! Snapshots - a serializable copy of a whole database.
//!
//! Persons are written tagged by status (`{"Arrested": {...}}`) in positional
//! order; cases as `{id, category, description}` in insertion order. Restoring
//! runs every case through the same validation as `Case::new` and refuses
//! duplicate case ids.
//!
//! ## Example
//!
//! ```ignore
//! let json = db.snapshot()?.to_json()?;
//! let restored = Database::restore(DatabaseSnapshot::from_json(&json)?)?;
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case::Case;
use crate::database::Database;
use crate::error::RecordError;
use crate::person::Person;

/// Point-in-time copy of every person and case in a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub persons: Vec<Person>,
    pub cases: Vec<Case>,
}

impl DatabaseSnapshot {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse JSON, validating every case.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary form.
    #[cfg(feature = "bitcode")]
    pub fn encode(&self) -> Result<Vec<u8>, RecordError> {
        let bytes = bitcode::serialize(self)?;
        debug!(bytes = bytes.len(), "snapshot encoded");
        Ok(bytes)
    }

    /// Decode the binary form, validating every case.
    #[cfg(feature = "bitcode")]
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bitcode::deserialize(bytes)?)
    }
}

impl Database {
    /// Copy out every person and case. Fails only if a person's lock is poisoned.
    pub fn snapshot(&self) -> Result<DatabaseSnapshot, RecordError> {
        let persons = self
            .persons()
            .map(|handle| handle.read().map(|person| Person::clone(&person)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DatabaseSnapshot {
            persons,
            cases: self.cases().to_vec(),
        })
    }

    /// Build a fresh database from a snapshot, preserving order.
    pub fn restore(snapshot: DatabaseSnapshot) -> Result<Database, RecordError> {
        let DatabaseSnapshot { persons, cases } = snapshot;

        let mut seen = HashSet::with_capacity(cases.len());
        if let Some(duplicate) = cases.iter().find(|case| !seen.insert(case.id())) {
            return Err(RecordError::DuplicateCaseId(duplicate.id()));
        }

        let mut database = Database::with_capacity(persons.len(), cases.len());
        for person in persons {
            database.insert_person(person);
        }
        for case in cases {
            database.add_case(case);
        }

        debug!(
            persons = database.person_count(),
            cases = database.case_count(),
            "database restored from snapshot"
        );
        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseCategory;
    use crate::person::{DeceasedPerson, FreePerson, ImprisonedPerson};

    fn sample() -> Database {
        let mut db = Database::new();
        db.insert_person(FreePerson::new("Ana", "Ruz", "1992-03-04"));
        db.insert_person(ImprisonedPerson::new(
            "Bo",
            "Lind",
            "1980-12-12",
            "2021-01-01",
            48,
            vec![2, 2],
        ));
        db.insert_person(DeceasedPerson::new("Cy", "Moor", "2020-10-10", "Unknown"));
        db.add_case(Case::new(2, CaseCategory::Homicide, "Riverside").unwrap());
        db.add_case(Case::new(1, CaseCategory::Fraud, "Pyramid scheme").unwrap());
        db
    }

    #[test]
    fn json_restores_same_content() {
        let snapshot = sample().snapshot().unwrap();
        let json = snapshot.to_json().unwrap();

        let restored = Database::restore(DatabaseSnapshot::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored.snapshot().unwrap(), snapshot);
        assert_eq!(restored.cases()[0].id(), 2);
    }

    #[test]
    fn persons_are_tagged_by_status() {
        let json = sample().snapshot().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["persons"][0].get("Free").is_some());
        assert!(value["persons"][1].get("Imprisoned").is_some());
        assert!(value["persons"][2].get("Deceased").is_some());
        assert_eq!(value["cases"][1]["description"], "Pyramid scheme");
    }

    #[test]
    fn restore_rejects_duplicate_case_ids() {
        let case = Case::new(4, CaseCategory::Theft, "Bike").unwrap();
        let snapshot = DatabaseSnapshot {
            persons: Vec::new(),
            cases: vec![case.clone(), case],
        };
        assert_eq!(
            Database::restore(snapshot).unwrap_err(),
            RecordError::DuplicateCaseId(4)
        );
    }

    #[test]
    fn invalid_case_in_json_is_rejected() {
        let json = r#"{"persons":[],"cases":[{"id":0,"category":"Other","description":"x"}]}"#;
        assert!(matches!(
            DatabaseSnapshot::from_json(json),
            Err(RecordError::Serde(_))
        ));
    }

    #[cfg(feature = "bitcode")]
    #[test]
    fn bitcode_restores_same_content() {
        let snapshot = sample().snapshot().unwrap();
        let bytes = snapshot.encode().unwrap();
        assert_eq!(DatabaseSnapshot::decode(&bytes).unwrap(), snapshot);
    }
}
