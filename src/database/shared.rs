//! SharedDatabase - one lock around the whole aggregate for multi-threaded callers.

use std::sync::{Arc, RwLock};

use tracing::warn;

use super::Database;
use crate::case::{Case, CaseId};
use crate::error::RecordError;
use crate::person::{Person, PersonHandle};

/// Thread-safe wrapper over a [`Database`].
///
/// Every operation takes the single aggregate lock. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct SharedDatabase {
    inner: Arc<RwLock<Database>>,
}

impl From<Database> for SharedDatabase {
    fn from(database: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(database)),
        }
    }
}

impl SharedDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with shared access to the database.
    pub fn read<T>(&self, f: impl FnOnce(&Database) -> T) -> Result<T, RecordError> {
        let database = self.inner.read().map_err(|_| {
            warn!("database lock poisoned on read");
            RecordError::LockPoisoned("read")
        })?;
        Ok(f(&database))
    }

    /// Run `f` with exclusive access to the database.
    pub fn write<T>(&self, f: impl FnOnce(&mut Database) -> T) -> Result<T, RecordError> {
        let mut database = self.inner.write().map_err(|_| {
            warn!("database lock poisoned on write");
            RecordError::LockPoisoned("write")
        })?;
        Ok(f(&mut database))
    }

    pub fn add_person(&self, person: Option<PersonHandle>) -> Result<bool, RecordError> {
        self.write(|db| db.add_person(person))
    }

    pub fn insert_person(&self, person: impl Into<Person>) -> Result<PersonHandle, RecordError> {
        self.write(|db| db.insert_person(person))
    }

    pub fn get_person(&self, index: usize) -> Result<Option<PersonHandle>, RecordError> {
        self.read(|db| db.get_person(index))
    }

    pub fn remove_person(&self, index: usize) -> Result<bool, RecordError> {
        self.write(|db| db.remove_person(index))
    }

    pub fn replace_person(
        &self,
        index: usize,
        person: impl Into<Person>,
    ) -> Result<Option<PersonHandle>, RecordError> {
        self.write(|db| db.replace_person(index, person))
    }

    pub fn person_count(&self) -> Result<usize, RecordError> {
        self.read(Database::person_count)
    }

    pub fn add_case(&self, case: Case) -> Result<bool, RecordError> {
        self.write(|db| db.add_case(case))
    }

    pub fn get_case_by_id(&self, id: CaseId) -> Result<Option<Case>, RecordError> {
        self.read(|db| db.get_case_by_id(id))
    }

    pub fn remove_case_by_id(&self, id: CaseId) -> Result<bool, RecordError> {
        self.write(|db| db.remove_case_by_id(id))
    }

    pub fn case_count(&self) -> Result<usize, RecordError> {
        self.read(Database::case_count)
    }

    pub fn clear(&self) -> Result<(), RecordError> {
        self.write(Database::clear)
    }
}
