//! PersonHandle - shared, status-preserving access to a stored person.

use std::ops::Deref;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use super::{ArrestedPerson, LivingPerson, Person, PersonRecord};
use crate::error::RecordError;

/// Shared handle to a stored person. The database keeps one; readers may hold more.
///
/// Writers only ever get variant-scoped access, never `&mut Person`, so the
/// status seen through any handle is fixed for its lifetime. A status change
/// goes through `Database::replace_person`.
#[derive(Debug, Clone)]
pub struct PersonHandle {
    inner: Arc<RwLock<Person>>,
}

impl From<Person> for PersonHandle {
    fn from(person: Person) -> Self {
        Self {
            inner: Arc::new(RwLock::new(person)),
        }
    }
}

impl PersonHandle {
    /// Shared read access.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Person>, RecordError> {
        self.inner.read().map_err(|_| {
            warn!("person lock poisoned on read");
            RecordError::LockPoisoned("person read")
        })
    }

    /// Exclusive access limited to the fields of the current variant.
    pub fn write(&self) -> Result<PersonWriteGuard<'_>, RecordError> {
        let guard = self.inner.write().map_err(|_| {
            warn!("person lock poisoned on write");
            RecordError::LockPoisoned("person write")
        })?;
        Ok(PersonWriteGuard { guard })
    }

    /// Whether both handles point at the same stored person.
    pub fn ptr_eq(&self, other: &PersonHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this person, the database's included.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

/// Write access to a person that cannot replace its variant.
pub struct PersonWriteGuard<'a> {
    guard: RwLockWriteGuard<'a, Person>,
}

impl Deref for PersonWriteGuard<'_> {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.guard
    }
}

impl PersonWriteGuard<'_> {
    /// Name access shared by every variant.
    pub fn record_mut(&mut self) -> &mut dyn PersonRecord {
        self.guard.record_mut()
    }

    pub fn as_living_mut(&mut self) -> Option<&mut dyn LivingPerson> {
        self.guard.as_living_mut()
    }

    pub fn as_arrested_mut(&mut self) -> Option<&mut ArrestedPerson> {
        self.guard.as_arrested_mut()
    }
}
