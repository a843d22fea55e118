//! Person records - a closed set of statuses, each with its own required fields.
//!
//! A person's status is fixed for the lifetime of a value. Moving someone from
//! free to arrested (or any other change) consumes the old value and produces
//! a new one, which then replaces the stored handle in the database.
//!
//! ## Example
//!
//! ```ignore
//! use police_records::{FreePerson, Person, PersonRecord, PersonStatus};
//!
//! let free = FreePerson::new("Jan", "Novak", "1990-04-12");
//! let arrested = free.arrest(vec![101]);
//! let person = Person::from(arrested);
//! assert_eq!(person.status(), PersonStatus::Arrested);
//! ```

mod deceased;
mod handle;
mod living;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::CaseId;

pub use deceased::DeceasedPerson;
pub use handle::{PersonHandle, PersonWriteGuard};
pub use living::{ArrestedPerson, FreePerson, ImprisonedPerson};

/// Length of a `YYYY-MM-DD` date.
pub const DATE_LEN: usize = 10;

/// Current status of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonStatus {
    Free,
    Arrested,
    Imprisoned,
    Deceased,
}

impl fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersonStatus::Free => "Free",
            PersonStatus::Arrested => "Arrested",
            PersonStatus::Imprisoned => "Imprisoned",
            PersonStatus::Deceased => "Deceased",
        };
        f.write_str(label)
    }
}

/// First and last name. Updates with an empty string are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    first: String,
    last: String,
}

impl FullName {
    /// Empty names are accepted here; only the setters filter them.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn set_first(&mut self, first: &str) {
        if !first.is_empty() {
            self.first = first.to_string();
        }
    }

    pub fn set_last(&mut self, last: &str) {
        if !last.is_empty() {
            self.last = last.to_string();
        }
    }
}

/// Capabilities shared by every person variant.
pub trait PersonRecord {
    fn name(&self) -> &FullName;

    fn name_mut(&mut self) -> &mut FullName;

    fn status(&self) -> PersonStatus;

    fn first_name(&self) -> &str {
        self.name().first()
    }

    fn last_name(&self) -> &str {
        self.name().last()
    }

    /// No-op for an empty string.
    fn set_first_name(&mut self, first_name: &str) {
        self.name_mut().set_first(first_name);
    }

    /// No-op for an empty string.
    fn set_last_name(&mut self, last_name: &str) {
        self.name_mut().set_last(last_name);
    }
}

/// Capabilities of persons who are alive (free, arrested, imprisoned).
pub trait LivingPerson: PersonRecord {
    fn date_of_birth(&self) -> &str;

    /// Accepts any value exactly `DATE_LEN` bytes long and returns `true`.
    /// Anything else is rejected, the stored date is kept and `false` is returned.
    /// This is a shape check only: "2024-02-30" is accepted.
    fn set_date_of_birth(&mut self, date_of_birth: &str) -> bool;
}

/// Stores `value` into `slot` if it has the `YYYY-MM-DD` length.
pub(crate) fn replace_date(slot: &mut String, value: &str) -> bool {
    if value.len() != DATE_LEN {
        return false;
    }
    *slot = value.to_string();
    true
}

/// A person of known status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    Free(FreePerson),
    Arrested(ArrestedPerson),
    Imprisoned(ImprisonedPerson),
    Deceased(DeceasedPerson),
}

impl Person {
    /// Wrap into a shared handle ready for `Database::add_person`.
    pub fn into_handle(self) -> PersonHandle {
        PersonHandle::from(self)
    }

    fn record(&self) -> &dyn PersonRecord {
        match self {
            Person::Free(person) => person,
            Person::Arrested(person) => person,
            Person::Imprisoned(person) => person,
            Person::Deceased(person) => person,
        }
    }

    fn record_mut(&mut self) -> &mut dyn PersonRecord {
        match self {
            Person::Free(person) => person,
            Person::Arrested(person) => person,
            Person::Imprisoned(person) => person,
            Person::Deceased(person) => person,
        }
    }

    pub fn is_living(&self) -> bool {
        !matches!(self, Person::Deceased(_))
    }

    pub fn as_living(&self) -> Option<&dyn LivingPerson> {
        match self {
            Person::Free(person) => Some(person),
            Person::Arrested(person) => Some(person),
            Person::Imprisoned(person) => Some(person),
            Person::Deceased(_) => None,
        }
    }

    pub fn as_living_mut(&mut self) -> Option<&mut dyn LivingPerson> {
        match self {
            Person::Free(person) => Some(person),
            Person::Arrested(person) => Some(person),
            Person::Imprisoned(person) => Some(person),
            Person::Deceased(_) => None,
        }
    }

    pub fn as_arrested_mut(&mut self) -> Option<&mut ArrestedPerson> {
        match self {
            Person::Arrested(person) => Some(person),
            _ => None,
        }
    }

    /// Related case ids for arrested and imprisoned persons.
    pub fn related_cases(&self) -> Option<&[CaseId]> {
        match self {
            Person::Arrested(person) => Some(person.related_cases()),
            Person::Imprisoned(person) => Some(person.related_cases()),
            Person::Free(_) | Person::Deceased(_) => None,
        }
    }

    /// Produce the deceased record for a living person.
    /// An already deceased person is handed back unchanged as `Err`.
    pub fn decease(
        self,
        date_of_death: impl Into<String>,
        cause_of_death: impl Into<String>,
    ) -> Result<DeceasedPerson, Person> {
        match self {
            Person::Free(person) => Ok(person.decease(date_of_death, cause_of_death)),
            Person::Arrested(person) => Ok(person.decease(date_of_death, cause_of_death)),
            Person::Imprisoned(person) => Ok(person.decease(date_of_death, cause_of_death)),
            deceased @ Person::Deceased(_) => Err(deceased),
        }
    }
}

impl PersonRecord for Person {
    fn name(&self) -> &FullName {
        self.record().name()
    }

    fn name_mut(&mut self) -> &mut FullName {
        self.record_mut().name_mut()
    }

    fn status(&self) -> PersonStatus {
        self.record().status()
    }
}

impl From<FreePerson> for Person {
    fn from(person: FreePerson) -> Self {
        Person::Free(person)
    }
}

impl From<ArrestedPerson> for Person {
    fn from(person: ArrestedPerson) -> Self {
        Person::Arrested(person)
    }
}

impl From<ImprisonedPerson> for Person {
    fn from(person: ImprisonedPerson) -> Self {
        Person::Imprisoned(person)
    }
}

impl From<DeceasedPerson> for Person {
    fn from(person: DeceasedPerson) -> Self {
        Person::Deceased(person)
    }
}
