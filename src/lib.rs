//! In-memory records store for case files and person records.
//!
//! Callers build [`Case`] and [`Person`] values directly (construction checks
//! field contracts), then hand them to a [`Database`], which owns them and
//! keeps case ids unique.

mod case;
mod database;
mod error;
mod person;
mod snapshot;

pub use case::{Case, CaseCategory, CaseId};
pub use database::{Database, SharedDatabase};
pub use error::RecordError;
pub use person::{
    ArrestedPerson, DeceasedPerson, FreePerson, FullName, ImprisonedPerson, LivingPerson, Person,
    PersonHandle, PersonRecord, PersonStatus, PersonWriteGuard, DATE_LEN,
};
pub use snapshot::DatabaseSnapshot;
