use serde::{Deserialize, Serialize};

use super::{FullName, PersonRecord, PersonStatus};

/// A deceased person. Carries no birth date and no related cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeceasedPerson {
    name: FullName,
    date_of_death: String,
    // Free text, not a case reference.
    cause_of_death: String,
}

impl DeceasedPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_death: impl Into<String>,
        cause_of_death: impl Into<String>,
    ) -> Self {
        Self::with_name(FullName::new(first_name, last_name), date_of_death, cause_of_death)
    }

    pub(crate) fn with_name(
        name: FullName,
        date_of_death: impl Into<String>,
        cause_of_death: impl Into<String>,
    ) -> Self {
        Self {
            name,
            date_of_death: date_of_death.into(),
            cause_of_death: cause_of_death.into(),
        }
    }

    pub fn date_of_death(&self) -> &str {
        &self.date_of_death
    }

    pub fn cause_of_death(&self) -> &str {
        &self.cause_of_death
    }
}

impl PersonRecord for DeceasedPerson {
    fn name(&self) -> &FullName {
        &self.name
    }

    fn name_mut(&mut self) -> &mut FullName {
        &mut self.name
    }

    fn status(&self) -> PersonStatus {
        PersonStatus::Deceased
    }
}
