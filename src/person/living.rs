use serde::{Deserialize, Serialize};

use super::{replace_date, DeceasedPerson, FullName, LivingPerson, PersonRecord, PersonStatus};
use crate::case::CaseId;

/// Implements the shared and living capabilities for a struct with
/// `name` and `date_of_birth` fields, plus the transition to deceased.
macro_rules! living_person {
    ($ty:ident, $status:expr) => {
        impl PersonRecord for $ty {
            fn name(&self) -> &FullName {
                &self.name
            }

            fn name_mut(&mut self) -> &mut FullName {
                &mut self.name
            }

            fn status(&self) -> PersonStatus {
                $status
            }
        }

        impl LivingPerson for $ty {
            fn date_of_birth(&self) -> &str {
                &self.date_of_birth
            }

            fn set_date_of_birth(&mut self, date_of_birth: &str) -> bool {
                replace_date(&mut self.date_of_birth, date_of_birth)
            }
        }

        impl $ty {
            /// Consume this record and produce the deceased one. The name carries over.
            pub fn decease(
                self,
                date_of_death: impl Into<String>,
                cause_of_death: impl Into<String>,
            ) -> DeceasedPerson {
                DeceasedPerson::with_name(self.name, date_of_death, cause_of_death)
            }
        }
    };
}

/// A person who is neither arrested nor imprisoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreePerson {
    name: FullName,
    date_of_birth: String,
}

living_person!(FreePerson, PersonStatus::Free);

impl FreePerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: FullName::new(first_name, last_name),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Consume this record and produce the arrested one.
    pub fn arrest(self, related_case_ids: Vec<CaseId>) -> ArrestedPerson {
        ArrestedPerson {
            name: self.name,
            date_of_birth: self.date_of_birth,
            related_case_ids,
        }
    }
}

/// A person currently under arrest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrestedPerson {
    name: FullName,
    date_of_birth: String,
    related_case_ids: Vec<CaseId>,
}

living_person!(ArrestedPerson, PersonStatus::Arrested);

impl ArrestedPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        related_case_ids: Vec<CaseId>,
    ) -> Self {
        Self {
            name: FullName::new(first_name, last_name),
            date_of_birth: date_of_birth.into(),
            related_case_ids,
        }
    }

    pub fn related_cases(&self) -> &[CaseId] {
        &self.related_case_ids
    }

    /// Append a case id. Duplicates are kept and the id is not checked against any store.
    pub fn add_case(&mut self, case_id: CaseId) {
        self.related_case_ids.push(case_id);
    }

    /// Consume this record and produce the imprisoned one. Related cases carry over.
    pub fn imprison(
        self,
        imprisonment_start_date: impl Into<String>,
        sentence_length_months: u32,
    ) -> ImprisonedPerson {
        ImprisonedPerson {
            name: self.name,
            date_of_birth: self.date_of_birth,
            imprisonment_start_date: imprisonment_start_date.into(),
            sentence_length_months,
            related_case_ids: self.related_case_ids,
        }
    }

    /// Related cases are dropped; a free person has none.
    pub fn release(self) -> FreePerson {
        FreePerson {
            name: self.name,
            date_of_birth: self.date_of_birth,
        }
    }
}

/// A person serving a prison sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprisonedPerson {
    name: FullName,
    date_of_birth: String,
    imprisonment_start_date: String,
    sentence_length_months: u32,
    related_case_ids: Vec<CaseId>,
}

living_person!(ImprisonedPerson, PersonStatus::Imprisoned);

impl ImprisonedPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        imprisonment_start_date: impl Into<String>,
        sentence_length_months: u32,
        related_case_ids: Vec<CaseId>,
    ) -> Self {
        Self {
            name: FullName::new(first_name, last_name),
            date_of_birth: date_of_birth.into(),
            imprisonment_start_date: imprisonment_start_date.into(),
            sentence_length_months,
            related_case_ids,
        }
    }

    pub fn imprisonment_start_date(&self) -> &str {
        &self.imprisonment_start_date
    }

    /// Sentence length in whole months.
    pub fn sentence_length_months(&self) -> u32 {
        self.sentence_length_months
    }

    pub fn related_cases(&self) -> &[CaseId] {
        &self.related_case_ids
    }

    pub fn release(self) -> FreePerson {
        FreePerson {
            name: self.name,
            date_of_birth: self.date_of_birth,
        }
    }
}
