//! Case files - a validated `{id, category, description}` record.
//!
//! A `Case` is a plain value. The database stores its own copy and hands
//! copies back out, so nothing outside the database can mutate a stored case.
//!
//! ## Example
//!
//! ```ignore
//! use police_records::{Case, CaseCategory};
//!
//! let case = Case::new(101, CaseCategory::Theft, "Stolen bicycle")?;
//! assert_eq!(
//!     case.to_string(),
//!     "Case ID: 101 | Type: Theft | Description: Stolen bicycle"
//! );
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::RecordError;

/// Caller-assigned case identifier. Always greater than zero once inside a `Case`.
pub type CaseId = u32;

/// Closed set of case categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseCategory {
    Theft,
    Burglary,
    Assault,
    Homicide,
    DisruptingPeace,
    Fraud,
    #[default]
    Other,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 7] = [
        CaseCategory::Theft,
        CaseCategory::Burglary,
        CaseCategory::Assault,
        CaseCategory::Homicide,
        CaseCategory::DisruptingPeace,
        CaseCategory::Fraud,
        CaseCategory::Other,
    ];

    /// Human-readable name used by the case rendering.
    pub fn label(&self) -> &'static str {
        match self {
            CaseCategory::Theft => "Theft",
            CaseCategory::Burglary => "Burglary",
            CaseCategory::Assault => "Assault",
            CaseCategory::Homicide => "Homicide",
            CaseCategory::DisruptingPeace => "Disrupting the peace",
            CaseCategory::Fraud => "Fraud",
            CaseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single police case.
///
/// Descriptions are expected to stay under 120 characters; that length is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    id: CaseId,
    category: CaseCategory,
    description: String,
}

/// Unvalidated wire shape of a case. Deserialization funnels through `Case::new`'s checks.
#[derive(Deserialize)]
struct CaseRecord {
    id: CaseId,
    category: CaseCategory,
    description: String,
}

impl<'de> Deserialize<'de> for Case {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = CaseRecord::deserialize(deserializer)?;
        Case::new(i64::from(record.id), record.category, record.description)
            .map_err(de::Error::custom)
    }
}

impl Case {
    /// Fails with `RecordError::InvalidArgument` if `id <= 0` (or does not fit a
    /// `CaseId`) or `description` is empty.
    pub fn new(
        id: i64,
        category: CaseCategory,
        description: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let description = description.into();
        Ok(Self {
            id: validate_id(id)?,
            category,
            description: validate_description(description)?,
        })
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> CaseId {
        self.id
    }

    /// Category of the incident.
    pub fn category(&self) -> CaseCategory {
        self.category
    }

    /// Free-text description, never empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Same validation as construction. On failure the current id is kept.
    pub fn set_id(&mut self, id: i64) -> Result<(), RecordError> {
        self.id = validate_id(id)?;
        Ok(())
    }

    /// Change the category. Always succeeds.
    pub fn set_category(&mut self, category: CaseCategory) {
        self.category = category;
    }

    /// Fails on an empty description. On failure the current description is kept.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), RecordError> {
        self.description = validate_description(description.into())?;
        Ok(())
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Case ID: {} | Type: {} | Description: {}",
            self.id, self.category, self.description
        )
    }
}

fn validate_id(id: i64) -> Result<CaseId, RecordError> {
    if id <= 0 {
        return Err(RecordError::invalid("Case ID must be greater than zero."));
    }
    CaseId::try_from(id).map_err(|_| RecordError::invalid("Case ID is out of range."))
}

fn validate_description(description: String) -> Result<String, RecordError> {
    if description.is_empty() {
        return Err(RecordError::invalid("Case description cannot be empty."));
    }
    Ok(description)
}
