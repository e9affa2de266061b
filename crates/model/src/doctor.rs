//! The doctor directory record.

use serde::{Deserialize, Serialize};

use crate::serde_helpers;

/// A single doctor record as served by the upstream dataset.
///
/// Records are immutable once loaded. There is no upstream identifier, so
/// the `name` string doubles as the record's identity within one loaded
/// dataset; two doctors sharing a name are indistinguishable to name-based
/// lookups.
///
/// All fields are optional on the wire. Absent or malformed fields default
/// (empty string, empty list, zero, false) so a ragged upstream record still
/// loads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Doctor {
    /// Display name, search key, and de-facto identifier.
    #[serde(deserialize_with = "serde_helpers::lenient_string")]
    pub name: String,

    /// Specialties in upstream order. May arrive as a bare string or `null`.
    #[serde(deserialize_with = "serde_helpers::string_or_vec")]
    pub specialties: Vec<String>,

    /// Years of practice. Tolerates numeric strings like `"13 Years"`.
    #[serde(deserialize_with = "serde_helpers::lenient_u32")]
    pub years_of_experience: u32,

    /// Consultation fee in whole currency units.
    #[serde(deserialize_with = "serde_helpers::lenient_u32")]
    pub consultation_fee: u32,

    /// Whether the doctor offers video consultations.
    #[serde(deserialize_with = "serde_helpers::lenient_bool")]
    pub video_consult_available: bool,

    /// Clinic display name. Never filterable.
    #[serde(deserialize_with = "serde_helpers::lenient_string")]
    pub clinic_name: String,

    /// City display name. Never filterable.
    #[serde(deserialize_with = "serde_helpers::lenient_string")]
    pub city: String,
}

impl Doctor {
    /// Creates a record with the given name and all other fields defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialties.push(specialty.into());
        self
    }

    /// Sets the years of experience.
    pub fn with_experience(mut self, years: u32) -> Self {
        self.years_of_experience = years;
        self
    }

    /// Sets the consultation fee.
    pub fn with_fee(mut self, fee: u32) -> Self {
        self.consultation_fee = fee;
        self
    }

    /// Sets video consultation availability.
    pub fn with_video_consult(mut self, available: bool) -> Self {
        self.video_consult_available = available;
        self
    }

    /// Sets the clinic and city display fields.
    pub fn with_clinic(mut self, clinic: impl Into<String>, city: impl Into<String>) -> Self {
        self.clinic_name = clinic.into();
        self.city = city.into();
        self
    }

    /// Returns true if `needle` occurs in the doctor's name, ignoring case.
    ///
    /// An empty needle matches every record; callers that treat the empty
    /// string as "no search" must skip the check themselves.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns true if any of the doctor's specialties equals (exactly) one
    /// of the given selections.
    pub fn has_any_specialty(&self, selection: &[String]) -> bool {
        self.specialties.iter().any(|s| selection.contains(s))
    }
}
