//! Specialty list response envelope.

use serde::{Deserialize, Serialize};

/// The specialties endpoint's response body.
///
/// Specialties are listed distinct, in order of first appearance across the
/// loaded dataset; clients use them to render the specialty filter options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtiesResponse {
    /// Number of distinct specialties.
    pub total: usize,

    /// The distinct specialty names.
    pub specialties: Vec<String>,
}

impl SpecialtiesResponse {
    /// Builds a response from the distinct specialty list.
    pub fn new(specialties: Vec<String>) -> Self {
        Self {
            total: specialties.len(),
            specialties,
        }
    }
}
