//! The loaded doctor dataset.
//!
//! A [`Directory`] is populated at most once, at startup, and never mutated
//! afterwards. Every listing, suggestion, and specialty lookup reads from
//! the same immutable snapshot, which is what makes the filter pipeline a
//! pure function of its inputs.

use chrono::{DateTime, Utc};

use vaidya_model::Doctor;

/// The full unfiltered record set plus load metadata.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    doctors: Vec<Doctor>,
    specialties: Vec<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Directory {
    /// Creates a directory from a loaded record set.
    ///
    /// The distinct specialty list is derived here, in order of first
    /// appearance across the records, and frozen with the data.
    pub fn new(doctors: Vec<Doctor>) -> Self {
        let specialties = distinct_specialties(&doctors);
        Self {
            doctors,
            specialties,
            loaded_at: Some(Utc::now()),
        }
    }

    /// Creates the empty directory used when the upstream load fails.
    ///
    /// `loaded_at` stays unset so health reporting can tell "loaded an
    /// empty dataset" apart from "never loaded".
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in upstream order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Distinct specialties in order of first appearance.
    ///
    /// This drives the specialty filter options offered to clients.
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    /// Returns true if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// When the dataset was loaded, if it ever was.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

fn distinct_specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut specialties = Vec::new();
    for doctor in doctors {
        for specialty in &doctor.specialties {
            if seen.insert(specialty.clone()) {
                specialties.push(specialty.clone());
            }
        }
    }
    specialties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory() {
        let directory = Directory::empty();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert!(directory.specialties().is_empty());
        assert!(directory.loaded_at().is_none());
    }

    #[test]
    fn test_loaded_directory_has_timestamp() {
        let directory = Directory::new(vec![Doctor::new("Dr. Asha Rao")]);
        assert_eq!(directory.len(), 1);
        assert!(directory.loaded_at().is_some());
    }

    #[test]
    fn test_specialties_distinct_in_first_appearance_order() {
        let directory = Directory::new(vec![
            Doctor::new("Dr. A")
                .with_specialty("Dentist")
                .with_specialty("Orthodontist"),
            Doctor::new("Dr. B").with_specialty("Cardiologist"),
            Doctor::new("Dr. C")
                .with_specialty("Dentist")
                .with_specialty("Neurologist"),
        ]);

        assert_eq!(
            directory.specialties(),
            &[
                "Dentist".to_string(),
                "Orthodontist".to_string(),
                "Cardiologist".to_string(),
                "Neurologist".to_string(),
            ]
        );
    }

    #[test]
    fn test_specialties_empty_when_records_have_none() {
        let directory = Directory::new(vec![Doctor::new("Dr. A"), Doctor::new("Dr. B")]);
        assert!(directory.specialties().is_empty());
        assert!(!directory.is_empty());
    }
}
