//! Test fixtures for listing API testing.
//!
//! Provides a predefined doctor dataset for use in tests. Dataset order is
//! load-bearing: suggestion order and unsorted listing order both follow it.

use vaidya_engine::Directory;
use vaidya_model::Doctor;

/// Builds the shared five-doctor dataset used across the integration tests.
///
/// The set is small but deliberately uneven: two specialties overlap, two
/// doctors share an experience value, and video consultation is available
/// for three of the five.
pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new("Dr. Asha Rao")
            .with_specialty("Cardiologist")
            .with_experience(13)
            .with_fee(500)
            .with_video_consult(true)
            .with_clinic("Heartline Clinic", "Chennai"),
        Doctor::new("Dr. Vikram Shetty")
            .with_specialty("Dermatologist")
            .with_experience(7)
            .with_fee(300)
            .with_clinic("SkinFirst", "Mumbai"),
        Doctor::new("Dr. Meena Iyer")
            .with_specialty("Cardiologist")
            .with_specialty("General Physician")
            .with_experience(21)
            .with_fee(800)
            .with_video_consult(true)
            .with_clinic("Iyer Care", "Bengaluru"),
        Doctor::new("Dr. Ashank Kulkarni")
            .with_specialty("Orthopaedic")
            .with_experience(9)
            .with_fee(400)
            .with_clinic("BoneWorks", "Pune"),
        Doctor::new("Dr. Farida Khan")
            .with_specialty("Dermatologist")
            .with_experience(13)
            .with_fee(250)
            .with_video_consult(true)
            .with_clinic("DermaPlus", "Delhi"),
    ]
}

/// Builds a directory over [`sample_doctors`].
pub fn sample_directory() -> Directory {
    Directory::new(sample_doctors())
}

/// Builds an empty directory, as produced when the startup fetch fails.
pub fn empty_directory() -> Directory {
    Directory::empty()
}
