//! # vaidya-model - Doctor Directory Data Model
//!
//! This crate contains the strongly-typed representations of the records and
//! parameter vocabularies used across the Vaidya Doctor Directory Server. It
//! is deliberately small: one record type, two closed parameter vocabularies,
//! and the lenient deserialization helpers needed to survive the upstream
//! dataset's irregularities.
//!
//! ## Record Model
//!
//! The central type is [`Doctor`], deserialized from the upstream JSON array
//! with camelCase field names:
//!
//! | Field | JSON name | Notes |
//! |-------|-----------|-------|
//! | `name` | `name` | display label and de-facto identifier |
//! | `specialties` | `specialties` | zero or more, ordered |
//! | `years_of_experience` | `yearsOfExperience` | non-negative |
//! | `consultation_fee` | `consultationFee` | non-negative |
//! | `video_consult_available` | `videoConsultAvailable` | |
//! | `clinic_name` | `clinicName` | display only |
//! | `city` | `city` | display only |
//!
//! The upstream feed is third-party data over which we have no schema
//! control, so parsing is tolerant: every field defaults when absent, and a
//! present-but-mistyped value degrades to that same default. `specialties`
//! accepts a bare string or `null` in place of an array, the numeric fields
//! accept numeric strings, and the video flag accepts `"true"`/`"false"` or
//! 0/1. A malformed field becomes a gap in its record, never a failed load.
//!
//! ## Parameter Vocabularies
//!
//! [`ConsultationMode`] and [`SortKey`] are the closed vocabularies that
//! appear in listing URLs (`consultationMode=video-consult`,
//! `sortBy=fees`). Both expose `as_str` / `Display` / `FromStr`;
//! unrecognized wire codes fail parsing, which callers treat as the
//! parameter being unset.

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod doctor;
pub mod serde_helpers;
pub mod types;

// Re-export commonly used types
pub use doctor::Doctor;
pub use types::{ConsultationMode, SortKey};
