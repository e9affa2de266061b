//! Listing parameter vocabularies.
//!
//! This module defines the closed vocabularies that appear in listing URLs:
//! the consultation mode filter and the sort key. Both are optional in a
//! listing query; absence means the filter or ordering is not applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Consultation mode filter values.
///
/// Wire codes appear in the `consultationMode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationMode {
    /// Only doctors available for video consultation.
    VideoConsult,
    /// In-clinic consultation. Selecting this narrows nothing: every doctor
    /// is assumed to consult in clinic, so the mode is recorded in the URL
    /// but excludes no records.
    InClinic,
}

impl ConsultationMode {
    /// Returns the wire code for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "video-consult",
            ConsultationMode::InClinic => "in-clinic",
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsultationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video-consult" => Ok(ConsultationMode::VideoConsult),
            "in-clinic" => Ok(ConsultationMode::InClinic),
            _ => Err(format!("unknown consultation mode: {}", s)),
        }
    }
}

/// Sort key values for the listing.
///
/// Wire codes appear in the `sortBy` query parameter. Each key carries a
/// fixed direction: fees sort ascending (cheapest first), experience sorts
/// descending (most experienced first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by consultation fee.
    Fees,
    /// Descending by years of experience.
    Experience,
}

impl SortKey {
    /// Returns the wire code for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fees" => Ok(SortKey::Fees),
            "experience" => Ok(SortKey::Experience),
            _ => Err(format!("unknown sort key: {}", s)),
        }
    }
}
