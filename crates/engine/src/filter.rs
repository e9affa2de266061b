//! Committed filter state and the listing pipeline.
//!
//! [`apply`] runs the four pipeline steps in a fixed order: name search,
//! consultation mode, specialty selection, then sort. Each step is skipped
//! when its parameter is unset, and both sorts are stable, so an all-default
//! state returns the dataset in upstream order.

use serde::{Deserialize, Serialize};

use vaidya_model::{ConsultationMode, Doctor, SortKey};

/// The committed listing parameters.
///
/// This is exactly the state that round-trips through the URL query string:
/// the committed search term (not the keystroke-level draft), the
/// consultation mode, the specialty selection, and the sort key. The
/// default value means "no filtering, upstream order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Committed name search term. Empty means no search filtering.
    pub search_term: String,

    /// Consultation mode filter. `None` means not selected.
    pub consultation_mode: Option<ConsultationMode>,

    /// Selected specialties in toggle order. Empty means no specialty
    /// filtering. Matching is OR across the selection.
    pub specialties: Vec<String>,

    /// Sort key. `None` preserves the order the filter steps produced.
    pub sort_by: Option<SortKey>,
}

impl FilterState {
    /// Creates the all-default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the committed search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Sets the consultation mode.
    pub fn with_mode(mut self, mode: ConsultationMode) -> Self {
        self.consultation_mode = Some(mode);
        self
    }

    /// Adds a specialty to the selection.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialties.push(specialty.into());
        self
    }

    /// Sets the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// Adds the specialty if absent, removes every occurrence if present.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if self.specialties.iter().any(|s| s == specialty) {
            self.specialties.retain(|s| s != specialty);
        } else {
            self.specialties.push(specialty.to_string());
        }
    }

    /// Returns true if no parameter differs from its default.
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.consultation_mode.is_none()
            && self.specialties.is_empty()
            && self.sort_by.is_none()
    }
}

/// Runs the listing pipeline over the dataset.
///
/// Filtering never reorders: records keep their upstream relative order
/// through the filter steps, and the sorts are stable, so records with
/// equal keys also keep it. Calling this twice with the same inputs yields
/// the identical ordered output.
pub fn apply<'a>(doctors: &'a [Doctor], state: &FilterState) -> Vec<&'a Doctor> {
    let mut results: Vec<&Doctor> = doctors.iter().collect();

    if !state.search_term.is_empty() {
        results.retain(|d| d.name_contains(&state.search_term));
    }

    // In-clinic narrows nothing: every doctor consults in clinic, so only
    // the video filter excludes records.
    if state.consultation_mode == Some(ConsultationMode::VideoConsult) {
        results.retain(|d| d.video_consult_available);
    }

    if !state.specialties.is_empty() {
        results.retain(|d| d.has_any_specialty(&state.specialties));
    }

    match state.sort_by {
        Some(SortKey::Fees) => results.sort_by_key(|d| d.consultation_fee),
        Some(SortKey::Experience) => {
            results.sort_by(|a, b| b.years_of_experience.cmp(&a.years_of_experience))
        }
        None => {}
    }

    results
}
