//! URL query-string codec for the committed filter state.
//!
//! The query string is the only persistence the listing has: reloading or
//! sharing a URL must reproduce the same view. [`encode`] emits the
//! canonical form; [`decode`] accepts anything, mapping whatever it cannot
//! read to defaults. There is deliberately no error type here.
//!
//! Canonical form: parameters appear only when they differ from the
//! default, in the fixed order `search`, `consultationMode`, `specialties`
//! (comma-joined), `sortBy`, percent-encoded as
//! `application/x-www-form-urlencoded`.

use url::form_urlencoded;

use crate::filter::FilterState;

/// Encodes a filter state into its canonical query string.
///
/// The all-default state encodes to the empty string.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_term.is_empty() {
        serializer.append_pair("search", &state.search_term);
    }
    if let Some(mode) = state.consultation_mode {
        serializer.append_pair("consultationMode", mode.as_str());
    }
    if !state.specialties.is_empty() {
        serializer.append_pair("specialties", &state.specialties.join(","));
    }
    if let Some(sort) = state.sort_by {
        serializer.append_pair("sortBy", sort.as_str());
    }

    serializer.finish()
}

/// Decodes a query string into a filter state.
///
/// A leading `?` is tolerated. Absent parameters take their defaults, the
/// first occurrence of a duplicated parameter wins, unknown parameters are
/// ignored, and an unrecognized `consultationMode` or `sortBy` code leaves
/// that parameter unset. In the comma-joined specialty list, empty segments
/// are dropped and a repeated name keeps its first position, so the decoded
/// selection is always duplicate-free.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut mode: Option<String> = None;
    let mut specialties: Option<String> = None;
    let mut sort: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "search" if search.is_none() => search = Some(value.into_owned()),
            "consultationMode" if mode.is_none() => mode = Some(value.into_owned()),
            "specialties" if specialties.is_none() => specialties = Some(value.into_owned()),
            "sortBy" if sort.is_none() => sort = Some(value.into_owned()),
            _ => {}
        }
    }

    let mut state = FilterState::default();
    if let Some(search) = search {
        state.search_term = search;
    }
    if let Some(mode) = mode {
        state.consultation_mode = mode.parse().ok();
    }
    if let Some(specialties) = specialties {
        for segment in specialties.split(',').filter(|s| !s.is_empty()) {
            if !state.specialties.iter().any(|s| s == segment) {
                state.specialties.push(segment.to_string());
            }
        }
    }
    if let Some(sort) = sort {
        state.sort_by = sort.parse().ok();
    }
    state
}
