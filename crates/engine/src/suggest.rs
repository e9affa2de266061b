//! Name suggestions for the in-progress search text.

use vaidya_model::Doctor;

/// Maximum number of suggestions offered for any query.
pub const MAX_SUGGESTIONS: usize = 3;

/// Returns up to [`MAX_SUGGESTIONS`] doctors whose name contains `query`,
/// ignoring case, in dataset order.
///
/// Suggestions key off the raw in-progress text, not the committed search
/// term, and are recomputed fresh on every keystroke. An empty query
/// produces no suggestions.
pub fn suggest<'a>(doctors: &'a [Doctor], query: &str) -> Vec<&'a Doctor> {
    if query.is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|d| d.name_contains(query))
        .take(MAX_SUGGESTIONS)
        .collect()
}
