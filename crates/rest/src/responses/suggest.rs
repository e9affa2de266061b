//! Suggestion response envelope.

use serde::{Deserialize, Serialize};

/// The suggestion endpoint's response body.
///
/// Suggestions are doctor names, at most
/// [`vaidya_engine::MAX_SUGGESTIONS`] of them, in dataset order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Number of suggestions returned.
    pub total: usize,

    /// Matching doctor names.
    pub suggestions: Vec<String>,
}

impl SuggestResponse {
    /// Builds a response from the matched names.
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            total: suggestions.len(),
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_match() {
        let response = SuggestResponse::new(vec!["Dr. Asha Rao".to_string()]);
        assert_eq!(response.total, 1);

        let empty = SuggestResponse::new(Vec::new());
        assert_eq!(empty.total, 0);
        assert!(empty.suggestions.is_empty());
    }
}
