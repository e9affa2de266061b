//! Suggestion query extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

/// Axum extractor for the suggestion endpoint's `q` parameter.
///
/// Follows the same tolerance rules as the listing extractor: a missing `q`
/// is the empty query (which suggests nothing), the first occurrence wins,
/// and everything else in the query string is ignored.
#[derive(Debug, Clone, Default)]
pub struct SuggestQuery {
    /// The raw in-progress search text.
    pub q: String,
}

impl SuggestQuery {
    /// Decodes a raw query string (no leading `?` required).
    pub fn from_query(query: &str) -> Self {
        let q = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        Self { q }
    }
}

impl<S> FromRequestParts<S> for SuggestQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_reads_q() {
        assert_eq!(SuggestQuery::from_query("q=asha").q, "asha");
        assert_eq!(SuggestQuery::from_query("q=Dr.+Asha").q, "Dr. Asha");
    }

    #[test]
    fn test_from_query_missing_q_is_empty() {
        assert_eq!(SuggestQuery::from_query("").q, "");
        assert_eq!(SuggestQuery::from_query("query=asha").q, "");
    }

    #[test]
    fn test_from_query_first_occurrence_wins() {
        assert_eq!(SuggestQuery::from_query("q=first&q=second").q, "first");
    }
}
