//! Listing response envelope.

use serde::{Deserialize, Serialize};

use vaidya_model::Doctor;

/// A link in a listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLink {
    /// The relation type (currently only `self`).
    pub relation: String,
    /// The URL.
    pub url: String,
}

impl ListingLink {
    /// Creates a new link.
    pub fn new(relation: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            url: url.into(),
        }
    }

    /// Creates a self link.
    ///
    /// The self link always carries the canonical re-encoding of the
    /// decoded filter state, not the query string the client sent, so
    /// clients can bookmark and share it.
    pub fn self_link(url: impl Into<String>) -> Self {
        Self::new("self", url)
    }
}

/// The listing endpoint's response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Number of records after filtering.
    pub total: usize,

    /// Links for this listing; the `self` link is always present.
    pub link: Vec<ListingLink>,

    /// The filtered, possibly sorted, records.
    pub doctors: Vec<Doctor>,
}

impl ListingResponse {
    /// Builds a response from the filtered records and their canonical URL.
    pub fn new(doctors: Vec<Doctor>, self_url: impl Into<String>) -> Self {
        Self {
            total: doctors.len(),
            link: vec![ListingLink::self_link(self_url)],
            doctors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_link_relation() {
        let link = ListingLink::self_link("http://localhost:8080/doctors");
        assert_eq!(link.relation, "self");
        assert_eq!(link.url, "http://localhost:8080/doctors");
    }

    #[test]
    fn test_response_counts_records() {
        let response = ListingResponse::new(
            vec![Doctor::new("Dr. Asha Rao"), Doctor::new("Dr. Meena Iyer")],
            "http://localhost:8080/doctors",
        );
        assert_eq!(response.total, 2);
        assert_eq!(response.link.len(), 1);
    }

    #[test]
    fn test_response_serializes_camel_case_records() {
        let response = ListingResponse::new(
            vec![Doctor::new("Dr. Asha Rao").with_fee(500)],
            "http://localhost:8080/doctors",
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["link"][0]["relation"], "self");
        assert_eq!(value["doctors"][0]["consultationFee"], 500);
    }
}
