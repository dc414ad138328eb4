//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or querying the mock catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A bundled fixture document failed to parse.
    #[error("Invalid {fixture} fixture: {message}")]
    InvalidFixture {
        fixture: &'static str,
        message: String,
    },

    /// Two records in one fixture share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The lookup itself failed (as opposed to finding nothing).
    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

impl CatalogError {
    pub(crate) fn fixture(fixture: &'static str, err: serde_json::Error) -> Self {
        CatalogError::InvalidFixture {
            fixture,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateId {
            kind: "product",
            id: "P001".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate product id: P001");

        let err = CatalogError::LookupFailed("boom".to_string());
        assert!(err.to_string().contains("boom"));
    }
}
