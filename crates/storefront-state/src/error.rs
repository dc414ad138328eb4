//! Product page load errors.

use storefront_catalog::ProductId;
use thiserror::Error;

/// Why a product page could not show a product.
///
/// All variants are terminal for the identifier they were raised for. The
/// `Display` text is shown to shoppers verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The route carried no identifier.
    #[error("Invalid product ID")]
    InvalidIdentifier,

    /// Well-formed identifier with no matching record.
    #[error("Product with ID {0} not found")]
    NotFound(ProductId),

    /// The lookup failed unexpectedly. The detail is for logs only.
    #[error("Error loading product data. Please try again later.")]
    LookupFailure(String),
}

impl LoadError {
    /// Whether this is the well-formed-but-unknown case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
