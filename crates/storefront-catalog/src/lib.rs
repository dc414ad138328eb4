//! Catalog types and bundled mock data for the storefront.
//!
//! - **Catalog**: products, categories and home page deal tiles
//! - **Money**: integer-cent prices with dollar formatting
//! - **Source**: the async lookup seam used by the product page
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let product = catalog.find_product_by_id(&ProductId::new("P001")).unwrap();
//! assert_eq!(product.images.len(), 3);
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod source;

pub use catalog::{Catalog, Category, Deal, Product, Subcategory};
pub use error::CatalogError;
pub use ids::*;
pub use money::Money;
pub use source::ProductSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        Catalog, Category, Deal, Product, SpecScalar, SpecValue, Specification, Specifications,
        Subcategory,
    };
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::source::ProductSource;
}
