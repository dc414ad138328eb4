//! Catalog module.
//!
//! Contains products, categories, deal tiles and the mock store holding them.

mod category;
mod deal;
mod product;
mod store;

pub use category::{Category, Subcategory};
pub use deal::{Deal, FALLBACK_IMAGE_DIR};
pub use product::{Product, SpecScalar, SpecValue, Specification, Specifications};
pub use store::Catalog;
