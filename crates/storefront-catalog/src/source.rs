//! Asynchronous product lookup.
//!
//! The product page awaits a [`ProductSource`] rather than reading the catalog
//! directly, so the browser build can insert an artificial delay and tests can
//! inject failures.

use async_trait::async_trait;

use crate::catalog::{Catalog, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Something that can resolve a product id, possibly after a suspension.
///
/// `Ok(None)` means the id is well formed but unknown; `Err` is reserved for
/// unexpected failures.
#[async_trait(?Send)]
pub trait ProductSource {
    async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;
}

#[async_trait(?Send)]
impl ProductSource for Catalog {
    async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.find_product_by_id(id).cloned())
    }
}

#[async_trait(?Send)]
impl<T: ProductSource + ?Sized> ProductSource for &T {
    async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).fetch(id).await
    }
}

#[async_trait(?Send)]
impl<T: ProductSource + ?Sized> ProductSource for std::rc::Rc<T> {
    async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).fetch(id).await
    }
}
