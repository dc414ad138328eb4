//! The mock catalog: bundled fixtures parsed once, queried read-only.

use crate::catalog::{Category, Deal, Product};
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const DEALS_JSON: &str = include_str!("../../data/deals.json");

#[derive(Deserialize)]
struct ProductsDocument {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CategoriesDocument {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct DealsDocument {
    deals: Vec<Deal>,
}

/// Read-only product, category and deal data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    deals: Vec<Deal>,
}

impl Catalog {
    /// Build a catalog from in-memory records.
    pub fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        deals: Vec<Deal>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("product", products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("category", categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("deal", deals.iter().map(|d| d.id.as_str()))?;
        Ok(Self {
            products,
            categories,
            deals,
        })
    }

    /// Parse the three fixture documents.
    pub fn from_json(products: &str, categories: &str, deals: &str) -> Result<Self, CatalogError> {
        let products: ProductsDocument =
            serde_json::from_str(products).map_err(|e| CatalogError::fixture("products", e))?;
        let categories: CategoriesDocument = serde_json::from_str(categories)
            .map_err(|e| CatalogError::fixture("categories", e))?;
        let deals: DealsDocument =
            serde_json::from_str(deals).map_err(|e| CatalogError::fixture("deals", e))?;

        Self::new(products.products, categories.categories, deals.deals)
    }

    /// The catalog compiled into the binary, parsed on first use.
    pub fn bundled() -> Result<&'static Catalog, CatalogError> {
        static BUNDLED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        BUNDLED
            .get_or_init(|| {
                let catalog = Catalog::from_json(PRODUCTS_JSON, CATEGORIES_JSON, DEALS_JSON);
                match &catalog {
                    Ok(c) => tracing::debug!(
                        products = c.products.len(),
                        categories = c.categories.len(),
                        deals = c.deals.len(),
                        "bundled catalog loaded"
                    ),
                    Err(e) => tracing::error!(error = %e, "bundled catalog failed to parse"),
                }
                catalog
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Look up a product by exact id.
    pub fn find_product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in fixture order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in menu order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Home page deal tiles, in display order.
    pub fn list_deals(&self) -> &[Deal] {
        &self.deals
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
