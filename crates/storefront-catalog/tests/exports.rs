//! Downstream crates name catalog types from the crate root.

use storefront_catalog::{Catalog, Category, Deal, Money, Product, ProductId, ProductSource};

#[test]
fn root_types_cover_catalog_listings() {
    let catalog: &Catalog = Catalog::bundled().unwrap();

    let products: &[Product] = catalog.list_products();
    let categories: &[Category] = catalog.list_categories();
    let deals: &[Deal] = catalog.list_deals();

    assert!(!products.is_empty());
    assert_eq!(categories.len(), 3);
    assert_eq!(deals.len(), 4);
    assert!(products.iter().all(|p| p.price > Money::new(0)));
}

#[tokio::test]
async fn root_source_trait_resolves_products() {
    let catalog = Catalog::bundled().unwrap();
    let product: Option<Product> = catalog.fetch(&ProductId::new("P001")).await.unwrap();
    assert_eq!(product.map(|p| p.id), Some(ProductId::new("P001")));
}
