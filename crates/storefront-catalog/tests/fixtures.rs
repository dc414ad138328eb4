//! Sanity checks over the bundled fixture data.

use storefront_catalog::prelude::*;

#[test]
fn every_product_has_non_empty_labels() {
    let catalog = Catalog::bundled().unwrap();
    for product in catalog.list_products() {
        assert!(!product.id.is_empty(), "empty id in fixture");
        assert!(!product.name.is_empty(), "{} has no name", product.id);
        assert!(!product.category.is_empty(), "{} has no category", product.id);
        assert!(!product.subcategory.is_empty(), "{} has no subcategory", product.id);
    }
}

#[test]
fn product_categories_exist_in_menu() {
    let catalog = Catalog::bundled().unwrap();
    let menu: Vec<&str> = catalog
        .list_categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    for product in catalog.list_products() {
        assert!(
            menu.contains(&product.category.as_str()),
            "{} uses unknown category {}",
            product.id,
            product.category
        );
    }
}

#[test]
fn reference_product_matches_documented_shape() {
    let catalog = Catalog::bundled().unwrap();
    let p001 = catalog.find_product_by_id(&ProductId::new("P001")).unwrap();

    assert_eq!(p001.images.len(), 3);
    assert_eq!(
        p001.specifications.get("battery_life").map(ToString::to_string),
        Some("10h".to_string())
    );
    assert_eq!(
        p001.specifications.get("ports").map(ToString::to_string),
        Some("USB-C, HDMI".to_string())
    );
}

#[test]
fn deal_fallbacks_are_distinct_per_category() {
    let catalog = Catalog::bundled().unwrap();
    let mut fallbacks: Vec<String> = catalog.list_deals().iter().map(Deal::fallback_image).collect();
    let total = fallbacks.len();
    fallbacks.sort();
    fallbacks.dedup();
    assert_eq!(fallbacks.len(), total);

    for deal in catalog.list_deals() {
        assert_ne!(deal.image, deal.fallback_image());
    }
}
