//! End-to-end lookups through the `ProductSource` seam.

use async_trait::async_trait;
use storefront_catalog::prelude::*;
use storefront_state::{present, LoadStatus, PageView, ProductPageState, Resolution};

/// Source that always fails, standing in for a broken data file.
struct BrokenSource;

#[async_trait(?Send)]
impl ProductSource for BrokenSource {
    async fn fetch(&self, _id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Err(CatalogError::LookupFailed("fixture unreadable".to_string()))
    }
}

#[tokio::test]
async fn known_product_loads_through_catalog() {
    let catalog = Catalog::bundled().unwrap();
    let mut page = ProductPageState::new();

    let ticket = page.request(Some("P002")).unwrap();
    let outcome = ticket.run(catalog).await;

    assert_eq!(page.resolve(outcome), Resolution::Committed);
    assert_eq!(page.status(), LoadStatus::Loaded);
    assert_eq!(page.view().unwrap().current_image_index(), 0);
}

#[tokio::test]
async fn failing_source_surfaces_generic_error() {
    let mut page = ProductPageState::new();
    let ticket = page.request(Some("P001")).unwrap();
    let outcome = ticket.run(&BrokenSource).await;
    page.resolve(outcome);

    assert_eq!(page.status(), LoadStatus::Error);
    match present(&page) {
        PageView::Alert(alert) => {
            assert_eq!(alert.message, "Error loading product data. Please try again later.");
            assert_eq!(alert.product_line, "Product ID: P001");
        }
        other => panic!("expected alert, got {other:?}"),
    }
}

#[tokio::test]
async fn out_of_order_completions_keep_latest_request() {
    let catalog = Catalog::bundled().unwrap();
    let mut page = ProductPageState::new();

    let slow = page.request(Some("P001")).unwrap();
    let fast = page.request(Some("P004")).unwrap();

    let fast_outcome = fast.run(catalog).await;
    let slow_outcome = slow.run(catalog).await;

    assert_eq!(page.resolve(fast_outcome), Resolution::Committed);
    assert_eq!(page.resolve(slow_outcome), Resolution::Discarded);
    assert_eq!(page.product().unwrap().id.as_str(), "P004");
}
