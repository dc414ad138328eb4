//! Mapping from product page state to what the page shows.
//!
//! Components render a [`PageView`] and never inspect [`ProductPageState`]
//! directly, which keeps every user-visible string testable here.

use crate::product_page::{LoadState, ProductPageState, ProductTab, ProductView};

pub const ALERT_TITLE: &str = "Error Loading Product";
pub const RETRY_LABEL: &str = "Retry Loading";

/// Top-level rendering branch.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Busy indicator only.
    Busy,
    Alert(AlertView),
    Content(ContentView),
}

/// Inline error region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub title: &'static str,
    pub message: String,
    /// "Product ID: ..." line.
    pub product_line: String,
    pub retry_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: ProductTab,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

/// Body of the selected tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBody {
    Overview {
        description: String,
        category: String,
        stock: String,
        in_stock: bool,
    },
    Specifications(Vec<SpecRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionView {
    pub text: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
}

/// Everything shown for a loaded product.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub name: String,
    pub price: String,
    pub main_image: Option<ImageView>,
    /// Empty unless the product has more than one image.
    pub thumbnails: Vec<ThumbnailView>,
    pub tabs: Vec<TabView>,
    pub body: TabBody,
    pub description: DescriptionView,
}

/// Present the page for its current state.
pub fn present(page: &ProductPageState) -> PageView {
    match page.state() {
        LoadState::Loading => PageView::Busy,
        LoadState::Failed(error) => PageView::Alert(AlertView {
            title: ALERT_TITLE,
            message: error.to_string(),
            product_line: format!(
                "Product ID: {}",
                page.requested_id().map(|id| id.as_str()).unwrap_or_default()
            ),
            retry_label: RETRY_LABEL,
        }),
        LoadState::Loaded(view) => PageView::Content(present_content(view)),
    }
}

fn present_content(view: &ProductView) -> ContentView {
    let product = view.product();
    let gallery = view.gallery();

    let main_image = view.current_image().map(|src| ImageView {
        src: src.to_string(),
        alt: format!("{} - Image {}", product.name, gallery.position()),
    });

    let thumbnails = if gallery.has_thumbnails() {
        product
            .images
            .iter()
            .enumerate()
            .map(|(index, src)| ThumbnailView {
                index,
                src: src.clone(),
                alt: format!("Thumbnail {}", index + 1),
                selected: index == gallery.index(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let tabs = ProductTab::ALL
        .iter()
        .map(|tab| TabView {
            tab: *tab,
            label: tab.label(),
            selected: *tab == view.selected_tab(),
        })
        .collect();

    let body = match view.selected_tab() {
        ProductTab::Overview => TabBody::Overview {
            description: product.description.clone(),
            category: product.category_label(),
            stock: product.stock_label(),
            in_stock: product.is_in_stock(),
        },
        ProductTab::Specifications => TabBody::Specifications(
            product
                .specifications
                .iter()
                .map(|spec| SpecRow {
                    label: spec.label(),
                    value: spec.display_value(),
                })
                .collect(),
        ),
    };

    let expanded = view.description_expanded();
    ContentView {
        name: product.name.clone(),
        price: product.price_display(),
        main_image,
        thumbnails,
        tabs,
        body,
        description: DescriptionView {
            text: product.description.clone(),
            expanded,
            toggle_label: if expanded {
                "Collapse description"
            } else {
                "Expand description"
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_page::LookupOutcome;
    use storefront_catalog::{Catalog, CatalogError, ProductId};

    fn loaded(id: &str) -> ProductPageState {
        let mut page = ProductPageState::new();
        let ticket = page.request(Some(id)).unwrap();
        let result = Ok(Catalog::bundled()
            .unwrap()
            .find_product_by_id(&ProductId::new(id))
            .cloned());
        page.resolve(LookupOutcome { ticket, result });
        page
    }

    fn content(page: &ProductPageState) -> ContentView {
        match present(page) {
            PageView::Content(c) => c,
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_shows_busy_only() {
        let mut page = ProductPageState::new();
        page.request(Some("P001"));
        assert_eq!(present(&page), PageView::Busy);
    }

    #[test]
    fn test_not_found_alert() {
        let page = loaded("invalid-id");
        match present(&page) {
            PageView::Alert(alert) => {
                assert_eq!(alert.title, "Error Loading Product");
                assert_eq!(alert.message, "Product with ID invalid-id not found");
                assert_eq!(alert.product_line, "Product ID: invalid-id");
                assert_eq!(alert.retry_label, "Retry Loading");
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_id_alert_has_no_content() {
        let mut page = ProductPageState::new();
        page.request(Some(""));
        match present(&page) {
            PageView::Alert(alert) => {
                assert_eq!(alert.message, "Invalid product ID");
                assert_eq!(alert.product_line, "Product ID: ");
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_failure_alert() {
        let mut page = ProductPageState::new();
        let ticket = page.request(Some("P001")).unwrap();
        page.resolve(LookupOutcome {
            ticket,
            result: Err(CatalogError::LookupFailed("boom".into())),
        });
        match present(&page) {
            PageView::Alert(alert) => assert!(alert.message.starts_with("Error loading product data")),
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_content_overview() {
        let page = loaded("P001");
        let c = content(&page);

        assert_eq!(c.name, "UltraBook Pro 14");
        assert_eq!(c.price, "$1299.99");
        assert_eq!(
            c.main_image.unwrap().alt,
            "UltraBook Pro 14 - Image 1"
        );
        assert_eq!(c.thumbnails.len(), 3);
        assert!(c.thumbnails[0].selected);
        assert_eq!(c.thumbnails[2].alt, "Thumbnail 3");

        let selected: Vec<&str> = c.tabs.iter().filter(|t| t.selected).map(|t| t.label).collect();
        assert_eq!(selected, vec!["Overview"]);

        match c.body {
            TabBody::Overview { category, stock, in_stock, .. } => {
                assert_eq!(category, "Category: Electronics > Laptops");
                assert_eq!(stock, "In Stock (15 units)");
                assert!(in_stock);
            }
            other => panic!("expected overview, got {other:?}"),
        }

        assert!(!c.description.expanded);
        assert_eq!(c.description.toggle_label, "Expand description");
    }

    #[test]
    fn test_specifications_tab_rows() {
        let mut page = loaded("P001");
        page.select_tab(ProductTab::Specifications);
        let c = content(&page);

        match c.body {
            TabBody::Specifications(rows) => {
                assert!(rows.contains(&SpecRow {
                    label: "BATTERY LIFE".to_string(),
                    value: "10h".to_string()
                }));
                assert!(rows.contains(&SpecRow {
                    label: "PORTS".to_string(),
                    value: "USB-C, HDMI".to_string()
                }));
            }
            other => panic!("expected specifications, got {other:?}"),
        }
    }

    #[test]
    fn test_gallery_moves_main_image_and_selection() {
        let mut page = loaded("P001");
        page.next_image();
        let c = content(&page);
        assert_eq!(c.main_image.unwrap().alt, "UltraBook Pro 14 - Image 2");
        assert!(c.thumbnails[1].selected);
        assert!(!c.thumbnails[0].selected);
    }

    #[test]
    fn test_single_image_has_no_thumbnails() {
        let page = loaded("P003");
        let c = content(&page);
        assert!(c.main_image.is_some());
        assert!(c.thumbnails.is_empty());
        match c.body {
            TabBody::Overview { stock, in_stock, .. } => {
                assert_eq!(stock, "Out of Stock");
                assert!(!in_stock);
            }
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn test_collapsed_description_keeps_text() {
        let mut page = loaded("P001");
        let collapsed = content(&page).description;
        page.toggle_description();
        let expanded = content(&page).description;

        assert_eq!(collapsed.text, expanded.text);
        assert!(expanded.expanded);
        assert_eq!(expanded.toggle_label, "Collapse description");
    }
}
