//! Product page load/view state machine.
//!
//! ```text
//!            request(id)             resolve(ticket, Ok(Some))
//!   ──────────────────▶ Loading ─────────────────────────────▶ Loaded
//!                          │  resolve(ticket, Ok(None))
//!                          ├─────────────────────────────────▶ NotFound
//!                          │  resolve(ticket, Err)
//!                          └─────────────────────────────────▶ Error
//! ```
//!
//! A missing or empty identifier goes straight to `Error` without issuing a
//! lookup. Any other identifier is opaque and is looked up exactly as given.
//! Every lookup carries a [`LookupTicket`]; completions whose ticket no longer
//! matches the active request are discarded, so the page always reflects the
//! most recently requested identifier.

use storefront_catalog::{CatalogError, Product, ProductId, ProductSource};

use crate::error::LoadError;
use crate::gallery::Gallery;

/// Tabs on the product detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductTab {
    #[default]
    Overview,
    Specifications,
}

impl ProductTab {
    pub const ALL: [ProductTab; 2] = [ProductTab::Overview, ProductTab::Specifications];

    pub fn label(&self) -> &'static str {
        match self {
            ProductTab::Overview => "Overview",
            ProductTab::Specifications => "Specifications",
        }
    }
}

/// Coarse page status, one per rendering branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    Loading,
    Loaded,
    NotFound,
    Error,
}

/// View state of a loaded product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    product: Product,
    gallery: Gallery,
    tab: ProductTab,
    description_expanded: bool,
}

impl ProductView {
    /// Fresh view: first image, overview tab, description collapsed.
    pub fn new(product: Product) -> Self {
        let gallery = Gallery::new(product.images.len());
        Self {
            product,
            gallery,
            tab: ProductTab::Overview,
            description_expanded: false,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn current_image_index(&self) -> usize {
        self.gallery.index()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.product
            .images
            .get(self.gallery.index())
            .map(String::as_str)
    }

    pub fn selected_tab(&self) -> ProductTab {
        self.tab
    }

    pub fn description_expanded(&self) -> bool {
        self.description_expanded
    }

    pub fn next_image(&mut self) {
        self.gallery.next();
    }

    pub fn previous_image(&mut self) {
        self.gallery.previous();
    }

    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        self.gallery.select(index)
    }

    pub fn select_tab(&mut self, tab: ProductTab) {
        self.tab = tab;
    }

    pub fn toggle_description(&mut self) {
        self.description_expanded = !self.description_expanded;
    }
}

/// Where the page currently is in its load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(ProductView),
    Failed(LoadError),
}

/// A pending lookup, tagged with the request it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    product_id: ProductId,
    generation: u64,
}

impl LookupTicket {
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Run the lookup against a source. The ticket travels with the result.
    pub async fn run<S: ProductSource + ?Sized>(self, source: &S) -> LookupOutcome {
        let result = source.fetch(&self.product_id).await;
        LookupOutcome {
            ticket: self,
            result,
        }
    }
}

/// A completed lookup, ready to be offered to [`ProductPageState::resolve`].
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub ticket: LookupTicket,
    pub result: Result<Option<Product>, CatalogError>,
}

/// What `resolve` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Committed,
    Discarded,
}

/// Everything the product page owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPageState {
    requested: Option<ProductId>,
    generation: u64,
    state: LoadState,
}

impl Default for ProductPageState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductPageState {
    /// A page that has not been given an identifier yet shows the busy state.
    pub fn new() -> Self {
        Self {
            requested: None,
            generation: 0,
            state: LoadState::Loading,
        }
    }

    /// Start loading `id`, returning the ticket for the lookup to run.
    ///
    /// Returns `None` when no lookup is needed: the identifier is missing or
    /// empty (the page moves to `Error`) or it is already the active request.
    pub fn request(&mut self, id: Option<&str>) -> Option<LookupTicket> {
        let id = ProductId::new(id.unwrap_or_default());
        if self.requested.as_ref() == Some(&id) {
            return None;
        }

        self.generation += 1;
        self.requested = Some(id.clone());

        if id.is_empty() {
            tracing::warn!("product page opened without an identifier");
            self.state = LoadState::Failed(LoadError::InvalidIdentifier);
            return None;
        }

        tracing::debug!(product_id = %id, generation = self.generation, "product lookup issued");
        self.state = LoadState::Loading;
        Some(LookupTicket {
            product_id: id,
            generation: self.generation,
        })
    }

    /// Commit a lookup result if its ticket still matches the active request.
    pub fn resolve(&mut self, outcome: LookupOutcome) -> Resolution {
        let LookupOutcome { ticket, result } = outcome;

        let current = ticket.generation == self.generation
            && self.requested.as_ref() == Some(&ticket.product_id)
            && self.state == LoadState::Loading;
        if !current {
            tracing::debug!(
                product_id = %ticket.product_id,
                generation = ticket.generation,
                active_generation = self.generation,
                "stale product lookup discarded"
            );
            return Resolution::Discarded;
        }

        self.state = match result {
            Ok(Some(product)) => {
                tracing::debug!(product_id = %product.id, "product loaded");
                LoadState::Loaded(ProductView::new(product))
            }
            Ok(None) => {
                tracing::info!(product_id = %ticket.product_id, "product not found");
                LoadState::Failed(LoadError::NotFound(ticket.product_id))
            }
            Err(e) => {
                tracing::error!(product_id = %ticket.product_id, error = %e, "product lookup failed");
                LoadState::Failed(LoadError::LookupFailure(e.to_string()))
            }
        };
        Resolution::Committed
    }

    pub fn status(&self) -> LoadStatus {
        match &self.state {
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Loaded(_) => LoadStatus::Loaded,
            LoadState::Failed(e) if e.is_not_found() => LoadStatus::NotFound,
            LoadState::Failed(_) => LoadStatus::Error,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The identifier most recently requested, as given.
    pub fn requested_id(&self) -> Option<&ProductId> {
        self.requested.as_ref()
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&ProductView> {
        match &self.state {
            LoadState::Loaded(view) => Some(view),
            _ => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut ProductView> {
        match &mut self.state {
            LoadState::Loaded(view) => Some(view),
            _ => None,
        }
    }

    /// Present only when loaded.
    pub fn product(&self) -> Option<&Product> {
        self.view().map(ProductView::product)
    }

    pub fn next_image(&mut self) {
        if let Some(view) = self.view_mut() {
            view.next_image();
        }
    }

    pub fn previous_image(&mut self) {
        if let Some(view) = self.view_mut() {
            view.previous_image();
        }
    }

    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        self.view_mut()
            .map(|view| view.select_thumbnail(index))
            .unwrap_or(false)
    }

    pub fn select_tab(&mut self, tab: ProductTab) {
        if let Some(view) = self.view_mut() {
            view.select_tab(tab);
        }
    }

    pub fn toggle_description(&mut self) {
        if let Some(view) = self.view_mut() {
            view.toggle_description();
        }
    }
}
