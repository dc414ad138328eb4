//! Rendering-free view state for the storefront screens.
//!
//! Each screen owns one of these values and feeds it UI events; nothing here
//! depends on a DOM, so every transition is unit-testable.
//!
//! - **Product page**: load state machine, gallery, tabs, description toggle
//! - **Presentation**: maps product page state to what the page shows
//! - **Navbar**: single-value menu state with pure transitions
//! - **Deals**: deal card image with one-shot fallback

pub mod deals;
pub mod error;
pub mod gallery;
pub mod navbar;
pub mod presentation;
pub mod product_page;

pub use deals::DealImage;
pub use error::LoadError;
pub use gallery::Gallery;
pub use navbar::{MenuEvent, MenuState, Viewport, DESKTOP_BREAKPOINT_PX};
pub use presentation::{present, PageView};
pub use product_page::{
    LoadState, LoadStatus, LookupOutcome, LookupTicket, ProductPageState, ProductTab,
    ProductView, Resolution,
};
