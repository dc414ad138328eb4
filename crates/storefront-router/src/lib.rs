//! Routing for the storefront.
//!
//! ```text
//! /                      -> HomePage
//! /product/:productId    -> ProductPage
//! anything else          -> NotFound
//! ```
//!
//! [`AppRoute`] resolves paths and builds links without a rendering
//! environment; the Leptos router components are re-exported for the
//! application shell.

pub mod prelude;
mod route;

pub use route::*;

// Re-export leptos_router essentials
pub use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate, use_params_map},
    path,
};
