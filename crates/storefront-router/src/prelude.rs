//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use storefront_router::prelude::*;
//! ```

pub use crate::{
    path, paths, use_location, use_navigate, use_params_map, AppRoute, Route, RouteEntry,
    RouteMeta, RouteRegistry, Router, Routes,
};
