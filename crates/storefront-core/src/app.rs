//! Application setup.

use storefront_catalog::Catalog;
use storefront_router::{AppRoute, RouteRegistry};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// Everything the application shell needs before it mounts.
///
/// # Example
///
/// ```rust,ignore
/// let app = StorefrontApp::from_toml(include_str!("../Storefront.toml"))?;
/// let catalog = app.catalog();
/// ```
#[derive(Debug, Clone)]
pub struct StorefrontApp {
    config: StorefrontConfig,
    routes: RouteRegistry,
    catalog: &'static Catalog,
}

impl StorefrontApp {
    /// Build the app with the storefront route table and bundled catalog.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = Catalog::bundled()?;
        Ok(Self {
            config,
            routes: RouteRegistry::storefront(),
            catalog,
        })
    }

    /// Build from a TOML configuration document.
    pub fn from_toml(source: &str) -> Result<Self, StorefrontError> {
        Self::new(StorefrontConfig::from_toml_str(source)?)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Document title for a path: the route's own title, else the default.
    ///
    /// Paths that resolve to [`AppRoute::NotFound`] always get the default.
    pub fn title_for(&self, path: &str) -> String {
        let route = AppRoute::resolve(path);
        if route == AppRoute::NotFound {
            return self.config.default_title.clone();
        }
        self.routes
            .find(&route.href())
            .and_then(|route| route.meta.title.as_deref())
            .map(|title| format!("{} | {}", title, self.config.default_title))
            .unwrap_or_else(|| self.config.default_title.clone())
    }
}
