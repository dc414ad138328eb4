//! Storefront route table.

/// Route patterns as constants.
pub mod paths {
    pub const HOME: &str = "/";
    pub const PRODUCT: &str = "/product/:productId";
    /// Name of the product identifier parameter.
    pub const PRODUCT_PARAM: &str = "productId";
}

/// A resolved location in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Product { product_id: String },
    NotFound,
}

impl AppRoute {
    /// Resolve a URL path (query and fragment are ignored).
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["product", id] => AppRoute::Product {
                product_id: (*id).to_string(),
            },
            _ => AppRoute::NotFound,
        }
    }

    /// Path for this route. `NotFound` has no canonical path and links home.
    pub fn href(&self) -> String {
        match self {
            AppRoute::Home | AppRoute::NotFound => paths::HOME.to_string(),
            AppRoute::Product { product_id } => format!("/product/{}", product_id),
        }
    }
}

/// Metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Document title while the route is active.
    pub title: Option<String>,
}

/// One entry in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Pattern, e.g. `/product/:productId`.
    pub pattern: String,
    pub meta: RouteMeta,
}

impl RouteEntry {
    /// Whether `path` matches this entry's pattern segment-for-segment.
    pub fn matches(&self, path: &str) -> bool {
        let pattern: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let path: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        pattern.len() == path.len()
            && pattern
                .iter()
                .zip(&path)
                .all(|(p, s)| p.starts_with(':') || p == s)
    }
}

/// Ordered list of known routes.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteEntry>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront's own routes.
    pub fn storefront() -> Self {
        let mut registry = Self::new();
        registry.register_with_meta(
            paths::HOME,
            RouteMeta {
                title: Some("Featured Deals".to_string()),
            },
        );
        registry.register(paths::PRODUCT);
        registry
    }

    /// Register a route. A second registration of the same pattern replaces the first.
    pub fn register(&mut self, pattern: impl Into<String>) {
        self.register_with_meta(pattern, RouteMeta::default());
    }

    pub fn register_with_meta(&mut self, pattern: impl Into<String>, meta: RouteMeta) {
        let entry = RouteEntry {
            pattern: pattern.into(),
            meta,
        };
        match self.routes.iter_mut().find(|r| r.pattern == entry.pattern) {
            Some(existing) => *existing = entry,
            None => self.routes.push(entry),
        }
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// First entry matching `path`, if any.
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> AppRoute {
        AppRoute::Product {
            product_id: id.to_string(),
        }
    }

    #[test]
    fn test_resolve_home() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Home);
        assert_eq!(AppRoute::resolve(""), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/?ref=nav"), AppRoute::Home);
    }

    #[test]
    fn test_resolve_product() {
        assert_eq!(AppRoute::resolve("/product/P001"), product("P001"));
        assert_eq!(AppRoute::resolve("/product/P001/"), product("P001"));
        assert_eq!(AppRoute::resolve("/product/P001#specs"), product("P001"));
    }

    #[test]
    fn test_resolve_unmatched() {
        assert_eq!(AppRoute::resolve("/product"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve("/product/P001/reviews"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve("/cart"), AppRoute::NotFound);
    }

    #[test]
    fn test_href_round_trips_through_resolve() {
        let route = product("P004");
        assert_eq!(route.href(), "/product/P004");
        assert_eq!(AppRoute::resolve(&route.href()), route);
        assert_eq!(AppRoute::NotFound.href(), "/");
    }

    #[test]
    fn test_storefront_registry() {
        let registry = RouteRegistry::storefront();
        assert_eq!(registry.routes().len(), 2);
        assert_eq!(registry.find("/").map(|r| r.pattern.as_str()), Some(paths::HOME));
        assert_eq!(
            registry.find("/product/P001").map(|r| r.pattern.as_str()),
            Some(paths::PRODUCT)
        );
        assert!(registry.find("/nope").is_none());
    }

    #[test]
    fn test_register_replaces_same_pattern() {
        let mut registry = RouteRegistry::new();
        registry.register("/");
        registry.register_with_meta(
            "/",
            RouteMeta {
                title: Some("Home".to_string()),
            },
        );
        assert_eq!(registry.routes().len(), 1);
        assert_eq!(registry.routes()[0].meta.title.as_deref(), Some("Home"));
    }
}
