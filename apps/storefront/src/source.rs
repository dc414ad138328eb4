//! Product source used by the product page.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use storefront_catalog::prelude::*;

/// Wraps a source and suspends for `delay` before every lookup.
#[derive(Debug, Clone)]
pub struct DelayedSource<S> {
    inner: S,
    delay: Duration,
}

impl<S> DelayedSource<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait(?Send)]
impl<S: ProductSource> ProductSource for DelayedSource<S> {
    async fn fetch(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        if !self.delay.is_zero() {
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(millis).await;
        }
        self.inner.fetch(id).await
    }
}
