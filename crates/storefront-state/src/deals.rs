//! Deal card image with one-shot fallback.

use storefront_catalog::catalog::Deal;

/// Image source for a deal card.
///
/// The first load error swaps in the category fallback; later errors (the
/// fallback itself failing) are ignored so the card never loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealImage {
    primary: String,
    fallback: String,
    using_fallback: bool,
}

impl DealImage {
    pub fn new(deal: &Deal) -> Self {
        Self {
            primary: deal.image.clone(),
            fallback: deal.fallback_image(),
            using_fallback: false,
        }
    }

    /// The source the `<img>` should currently use.
    pub fn src(&self) -> &str {
        if self.using_fallback {
            &self.fallback
        } else {
            &self.primary
        }
    }

    /// Handle an image error. Returns `true` if the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.using_fallback {
            return false;
        }
        self.using_fallback = true;
        true
    }
}
