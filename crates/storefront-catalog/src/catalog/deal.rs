//! Promotional deal tiles for the home page.

use crate::ids::DealId;
use serde::{Deserialize, Serialize};

/// Directory holding the per-category fallback artwork.
pub const FALLBACK_IMAGE_DIR: &str = "/images/fallback";

/// A static promotional tile. Not backed by the product catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub description: String,
    /// Primary image reference.
    pub image: String,
    /// Category slug, also used to pick the fallback image.
    pub category: String,
}

impl Deal {
    /// Image shown when the primary image fails to load.
    pub fn fallback_image(&self) -> String {
        format!("{}/{}.svg", FALLBACK_IMAGE_DIR, self.category)
    }
}
