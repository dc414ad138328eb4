//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//! ```

pub use crate::logging::{self, LogFormat, LogLevel};
pub use crate::{StorefrontApp, StorefrontConfig, StorefrontError};
