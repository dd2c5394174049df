use thiserror::Error;

use storefront_catalog::CatalogLoadError;
use storefront_core::DomainError;

use crate::config::ConfigError;
use crate::offline::OfflineError;

/// Errors surfaced to the presentation layer. None of them is fatal.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Unknown category or product, malformed value.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The action needs a network connection the storefront never has.
    #[error(transparent)]
    Unavailable(#[from] OfflineError),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorefrontError::Unavailable(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::Domain(e) if e.is_not_found())
    }
}
