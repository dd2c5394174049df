//! `storefront-app`
//!
//! **Responsibility:** one shopper session over the catalog and the cart.
//!
//! This crate provides:
//! - Explicit session wiring (`Storefront` owns its catalog, cart and event bus)
//! - Environment-driven configuration
//! - The simulated connectivity failure behind ordering and sign-in
//! - View models for a presentation layer (cart summary, product card)
//!
//! Rendering and navigation live outside this crate.

pub mod config;
pub mod error;
pub mod offline;
pub mod storefront;
pub mod types;

pub use config::{ConfigError, StorefrontConfig};
pub use error::StorefrontError;
pub use offline::{CONNECTIVITY_FAILURE_MESSAGE, ConnectivityState, OfflineError, OfflineMode};
pub use storefront::Storefront;
pub use types::{CartSummary, ProductCard};
