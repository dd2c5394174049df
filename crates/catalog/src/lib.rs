//! Product catalog (read-only).
//!
//! Categories and products are fixed at process start, either from the
//! built-in seed or from a JSON catalog file. Nothing here mutates after
//! construction.

pub mod category;
pub mod file;
pub mod product;
pub mod seed;
pub mod store;

pub use category::Category;
pub use file::{CatalogFile, CatalogLoadError};
pub use product::{Product, ProductAttribute};
pub use store::CatalogStore;
