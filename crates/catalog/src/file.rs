//! Loading a catalog from a JSON file.
//!
//! ```json
//! {
//!   "categories": [{ "id": 1, "name": "Кровати" }],
//!   "products": [
//!     { "id": 1, "category_id": 1, "name": "Кровать-Сити",
//!       "color": "Белый", "size": "200*90*65", "price": "20000₽" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{CategoryId, DomainError, Price, ProductId};

use crate::category::Category;
use crate::product::Product;
use crate::store::CatalogStore;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// On-disk shape of a catalog. Prices stay strings until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<CategoryRecord>,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub category_id: u32,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

impl ProductRecord {
    fn into_product(self) -> Result<Product, DomainError> {
        let price: Price = self.price.parse()?;
        let mut product = Product::new(
            ProductId::new(self.id),
            CategoryId::new(self.category_id),
            self.name,
            price,
        );
        if let Some(color) = self.color {
            product = product.with_color(color);
        }
        if let Some(size) = self.size {
            product = product.with_size(size);
        }
        if let Some(material) = self.material {
            product = product.with_material(material);
        }
        Ok(product)
    }
}

impl CatalogFile {
    /// Validate records and build the store.
    pub fn into_store(self) -> Result<CatalogStore, DomainError> {
        let categories = self
            .categories
            .into_iter()
            .map(|c| Category::new(CategoryId::new(c.id), c.name))
            .collect();
        let products = self
            .products
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<Result<Vec<_>, _>>()?;
        CatalogStore::new(categories, products)
    }
}

impl From<&CatalogStore> for CatalogFile {
    fn from(store: &CatalogStore) -> Self {
        Self {
            categories: store
                .list_categories()
                .iter()
                .map(|c| CategoryRecord {
                    id: c.id_typed().get(),
                    name: c.name().to_string(),
                })
                .collect(),
            products: store
                .list_products()
                .iter()
                .map(|p| ProductRecord {
                    id: p.id_typed().get(),
                    category_id: p.category_id().get(),
                    name: p.name().to_string(),
                    price: p.price().to_string(),
                    color: p.color().map(str::to_string),
                    size: p.size().map(str::to_string),
                    material: p.material().map(str::to_string),
                })
                .collect(),
        }
    }
}

impl CatalogStore {
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.into_store()?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            categories = store.list_categories().len(),
            products = store.list_products().len(),
            "catalog loaded"
        );
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String, CatalogLoadError> {
        Ok(serde_json::to_string_pretty(&CatalogFile::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "categories": [{ "id": 1, "name": "Кровати" }, { "id": 2, "name": "Столы" }],
        "products": [
            { "id": 1, "category_id": 1, "name": "Кровать-Сити", "color": "Белый",
              "size": "200*90*65", "price": "20000₽" },
            { "id": 7, "category_id": 2, "name": "Стол-Wood", "color": "Коричневый",
              "material": "Дуб", "price": "7000₽" }
        ]
    }"#;

    #[test]
    fn loads_valid_catalog() {
        let store = CatalogStore::from_json(SMALL).unwrap();
        assert_eq!(store.list_categories().len(), 2);
        let wood = store.find_product(ProductId::new(7)).unwrap();
        assert_eq!(wood.price(), Price::rubles(7000));
        assert_eq!(wood.material(), Some("Дуб"));
        assert_eq!(wood.size(), None);
    }

    #[test]
    fn seed_survives_export_and_reload() {
        let seed = CatalogStore::seed();
        let reloaded = CatalogStore::from_json(&seed.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, seed);
    }

    #[test]
    fn malformed_price_is_a_typed_error() {
        let json = SMALL.replace("\"7000₽\"", "\"7000 rub\"");
        let err = CatalogStore::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Domain(DomainError::MalformedPrice(raw)) if raw == "7000 rub"
        ));
    }

    #[test]
    fn dangling_category_is_rejected() {
        let json = SMALL.replace("\"category_id\": 2", "\"category_id\": 9");
        let err = CatalogStore::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Domain(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = CatalogStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogStore::from_path("/nonexistent/storefront/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/storefront/catalog.json"));
    }
}
