use std::collections::HashSet;

use storefront_core::{CategoryId, DomainError, DomainResult, ProductId};

use crate::category::Category;
use crate::product::Product;
use crate::seed;

/// Read-only catalog: categories and products in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a catalog, checking its integrity.
    ///
    /// Category ids and product ids must be unique, names non-empty, and every
    /// product must reference a known category.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> DomainResult<Self> {
        let store = Self {
            categories,
            products,
        };
        store.validate()?;
        Ok(store)
    }

    /// The built-in furniture catalog (4 categories, 16 products).
    pub fn seed() -> Self {
        Self {
            categories: seed::categories(),
            products: seed::products(),
        }
    }

    fn validate(&self) -> DomainResult<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "category {} has an empty name",
                    category.id_typed()
                )));
            }
            if !category_ids.insert(category.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate category id {}",
                    category.id_typed()
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if product.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id_typed()
                )));
            }
            if !product_ids.insert(product.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id_typed()
                )));
            }
            if !category_ids.contains(&product.category_id()) {
                return Err(DomainError::invariant(format!(
                    "product {} references unknown category {}",
                    product.id_typed(),
                    product.category_id()
                )));
            }
        }

        Ok(())
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_category(&self, id: CategoryId) -> DomainResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.id_typed() == id)
            .ok_or_else(|| DomainError::not_found("category", id))
    }

    /// Exact, case-sensitive match on the display name.
    pub fn find_category_by_name(&self, name: &str) -> DomainResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| DomainError::not_found("category", name))
    }

    pub fn find_product(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id_typed() == id)
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    /// Products of one category, lazily, in catalog order.
    pub fn products_in_category(
        &self,
        category_id: CategoryId,
    ) -> impl Iterator<Item = &Product> + '_ {
        self.products
            .iter()
            .filter(move |p| p.category_id() == category_id)
    }

    /// Products of the category with the given display name.
    ///
    /// An unknown name yields no products rather than an error; the category
    /// screen shows its empty state in that case.
    pub fn products_in_category_named<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        let category_id = self.find_category_by_name(name).ok().map(Category::id_typed);
        self.products
            .iter()
            .filter(move |p| Some(p.category_id()) == category_id)
    }

    /// The first `count` categories, as featured on the home screen.
    pub fn popular_categories(&self, count: usize) -> &[Category] {
        &self.categories[..count.min(self.categories.len())]
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seed()
    }
}
