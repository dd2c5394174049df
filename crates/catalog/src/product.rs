use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, Price, ProductId};

/// Catalog entry.
///
/// Color, size and material are optional; beds carry a size, tables a
/// material, and the product card only prints the attributes that are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    category_id: CategoryId,
    name: String,
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    material: Option<String>,
}

/// A present optional attribute of a product, with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAttribute<'a> {
    Color(&'a str),
    Size(&'a str),
    Material(&'a str),
}

impl<'a> ProductAttribute<'a> {
    pub fn label(&self) -> &'static str {
        match self {
            ProductAttribute::Color(_) => "Цвет",
            ProductAttribute::Size(_) => "Размер(Длина, Ширина, Высота)",
            ProductAttribute::Material(_) => "Материал",
        }
    }

    pub fn value(&self) -> &'a str {
        match *self {
            ProductAttribute::Color(v) | ProductAttribute::Size(v) | ProductAttribute::Material(v) => v,
        }
    }
}

impl core::fmt::Display for ProductAttribute<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.label(), self.value())
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        category_id: CategoryId,
        name: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            category_id,
            name: name.into(),
            price,
            color: None,
            size: None,
            material: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Present attributes in card order: color, size, material.
    pub fn attributes(&self) -> impl Iterator<Item = ProductAttribute<'_>> {
        [
            self.color().map(ProductAttribute::Color),
            self.size().map(ProductAttribute::Size),
            self.material().map(ProductAttribute::Material),
        ]
        .into_iter()
        .flatten()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
