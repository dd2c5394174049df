use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{CategoryId, Price, ProductId};

/// One distinct product in the cart.
///
/// Display attributes are copied from the product when the line is first
/// created; later catalog changes do not touch existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Always >= 1 while the line is in the cart.
    pub quantity: u32,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id_typed(),
            category_id: product.category_id(),
            name: product.name().to_string(),
            price: product.price(),
            color: product.color().map(str::to_string),
            size: product.size().map(str::to_string),
            material: product.material().map(str::to_string),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::CatalogStore;

    #[test]
    fn snapshot_copies_display_attributes() {
        let store = CatalogStore::seed();
        let product = store.find_product(ProductId::new(1)).unwrap();

        let line = CartLine::from_product(product);
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.name, "Кровать-Сити");
        assert_eq!(line.color.as_deref(), Some("Белый"));
        assert_eq!(line.size.as_deref(), Some("200*90*65"));
        assert_eq!(line.material, None);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn subtotal_multiplies_by_quantity() {
        let store = CatalogStore::seed();
        let mut line = CartLine::from_product(store.find_product(ProductId::new(1)).unwrap());
        line.quantity = 2;
        assert_eq!(line.subtotal(), Price::rubles(40000));
    }
}
