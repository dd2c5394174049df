//! View models handed to the presentation layer.

use serde::{Deserialize, Serialize};

use storefront_cart::{CartLine, CartManager};
use storefront_catalog::Product;
use storefront_core::{CartId, ProductId};

/// Everything the cart screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub cart_id: CartId,
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    /// Whole rubles.
    pub total_price: u64,
    /// `"<total>₽"`.
    pub formatted_total: String,
}

impl CartSummary {
    pub fn of(cart: &CartManager) -> Self {
        Self {
            cart_id: cart.cart_id(),
            lines: cart.lines().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            formatted_total: cart.formatted_total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Product detail card: name, article number, price and present attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub article: ProductId,
    pub name: String,
    pub price: String,
    /// `"<label>: <value>"` for each attribute the product has.
    pub attributes: Vec<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            article: product.id_typed(),
            name: product.name().to_string(),
            price: product.price().to_string(),
            attributes: product.attributes().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::CatalogStore;

    #[test]
    fn product_card_lists_present_attributes() {
        let store = CatalogStore::seed();
        let card = ProductCard::from(store.find_product(ProductId::new(5)).unwrap());

        assert_eq!(card.article, ProductId::new(5));
        assert_eq!(card.name, "Кровать-Венсен");
        assert_eq!(card.price, "17000₽");
        assert_eq!(
            card.attributes,
            vec![
                "Цвет: Белый".to_string(),
                "Размер(Длина, Ширина, Высота): 190*85*60".to_string()
            ]
        );
    }

    #[test]
    fn empty_cart_summary() {
        let summary = CartSummary::of(&CartManager::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.formatted_total, "0₽");
    }
}
