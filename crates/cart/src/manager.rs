//! Single owner of a session's cart.

use chrono::Utc;

use storefront_catalog::Product;
use storefront_core::{Aggregate, AggregateRoot, CartId, ProductId};
use storefront_events::Event;

use crate::cart::{AddProduct, Cart, CartCommand, CartEvent, ClearCart, RemoveLine, RemoveOne};
use crate::line::CartLine;

/// Owns one [`Cart`] and is the only way to change it.
///
/// Every operation is a single handle-then-apply transition on `&mut self`,
/// so two operations never interleave. The applied events are returned so the
/// caller can publish them.
#[derive(Debug, Clone)]
pub struct CartManager {
    cart: Cart,
}

impl CartManager {
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    pub fn with_id(id: CartId) -> Self {
        Self {
            cart: Cart::empty(id),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_id(&self) -> CartId {
        self.cart.id_typed()
    }

    /// Add one unit of `product`. The caller is trusted to pass a catalog product.
    pub fn add_to_cart(&mut self, product: &Product) -> Vec<CartEvent> {
        self.execute(CartCommand::AddProduct(AddProduct {
            cart_id: self.cart_id(),
            product: product.clone(),
            occurred_at: Utc::now(),
        }))
    }

    /// Remove one unit; the line disappears when its last unit goes.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.execute(CartCommand::RemoveOne(RemoveOne {
            cart_id: self.cart_id(),
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    pub fn remove_item_completely(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.execute(CartCommand::RemoveLine(RemoveLine {
            cart_id: self.cart_id(),
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    pub fn clear_cart(&mut self) -> Vec<CartEvent> {
        self.execute(CartCommand::ClearCart(ClearCart {
            cart_id: self.cart_id(),
            occurred_at: Utc::now(),
        }))
    }

    /// Total in whole rubles.
    pub fn total_price(&self) -> u64 {
        self.cart.total_price().amount()
    }

    /// Total as printed under the cart: `"<total>₽"`.
    pub fn formatted_total(&self) -> String {
        self.cart.total_price().to_string()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.cart.version()
    }

    fn execute(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let decided = self.cart.handle(&command);
        debug_assert!(decided.is_ok(), "cart rejected its own command: {decided:?}");
        let events = decided.unwrap_or_default();

        for event in &events {
            self.cart.apply(event);
            tracing::debug!(
                cart_id = %self.cart_id(),
                event = event.event_type(),
                product_id = ?event.product_id().map(ProductId::get),
                total_items = self.cart.total_items(),
                total_price = %self.cart.total_price(),
                "cart updated"
            );
        }

        events
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::CatalogStore;

    fn product(store: &CatalogStore, id: u32) -> &Product {
        store.find_product(ProductId::new(id)).unwrap()
    }

    #[test]
    fn adding_same_product_twice_yields_one_line_with_quantity_two() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();

        manager.add_to_cart(product(&store, 4));
        manager.add_to_cart(product(&store, 4));

        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.line(ProductId::new(4)).unwrap().quantity, 2);
        assert_eq!(manager.total_items(), 2);
    }

    #[test]
    fn every_operation_targets_the_managed_cart() {
        let store = CatalogStore::seed();
        let cart_id = CartId::new();
        let mut manager = CartManager::with_id(cart_id);

        let mut applied = Vec::new();
        applied.extend(manager.add_to_cart(product(&store, 2)));
        applied.extend(manager.add_to_cart(product(&store, 2)));
        applied.extend(manager.remove_from_cart(ProductId::new(2)));
        applied.extend(manager.remove_item_completely(ProductId::new(2)));
        applied.extend(manager.clear_cart());

        assert_eq!(manager.cart_id(), cart_id);
        assert_eq!(applied.len(), 5);
        assert_eq!(manager.version(), 5);
        assert!(manager.is_empty());
    }

    #[test]
    fn distinct_products_get_one_line_each() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();

        for id in [1, 7, 12, 16] {
            manager.add_to_cart(product(&store, id));
        }

        assert_eq!(manager.total_items(), 4);
        assert_eq!(manager.lines().len(), 4);
    }

    #[test]
    fn remove_from_cart_decrements_before_deleting() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        manager.add_to_cart(product(&store, 9));
        manager.add_to_cart(product(&store, 9));

        manager.remove_from_cart(ProductId::new(9));
        assert_eq!(manager.line(ProductId::new(9)).unwrap().quantity, 1);

        manager.remove_from_cart(ProductId::new(9));
        assert!(manager.line(ProductId::new(9)).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_from_cart_on_absent_id_is_noop() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        manager.add_to_cart(product(&store, 1));
        let before = manager.cart().clone();

        let events = manager.remove_from_cart(ProductId::new(15));

        assert!(events.is_empty());
        assert_eq!(manager.cart(), &before);
    }

    #[test]
    fn remove_item_completely_drops_whole_line() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        for _ in 0..5 {
            manager.add_to_cart(product(&store, 14));
        }
        manager.add_to_cart(product(&store, 8));

        manager.remove_item_completely(ProductId::new(14));

        assert_eq!(manager.total_items(), 1);
        assert!(manager.remove_item_completely(ProductId::new(14)).is_empty());
    }

    #[test]
    fn clear_cart_empties_regardless_of_state() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        manager.clear_cart();
        assert_eq!(manager.total_items(), 0);

        manager.add_to_cart(product(&store, 2));
        manager.add_to_cart(product(&store, 3));
        manager.clear_cart();

        assert_eq!(manager.total_items(), 0);
        assert_eq!(manager.total_price(), 0);
        assert!(manager.lines().is_empty());
    }

    #[test]
    fn total_price_is_sum_of_price_times_quantity() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        manager.add_to_cart(product(&store, 1));
        manager.add_to_cart(product(&store, 1));
        manager.add_to_cart(product(&store, 7));

        assert_eq!(manager.total_price(), 47000);
        assert_eq!(manager.formatted_total(), "47000₽");
    }

    #[test]
    fn totals_are_idempotent() {
        let store = CatalogStore::seed();
        let mut manager = CartManager::new();
        manager.add_to_cart(product(&store, 10));

        assert_eq!(manager.total_price(), manager.total_price());
        assert_eq!(manager.total_items(), manager.total_items());
        assert_eq!(manager.version(), 1);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let manager = CartManager::default();
        assert_eq!(manager.total_items(), 0);
        assert_eq!(manager.total_price(), 0);
        assert_eq!(manager.formatted_total(), "0₽");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            RemoveOne(u32),
            RemoveLine(u32),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            // Ids up to 18 so removals sometimes miss.
            prop_oneof![
                4 => (1u32..=16).prop_map(Op::Add),
                3 => (1u32..=18).prop_map(Op::RemoveOne),
                1 => (1u32..=18).prop_map(Op::RemoveLine),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the cart agrees with a plain quantity map after any
            /// sequence of operations, and its invariants hold at every step.
            #[test]
            fn cart_matches_quantity_model(ops in proptest::collection::vec(op(), 0..60)) {
                let store = CatalogStore::seed();
                let mut manager = CartManager::new();
                let mut model: HashMap<u32, u32> = HashMap::new();

                for op in ops {
                    match op {
                        Op::Add(id) => {
                            manager.add_to_cart(product(&store, id));
                            *model.entry(id).or_insert(0) += 1;
                        }
                        Op::RemoveOne(id) => {
                            manager.remove_from_cart(ProductId::new(id));
                            if let Some(q) = model.get_mut(&id) {
                                *q -= 1;
                                if *q == 0 {
                                    model.remove(&id);
                                }
                            }
                        }
                        Op::RemoveLine(id) => {
                            manager.remove_item_completely(ProductId::new(id));
                            model.remove(&id);
                        }
                        Op::Clear => {
                            manager.clear_cart();
                            model.clear();
                        }
                    }

                    let lines = manager.lines();
                    let mut seen = std::collections::HashSet::new();
                    for line in lines {
                        prop_assert!(line.quantity >= 1);
                        prop_assert!(seen.insert(line.product_id));
                        prop_assert_eq!(model.get(&line.product_id.get()).copied(), Some(line.quantity));
                    }
                    prop_assert_eq!(lines.len(), model.len());

                    let expected_items: u64 = model.values().map(|q| u64::from(*q)).sum();
                    prop_assert_eq!(manager.total_items(), expected_items);

                    let expected_price: u64 = model
                        .iter()
                        .map(|(id, q)| product(&store, *id).price().amount() * u64::from(*q))
                        .sum();
                    prop_assert_eq!(manager.total_price(), expected_price);
                }
            }

            /// Property: n adds of distinct products give n items on n lines.
            #[test]
            fn distinct_adds_count_once_each(ids in proptest::sample::subsequence((1u32..=16).collect::<Vec<_>>(), 0..=16)) {
                let store = CatalogStore::seed();
                let mut manager = CartManager::new();
                for id in &ids {
                    manager.add_to_cart(product(&store, *id));
                }
                prop_assert_eq!(manager.total_items(), ids.len() as u64);
                prop_assert_eq!(manager.lines().len(), ids.len());
            }
        }
    }
}
