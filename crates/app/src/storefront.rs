//! One shopper session.

use storefront_cart::{CartEvent, CartManager};
use storefront_catalog::{CatalogStore, Category, Product};
use storefront_core::{DomainError, ProductId};
use storefront_events::{EventBus, InMemoryEventBus, Subscription};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::offline::OfflineMode;
use crate::types::{CartSummary, ProductCard};

/// Session facade over the catalog and the cart.
///
/// The cart is owned here and handed to nobody; screens read it through
/// [`Storefront::cart_summary`] and change it through the methods below.
/// Every applied cart event is published on the session bus.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartManager,
    connectivity: OfflineMode,
    bus: InMemoryEventBus<CartEvent>,
}

impl Storefront {
    /// Build a session, loading the catalog file named by the config if any.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = match &config.catalog_path {
            Some(path) => CatalogStore::from_path(path)?,
            None => CatalogStore::seed(),
        };
        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: CatalogStore, config: StorefrontConfig) -> Self {
        let cart = CartManager::new();
        tracing::info!(
            cart_id = %cart.cart_id(),
            categories = catalog.list_categories().len(),
            products = catalog.list_products().len(),
            "storefront session started"
        );
        Self {
            config,
            catalog,
            cart,
            connectivity: OfflineMode::disconnected(),
            bus: InMemoryEventBus::new(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn connectivity(&self) -> &OfflineMode {
        &self.connectivity
    }

    // --- catalog ---

    pub fn categories(&self) -> &[Category] {
        self.catalog.list_categories()
    }

    /// Categories featured on the home screen.
    pub fn popular_categories(&self) -> &[Category] {
        self.catalog.popular_categories(self.config.popular_categories)
    }

    /// Products of the named category; empty for an unknown name.
    pub fn category_products(&self, category_name: &str) -> Vec<&Product> {
        self.catalog.products_in_category_named(category_name).collect()
    }

    pub fn product(&self, product_id: ProductId) -> Result<&Product, StorefrontError> {
        Ok(self.catalog.find_product(product_id)?)
    }

    pub fn product_card(&self, product_id: ProductId) -> Result<ProductCard, StorefrontError> {
        Ok(ProductCard::from(self.product(product_id)?))
    }

    // --- cart ---

    /// Add one unit of a catalog product.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), StorefrontError> {
        let product = self.catalog.find_product(product_id)?;
        let events = self.cart.add_to_cart(product);
        self.publish(events);
        Ok(())
    }

    /// The cart's "+" control: one more unit of a product already in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> Result<(), StorefrontError> {
        if self.cart.line(product_id).is_none() {
            return Err(DomainError::not_found("cart line", product_id).into());
        }
        self.add_to_cart(product_id)
    }

    /// The cart's "-" control.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let events = self.cart.remove_from_cart(product_id);
        self.publish(events);
    }

    pub fn remove_item_completely(&mut self, product_id: ProductId) {
        let events = self.cart.remove_item_completely(product_id);
        self.publish(events);
    }

    pub fn clear_cart(&mut self) {
        let events = self.cart.clear_cart();
        self.publish(events);
    }

    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::of(&self.cart)
    }

    /// Subscribe to cart events applied from now on.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    fn publish(&self, events: Vec<CartEvent>) {
        for event in events {
            if let Err(err) = self.bus.publish(event) {
                tracing::warn!(error = %err, "failed to publish cart event");
            }
        }
    }

    // --- actions that need a backend ---

    /// Place an order for the cart contents.
    ///
    /// There is no order service; this always reports the connectivity
    /// failure and leaves the cart as it is.
    pub fn place_order(&self) -> Result<(), StorefrontError> {
        tracing::info!(
            cart_id = %self.cart.cart_id(),
            total_items = self.cart.total_items(),
            total_price = self.cart.total_price(),
            "order attempt"
        );
        self.require_online("place_order")
    }

    /// Profile screen "register" action; always the connectivity failure.
    pub fn register(&self) -> Result<(), StorefrontError> {
        self.require_online("register")
    }

    /// Profile screen "sign in" action; always the connectivity failure.
    pub fn sign_in(&self) -> Result<(), StorefrontError> {
        self.require_online("sign_in")
    }

    fn require_online(&self, action: &'static str) -> Result<(), StorefrontError> {
        self.connectivity.require_online().map_err(|err| {
            tracing::warn!(action, state = ?self.connectivity.state(), "action needs network");
            StorefrontError::from(err)
        })
    }
}
