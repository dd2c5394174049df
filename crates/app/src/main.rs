use anyhow::Context;

use storefront_app::{Storefront, StorefrontConfig};
use storefront_core::ProductId;

/// Scripted session: browse, fill the cart, try to order.
fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    storefront_observability::init(config.log_format);

    let mut storefront = Storefront::new(config).context("failed to start storefront session")?;
    let events = storefront.subscribe();

    for category in storefront.popular_categories() {
        tracing::info!(category = category.name(), "popular category");
    }

    for product in storefront.category_products("Кровати") {
        tracing::info!(
            article = %product.id_typed(),
            name = product.name(),
            price = %product.price(),
            "catalog entry"
        );
    }

    storefront.add_to_cart(ProductId::new(2))?;
    storefront.add_to_cart(ProductId::new(8))?;
    storefront.increment(ProductId::new(8))?;

    let summary = storefront.cart_summary();
    tracing::info!(
        total_items = summary.total_items,
        total = %summary.formatted_total,
        cart = %serde_json::to_string(&summary)?,
        "cart"
    );

    for event in events.drain() {
        tracing::debug!(event = ?event, "cart event");
    }

    if let Err(err) = storefront.place_order() {
        tracing::warn!(error = %err, "order not placed");
    }

    Ok(())
}
