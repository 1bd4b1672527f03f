//! Reference checks that run before an order is priced.
//!
//! Checks happen in a fixed order (customer, shop, rider, delivery address, product
//! lines, package lines) and stop at the first failure. Every catalog item is looked up
//! once; its price is kept in the returned [`PriceSnapshot`] so the composer never reads
//! the catalog again.

use super::{EntityKind, OrderContext, OrderError};
use crate::clients::{ActorClient, UserClient};
use crate::model::{
    CatalogEntry, CatalogRef, DeliveryMode, Order, OrderCart, Role, ShopId, User, UserId,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Unit prices read during one composition, keyed by catalog item.
pub type PriceSnapshot = HashMap<CatalogRef, Decimal>;

/// Resolves `rider_id` to a user holding the rider role.
pub async fn require_rider(users: &UserClient, rider_id: UserId) -> Result<User, OrderError> {
    match users.get(rider_id).await? {
        Some(user) if user.role.can_deliver() => Ok(user),
        Some(user) => {
            warn!(%rider_id, role = %user.role, "User cannot deliver");
            Err(OrderError::InvalidRole(Role::Rider))
        }
        None => {
            warn!(%rider_id, "Rider not found");
            Err(OrderError::InvalidRole(Role::Rider))
        }
    }
}

/// Checks that a catalog lookup result exists and belongs to `shop`.
fn check_entry(
    item: CatalogRef,
    entry: Option<CatalogEntry>,
    shop: ShopId,
) -> Result<Decimal, OrderError> {
    let Some(entry) = entry else {
        warn!(%item, "Catalog item not found");
        return Err(OrderError::NotFound(EntityKind::Catalog));
    };
    if entry.shop_id != shop {
        return Err(OrderError::CrossShopReference { item, shop });
    }
    Ok(entry.unit_price)
}

fn check_quantity(item: CatalogRef, quantity: u32) -> Result<(), OrderError> {
    if quantity == 0 {
        return Err(OrderError::InvalidQuantity(item));
    }
    Ok(())
}

/// Validates an order header and its cart against the collaborators. Read-only.
pub async fn validate(
    order: &Order,
    cart: &OrderCart,
    ctx: &OrderContext,
) -> Result<PriceSnapshot, OrderError> {
    if ctx.users.get(order.customer_id).await?.is_none() {
        return Err(OrderError::NotFound(EntityKind::Customer));
    }
    if ctx.shops.get(order.shop_id).await?.is_none() {
        return Err(OrderError::NotFound(EntityKind::Shop));
    }
    if let Some(rider_id) = cart.rider_id {
        require_rider(&ctx.users, rider_id).await?;
    }

    let has_address = order
        .delivery_address
        .as_deref()
        .is_some_and(|address| !address.trim().is_empty());
    if ctx.config.require_delivery_address
        && order.delivery_mode == DeliveryMode::Delivery
        && !has_address
    {
        return Err(OrderError::MissingDeliveryAddress);
    }

    let mut prices = PriceSnapshot::new();
    for line in &cart.products {
        let item = CatalogRef::Product(line.item);
        check_quantity(item, line.quantity)?;
        if prices.contains_key(&item) {
            continue;
        }
        let entry = ctx.products.catalog_entry(line.item).await?;
        prices.insert(item, check_entry(item, entry, order.shop_id)?);
    }
    for line in &cart.packages {
        let item = CatalogRef::Package(line.item);
        check_quantity(item, line.quantity)?;
        if prices.contains_key(&item) {
            continue;
        }
        let entry = ctx.packages.catalog_entry(line.item).await?;
        prices.insert(item, check_entry(item, entry, order.shop_id)?);
    }

    debug!(order = %order.id, items = prices.len(), "References valid");
    Ok(prices)
}
