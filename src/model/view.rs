use crate::model::{
    DeliveryMode, Order, OrderId, OrderStatus, PackageLine, ProductLine, RiderAcceptance, Role,
    Shop, ShopId, User, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopSummary {
    pub id: ShopId,
    pub name: String,
}

impl From<&Shop> for ShopSummary {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name.clone(),
        }
    }
}

/// The hydrated response shape of an order: parties resolved to summaries, lines with their
/// snapshot prices, and the rendered notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub customer: Option<UserSummary>,
    pub shop: Option<ShopSummary>,
    pub rider: Option<UserSummary>,
    pub product_lines: Vec<ProductLine>,
    pub package_lines: Vec<PackageLine>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub rider_acceptance: RiderAcceptance,
    pub delivery_mode: DeliveryMode,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderView {
    /// Party summaries are `None` when the referenced record no longer resolves.
    pub fn new(
        order: Order,
        customer: Option<&User>,
        shop: Option<&Shop>,
        rider: Option<&User>,
    ) -> Self {
        Self {
            id: order.id,
            customer: customer.map(UserSummary::from),
            shop: shop.map(ShopSummary::from),
            rider: rider.map(UserSummary::from),
            rider_acceptance: order.rider_acceptance(),
            notes: order.rendered_notes(),
            product_lines: order.product_lines,
            package_lines: order.package_lines,
            total_price: order.total_price,
            status: order.status,
            delivery_mode: order.delivery_mode,
            delivery_address: order.delivery_address,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
