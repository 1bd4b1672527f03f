use crate::model::{
    LineId, LineRequest, OrderStatus, PackageId, PackageLine, ProductId, ProductLine,
    RiderAcceptance, RiderAssignment, ShopId, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    #[default]
    Pickup,
    Delivery,
}

/// One cancellation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub actor: Option<UserId>,
    pub reason: String,
}

/// The part of an [`OrderCreate`] that still has to be validated and priced.
///
/// Held on the order between construction and `on_create`, never persisted. Empty once the
/// order has been composed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderCart {
    pub rider_id: Option<UserId>,
    pub products: Vec<LineRequest<ProductId>>,
    pub packages: Vec<LineRequest<PackageId>>,
}

impl OrderCart {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.packages.is_empty()
    }
}

/// Represents a customer order together with its lines.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
///
/// Lines and their price snapshots are fixed at creation. After that only `status`,
/// `rider` and `audit` change, and nothing changes once the status is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub shop_id: ShopId,
    pub rider: RiderAssignment,
    pub status: OrderStatus,
    pub product_lines: Vec<ProductLine>,
    pub package_lines: Vec<PackageLine>,
    pub total_price: Decimal,
    pub delivery_mode: DeliveryMode,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub audit: Vec<AuditEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub(crate) cart: OrderCart,
}

impl Order {
    /// Builds an unpriced order header. Lines are filled in when the order is composed.
    pub fn draft(id: OrderId, params: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer_id: params.customer_id,
            shop_id: params.shop_id,
            rider: RiderAssignment::Unassigned,
            status: OrderStatus::Pending,
            product_lines: Vec::new(),
            package_lines: Vec::new(),
            total_price: Decimal::ZERO,
            delivery_mode: params.delivery_mode,
            delivery_address: params.delivery_address,
            notes: params.notes,
            audit: Vec::new(),
            created_at: now,
            updated_at: now,
            cart: OrderCart {
                rider_id: params.rider_id,
                products: params.products,
                packages: params.packages,
            },
        }
    }

    pub fn rider_id(&self) -> Option<UserId> {
        self.rider.rider()
    }

    pub fn rider_acceptance(&self) -> RiderAcceptance {
        self.rider.acceptance()
    }

    pub fn line_item_refs(&self) -> Vec<LineId> {
        self.product_lines.iter().map(|line| line.id).collect()
    }

    pub fn package_line_refs(&self) -> Vec<LineId> {
        self.package_lines.iter().map(|line| line.id).collect()
    }

    pub fn line_count(&self) -> usize {
        self.product_lines.len() + self.package_lines.len()
    }

    /// The customer's notes followed by one line per cancellation record.
    pub fn rendered_notes(&self) -> Option<String> {
        let mut parts: Vec<String> = self.notes.iter().cloned().collect();
        parts.extend(self.audit.iter().map(|entry| {
            format!(
                "[{}] Cancelled: {}",
                entry.at.format("%Y-%m-%d %H:%M:%S UTC"),
                entry.reason
            )
        }));
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub shop_id: ShopId,
    pub rider_id: Option<UserId>,
    pub products: Vec<LineRequest<ProductId>>,
    pub packages: Vec<LineRequest<PackageId>>,
    pub delivery_mode: DeliveryMode,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
}

impl OrderCreate {
    pub fn new(customer_id: UserId, shop_id: ShopId) -> Self {
        Self {
            customer_id,
            shop_id,
            rider_id: None,
            products: Vec::new(),
            packages: Vec::new(),
            delivery_mode: DeliveryMode::Pickup,
            delivery_address: None,
            notes: None,
        }
    }

    pub fn product(mut self, product_id: ProductId, quantity: u32) -> Self {
        self.products.push(LineRequest::new(product_id, quantity));
        self
    }

    pub fn package(mut self, package_id: PackageId, quantity: u32) -> Self {
        self.packages.push(LineRequest::new(package_id, quantity));
        self
    }

    pub fn rider(mut self, rider_id: UserId) -> Self {
        self.rider_id = Some(rider_id);
        self
    }

    pub fn deliver_to(mut self, address: impl Into<String>) -> Self {
        self.delivery_mode = DeliveryMode::Delivery;
        self.delivery_address = Some(address.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
