//! Error types for the Order actor.

use crate::model::{CatalogRef, OrderStatus, Role, ShopId, UnknownStatus};
use crate::package_actor::PackageError;
use crate::product_actor::ProductError;
use crate::shop_actor::ShopError;
use crate::user_actor::UserError;
use std::fmt::Display;
use thiserror::Error;

/// What kind of record a `NotFound` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Shop,
    Catalog,
    Order,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Customer => "customer",
            EntityKind::Shop => "shop",
            EntityKind::Catalog => "catalog item",
            EntityKind::Order => "order",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// The referenced user exists but does not hold the required role.
    #[error("user does not hold the {0} role")]
    InvalidRole(Role),

    /// A catalog item belongs to a different shop than the order.
    #[error("{item} is not sold by {shop}")]
    CrossShopReference { item: CatalogRef, shop: ShopId },

    #[error("order has no product or package lines")]
    EmptyOrder,

    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    /// Delivered and cancelled orders cannot change.
    #[error("order is already {0}")]
    AlreadyTerminal(OrderStatus),

    #[error("order is not assigned to this rider")]
    NotAssignedToYou,

    #[error("rider has already responded")]
    AlreadyResponded,

    #[error("quantity for {0} must be at least 1")]
    InvalidQuantity(CatalogRef),

    #[error("delivery orders need a delivery address")]
    MissingDeliveryAddress,

    /// A line total or the order total does not fit in a `Decimal`.
    #[error("amount for {0} is out of range")]
    AmountOverflow(CatalogRef),

    #[error("cannot move order from {from} to {to}")]
    DisallowedTransition { from: OrderStatus, to: OrderStatus },

    /// An actor the order engine depends on could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "not_found",
            OrderError::InvalidRole(_) => "invalid_role",
            OrderError::CrossShopReference { .. } => "cross_shop_reference",
            OrderError::EmptyOrder => "empty_order",
            OrderError::InvalidStatus(_) => "invalid_status",
            OrderError::AlreadyTerminal(_) => "already_terminal",
            OrderError::NotAssignedToYou => "not_assigned_to_you",
            OrderError::AlreadyResponded => "already_responded",
            OrderError::InvalidQuantity(_) => "invalid_quantity",
            OrderError::MissingDeliveryAddress => "missing_delivery_address",
            OrderError::AmountOverflow(_) => "amount_overflow",
            OrderError::DisallowedTransition { .. } => "disallowed_transition",
            OrderError::Unavailable(_) => "unavailable",
        }
    }
}

impl From<UnknownStatus> for OrderError {
    fn from(e: UnknownStatus) -> Self {
        OrderError::InvalidStatus(e.0)
    }
}

// Lookups against collaborators only fail when their actor is unreachable.
macro_rules! unavailable_from {
    ($($source:ty),+) => {
        $(impl From<$source> for OrderError {
            fn from(e: $source) -> Self {
                OrderError::Unavailable(e.to_string())
            }
        })+
    };
}

unavailable_from!(UserError, ShopError, ProductError, PackageError);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(OrderError::NotFound(EntityKind::Shop).kind(), "not_found");
        assert_eq!(OrderError::AlreadyResponded.kind(), "already_responded");
        assert_eq!(
            OrderError::AmountOverflow(ProductId(1).into()).kind(),
            "amount_overflow"
        );
        assert_eq!(
            OrderError::DisallowedTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready
            }
            .kind(),
            "disallowed_transition"
        );
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = OrderError::CrossShopReference {
            item: ProductId(4).into(),
            shop: ShopId(1),
        };
        assert_eq!(err.to_string(), "product_4 is not sold by shop_1");
        assert_eq!(
            OrderError::NotFound(EntityKind::Catalog).to_string(),
            "catalog item not found"
        );
    }

    #[test]
    fn test_collaborator_failures_become_unavailable() {
        let err: OrderError = UserError::ActorCommunicationError("Actor closed".into()).into();
        assert_eq!(err.kind(), "unavailable");
    }
}
