//! Error types for the Package actor.

use crate::model::{PackageId, ProductId, ShopId};
use crate::product_actor::ProductError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackageError {
    #[error("Package not found: {0}")]
    NotFound(PackageId),

    #[error("Package must contain at least one product")]
    EmptyBundle,

    /// A bundled product is unknown or sold by a different shop.
    #[error("{product} cannot be bundled by {shop}")]
    ForeignProduct { product: ProductId, shop: ShopId },

    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    #[error("Package validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PackageError {
    fn from(msg: String) -> Self {
        PackageError::ActorCommunicationError(msg)
    }
}
