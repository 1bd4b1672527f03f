use crate::model::{PackageId, ProductId, ShopId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What order composition needs to know about a product or package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub shop_id: ShopId,
    pub unit_price: Decimal,
}

/// Checks a listed price for a product or package. Zero is allowed, negative is not.
///
/// `invalid` builds the caller's own error, e.g. `ProductError::InvalidPrice`.
pub fn check_listed_price<E>(price: Decimal, invalid: impl FnOnce(Decimal) -> E) -> Result<(), E> {
    if price < Decimal::ZERO {
        return Err(invalid(price));
    }
    Ok(())
}

/// A reference to either kind of catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CatalogRef {
    Product(ProductId),
    Package(PackageId),
}

impl Display for CatalogRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRef::Product(id) => id.fmt(f),
            CatalogRef::Package(id) => id.fmt(f),
        }
    }
}

impl From<ProductId> for CatalogRef {
    fn from(id: ProductId) -> Self {
        CatalogRef::Product(id)
    }
}

impl From<PackageId> for CatalogRef {
    fn from(id: PackageId) -> Self {
        CatalogRef::Package(id)
    }
}
