use crate::model::{CatalogEntry, ProductId, ShopId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(pub u32);

impl From<u32> for PackageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "package_{}", self.0)
    }
}

/// A bundle of products sold by one shop at its own price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub shop_id: ShopId,
    pub name: String,
    pub price: Decimal,
    pub contents: Vec<ProductId>,
}

impl Package {
    pub fn catalog_entry(&self) -> CatalogEntry {
        CatalogEntry {
            shop_id: self.shop_id,
            unit_price: self.price,
        }
    }
}

/// Payload for creating a package.
#[derive(Debug, Clone)]
pub struct PackageCreate {
    pub shop_id: ShopId,
    pub name: String,
    pub price: Decimal,
    pub contents: Vec<ProductId>,
}

/// Payload for editing a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}
