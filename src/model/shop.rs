use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Shops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopId(pub u32);

impl From<u32> for ShopId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shop_{}", self.0)
    }
}

/// A storefront that owns products and packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub owner_id: Option<UserId>,
}

/// Payload for creating a new shop.
#[derive(Debug, Clone)]
pub struct ShopCreate {
    pub name: String,
    pub owner_id: Option<UserId>,
}

/// Payload for renaming a shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopUpdate {
    pub name: Option<String>,
}
