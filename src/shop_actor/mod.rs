//! # Shop Actor
//!
//! Storefronts. Orders are placed against exactly one shop, and every catalog item on an
//! order must belong to it.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ShopClient;
use crate::framework::ResourceActor;
use crate::model::Shop;

/// Creates a new Shop actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Shop>, ShopClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ShopClient::new(generic_client))
}
