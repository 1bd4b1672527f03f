//! # Package Actor
//!
//! Bundles of products sold at their own price. The package actor depends on the product
//! actor (`Context = ProductClient`) to check bundle contents.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PackageClient;
use crate::framework::ResourceActor;
use crate::model::Package;

/// Creates a new Package actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Package>, PackageClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PackageClient::new(generic_client))
}
