//! # Order Actor
//!
//! Order composition and the fulfillment lifecycle.
//!
//! ## Structure
//!
//! - [`validator`] - customer/shop/rider/catalog reference checks
//! - [`composer`] - priced lines with frozen unit prices and a running total
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`transitions`] - status changes and cancellation
//! - [`rider`] - rider assignment and response
//! - [`error`] - [`OrderError`]
//!
//! ## Dependencies
//!
//! The order actor reads users, shops, products and packages through their clients, which
//! arrive in an [`OrderContext`] when the actor is started:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(OrderContext { users, shops, products, packages, notifier, config }));
//! ```
//!
//! ## Concurrency
//!
//! All requests are handled one at a time by the actor loop, so two riders answering the
//! same offer, or a cancellation racing an acceptance, are applied in arrival order and the
//! loser sees the updated state.

pub mod actions;
pub mod composer;
pub mod context;
pub mod entity;
pub mod error;
pub mod rider;
pub mod transitions;
pub mod validator;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
