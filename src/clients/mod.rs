//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client hides the message plumbing of one actor and converts
//! [`FrameworkError`](crate::framework::FrameworkError) back into that actor's error enum.

pub mod order_client;
pub mod package_client;
pub mod product_client;
pub mod shop_client;
pub mod user_client;

pub use crate::framework::ActorClient;
pub use order_client::*;
pub use package_client::*;
pub use product_client::*;
pub use shop_client::*;
pub use user_client::*;
