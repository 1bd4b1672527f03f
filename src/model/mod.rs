//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! plus the value types an order is built from.

pub mod catalog;
pub mod line;
pub mod order;
pub mod package;
pub mod product;
pub mod rider;
pub mod shop;
pub mod status;
pub mod user;
pub mod view;

pub use catalog::*;
pub use line::*;
pub use order::*;
pub use package::*;
pub use product::*;
pub use rider::*;
pub use shop::*;
pub use status::*;
pub use user::*;
pub use view::*;
