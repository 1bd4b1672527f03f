//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the marketplace actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at runtime via `run(context)`:
//!
//! | Actor | `Context` |
//! |---|---|
//! | User, Shop, Product | `()` |
//! | Package | `ProductClient` |
//! | Order | [`OrderContext`](crate::order_actor::OrderContext) (all clients, notifier, [`EngineConfig`]) |
//!
//! The graph is acyclic, so closing the client channels is enough to stop everything; see
//! [`MarketplaceSystem::shutdown`].
//!
//! ## Configuration
//!
//! [`EngineConfig`] is loaded once (usually [`EngineConfig::from_env`]) and handed to the
//! order actor in its context.
//!
//! ## Observability
//!
//! See the [`tracing`](self::tracing) module.

pub mod config;
pub mod marketplace_system;
pub mod tracing;

pub use config::*;
pub use marketplace_system::*;
pub use self::tracing::setup_tracing;
