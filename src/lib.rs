//! # Marketplace Orders
//!
//! Order composition and fulfillment for a local-commerce marketplace, built on a small
//! resource-oriented actor framework on Tokio.
//!
//! Customers order products and bundled packages from a single shop. An order is validated
//! against the users, shops and catalog, priced with frozen unit prices, and committed as one
//! unit. After that it moves through a fulfillment state machine
//! (`Pending → Confirmed → Preparing → Ready → Delivered`, or `Cancelled`) and an optional
//! rider assignment protocol.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns a store and processes requests one at a time.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Spins up the actors, injects their dependencies, and shuts them down.
//! - **Key items**: [`MarketplaceSystem`](lifecycle::MarketplaceSystem),
//!   [`EngineConfig`](lifecycle::EngineConfig), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients that hide message passing and return typed errors.
//! - **Key items**: [`OrderClient`](clients::OrderClient), [`ProductClient`](clients::ProductClient).
//!
//! ### 4. The Implementation
//! - [`order_actor`]: validation, composition, status and rider protocol.
//! - [`user_actor`], [`shop_actor`], [`product_actor`], [`package_actor`]: thin CRUD
//!   collaborators the order actor reads from.
//! - [`notify`]: fire-and-forget order events.
//!
//! ## Architecture Notes
//!
//! ### Type-Safe Error Handling
//! Each actor has its own `thiserror` enum. Entity errors cross the actor boundary boxed in
//! [`FrameworkError::EntityError`](framework::FrameworkError::EntityError) and are downcast
//! back by the client, so callers match on [`OrderError`](order_actor::OrderError) variants.
//!
//! ### Concurrency Model
//! Each actor runs in its own task and handles its messages sequentially, which serialises
//! every change to a given order without locks.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDERS_TRANSITION_POLICY=strict RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod package_actor;
pub mod product_actor;
pub mod shop_actor;
pub mod user_actor;
