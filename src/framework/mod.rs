//! Generic actor framework for resource management.
//!
//! This module provides the building blocks every resource in the marketplace is built on:
//! users, shops, catalog entries and orders all live inside a [`ResourceActor`] and are
//! reached through a [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store of entities and processes requests sequentially
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests to an actor
//! - [`ActorClient`] - Trait that domain clients implement to inherit `get`/`list`
//! - [`FrameworkError`] - Channel and lookup failures, plus boxed entity errors
//!
//! # Commit-on-success
//!
//! A `Create` request only inserts the entity after both [`ActorEntity::from_create_params`]
//! and [`ActorEntity::on_create`] succeed. Anything the entity stages inside those hooks is
//! discarded together with the entity when either fails, so a failed create never leaves a
//! partial record in the store.
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
