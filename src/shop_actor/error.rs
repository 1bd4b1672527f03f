//! Error types for the Shop actor.

use crate::model::ShopId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Shop not found: {0}")]
    NotFound(ShopId),

    #[error("Shop validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ShopError {
    fn from(msg: String) -> Self {
        ShopError::ActorCommunicationError(msg)
    }
}
