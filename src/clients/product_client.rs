//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CatalogEntry, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Change the current unit price. Existing orders keep the price they were composed with.
    #[instrument(skip(self))]
    pub async fn reprice(&self, id: ProductId, price: Decimal) -> Result<Product, ProductError> {
        debug!("Repricing {} to {}", id, price);
        let update = ProductUpdate {
            name: None,
            price: Some(price),
        };
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => ProductError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    /// The owning shop and current price, or `None` if the product does not exist.
    #[instrument(skip(self))]
    pub async fn catalog_entry(&self, id: ProductId) -> Result<Option<CatalogEntry>, ProductError> {
        debug!("Looking up catalog entry for {}", id);
        Ok(self.get(id).await?.map(|product| product.catalog_entry()))
    }
}
