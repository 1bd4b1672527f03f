use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CatalogEntry, Package, PackageCreate, PackageId, PackageUpdate};
use crate::package_actor::PackageError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Package actor.
#[derive(Clone)]
pub struct PackageClient {
    inner: ResourceClient<Package>,
}

impl PackageClient {
    pub fn new(inner: ResourceClient<Package>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_package(&self, params: PackageCreate) -> Result<PackageId, PackageError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn reprice(&self, id: PackageId, price: Decimal) -> Result<Package, PackageError> {
        debug!("Repricing {} to {}", id, price);
        let update = PackageUpdate {
            name: None,
            price: Some(price),
        };
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => PackageError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn catalog_entry(&self, id: PackageId) -> Result<Option<CatalogEntry>, PackageError> {
        debug!("Looking up catalog entry for {}", id);
        Ok(self.get(id).await?.map(|package| package.catalog_entry()))
    }
}

#[async_trait]
impl ActorClient<Package> for PackageClient {
    type Error = PackageError;

    fn inner(&self) -> &ResourceClient<Package> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<PackageError>()
            .unwrap_or_else(|e| PackageError::ActorCommunicationError(e.to_string()))
    }
}
