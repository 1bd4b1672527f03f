use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Shop, ShopCreate, ShopId, ShopUpdate};
use crate::shop_actor::ShopError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Shop actor.
#[derive(Clone)]
pub struct ShopClient {
    inner: ResourceClient<Shop>,
}

impl ShopClient {
    pub fn new(inner: ResourceClient<Shop>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_shop(&self, params: ShopCreate) -> Result<ShopId, ShopError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_shop(&self, id: ShopId, update: ShopUpdate) -> Result<Shop, ShopError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => ShopError::NotFound(id),
            other => Self::map_error(other),
        })
    }
}

#[async_trait]
impl ActorClient<Shop> for ShopClient {
    type Error = ShopError;

    fn inner(&self) -> &ResourceClient<Shop> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ShopError>()
            .unwrap_or_else(|e| ShopError::ActorCommunicationError(e.to_string()))
    }
}
