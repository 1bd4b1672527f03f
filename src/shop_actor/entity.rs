use super::ShopError;
use crate::framework::ActorEntity;
use crate::model::{Shop, ShopCreate, ShopId, ShopUpdate};
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), ShopError> {
    if name.trim().is_empty() {
        return Err(ShopError::ValidationError("shop name must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Shop {
    type Id = ShopId;
    type Create = ShopCreate;
    type Update = ShopUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ShopError;

    fn from_create_params(id: ShopId, params: ShopCreate) -> Result<Self, ShopError> {
        validate_name(&params.name)?;
        Ok(Shop {
            id,
            name: params.name,
            owner_id: params.owner_id,
        })
    }

    async fn on_update(&mut self, update: ShopUpdate, _ctx: &()) -> Result<(), ShopError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ShopError> {
        Ok(())
    }
}
