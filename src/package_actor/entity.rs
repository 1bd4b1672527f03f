//! [`ActorEntity`] implementation for [`Package`].
//!
//! A package is checked against the product catalog when it is created: every bundled
//! product must exist and be sold by the package's shop.

use super::PackageError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{check_listed_price, Package, PackageCreate, PackageId, PackageUpdate};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Package {
    type Id = PackageId;
    type Create = PackageCreate;
    type Update = PackageUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ProductClient;
    type Error = PackageError;

    fn from_create_params(id: PackageId, params: PackageCreate) -> Result<Self, PackageError> {
        if params.name.trim().is_empty() {
            return Err(PackageError::ValidationError(
                "package name must not be empty".into(),
            ));
        }
        if params.contents.is_empty() {
            return Err(PackageError::EmptyBundle);
        }
        check_listed_price(params.price, PackageError::InvalidPrice)?;
        Ok(Package {
            id,
            shop_id: params.shop_id,
            name: params.name,
            price: params.price,
            contents: params.contents,
        })
    }

    async fn on_create(&mut self, products: &ProductClient) -> Result<(), PackageError> {
        for product_id in &self.contents {
            let product = products.get(*product_id).await?;
            match product {
                Some(product) if product.shop_id == self.shop_id => {
                    debug!(package = %self.id, product = %product_id, "Bundled product ok");
                }
                _ => {
                    return Err(PackageError::ForeignProduct {
                        product: *product_id,
                        shop: self.shop_id,
                    })
                }
            }
        }
        Ok(())
    }

    /// # Fields Updated
    /// - `name`: Package name
    /// - `price`: Bundle price; orders already composed keep their snapshot
    async fn on_update(
        &mut self,
        update: PackageUpdate,
        _products: &ProductClient,
    ) -> Result<(), PackageError> {
        if let Some(price) = update.price {
            check_listed_price(price, PackageError::InvalidPrice)?;
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _products: &ProductClient) -> Result<(), PackageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, ShopId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_bundle_price_is_rejected() {
        let result = Package::from_create_params(
            PackageId(1),
            PackageCreate {
                shop_id: ShopId(1),
                name: "Picnic".into(),
                price: dec!(-5.00),
                contents: vec![ProductId(1)],
            },
        );
        assert_eq!(result.unwrap_err(), PackageError::InvalidPrice(dec!(-5.00)));
    }
}
