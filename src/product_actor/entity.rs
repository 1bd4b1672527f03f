//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products have no custom actions. A price change goes through the regular update path
//! ([`ProductUpdate::price`]) and never touches orders that were already composed.

use super::ProductError;
use crate::framework::ActorEntity;
use crate::model::{check_listed_price, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "product name must not be empty".into(),
            ));
        }
        check_listed_price(params.price, ProductError::InvalidPrice)?;
        Ok(Product::new(id, params.shop_id, params.name, params.price))
    }

    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Current unit price
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            check_listed_price(price, ProductError::InvalidPrice)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ProductError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShopId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_price_rejected() {
        let params = ProductCreate {
            shop_id: ShopId(1),
            name: "Bread".into(),
            price: dec!(-1.00),
        };
        assert_eq!(
            Product::from_create_params(ProductId(1), params).unwrap_err(),
            ProductError::InvalidPrice(dec!(-1.00))
        );
    }

    #[tokio::test]
    async fn test_reprice_keeps_shop() {
        let mut product = Product::new(ProductId(1), ShopId(2), "Bread", dec!(3.00));
        let update = ProductUpdate {
            name: None,
            price: Some(dec!(3.50)),
        };
        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.price, dec!(3.50));
        assert_eq!(product.shop_id, ShopId(2));
    }
}
