//! Demo: seed a shop, place an order, run it through the rider protocol and to delivery.

use marketplace_orders::lifecycle::{setup_tracing, EngineConfig, MarketplaceSystem};
use marketplace_orders::model::{
    OrderCreate, PackageCreate, ProductCreate, Role, ShopCreate, UserCreate,
};
use rust_decimal::Decimal;
use std::error::Error;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = EngineConfig::from_env()?;
    info!(?config, "Starting marketplace demo");
    let mut system = MarketplaceSystem::new(config);

    let span = tracing::info_span!("seeding");
    let (customer, rider, shop, bread, breakfast) = async {
        let owner = system
            .user_client
            .create_user(UserCreate {
                name: "Marta".into(),
                email: "marta@bakery.example".into(),
                role: Role::ShopOwner,
            })
            .await?;
        let customer = system
            .user_client
            .create_user(UserCreate {
                name: "Alice".into(),
                email: "alice@example.com".into(),
                role: Role::Customer,
            })
            .await?;
        let rider = system
            .user_client
            .create_user(UserCreate {
                name: "Rui".into(),
                email: "rui@couriers.example".into(),
                role: Role::Rider,
            })
            .await?;
        let shop = system
            .shop_client
            .create_shop(ShopCreate {
                name: "Corner Bakery".into(),
                owner_id: Some(owner),
            })
            .await?;
        let bread = system
            .product_client
            .create_product(ProductCreate {
                shop_id: shop,
                name: "Sourdough".into(),
                price: Decimal::new(1000, 2),
            })
            .await?;
        let coffee = system
            .product_client
            .create_product(ProductCreate {
                shop_id: shop,
                name: "Coffee".into(),
                price: Decimal::new(350, 2),
            })
            .await?;
        let breakfast = system
            .package_client
            .create_package(PackageCreate {
                shop_id: shop,
                name: "Breakfast for two".into(),
                price: Decimal::new(2500, 2),
                contents: vec![bread, coffee],
            })
            .await?;
        Ok::<_, Box<dyn Error>>((customer, rider, shop, bread, breakfast))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_placement");
    let placed = async {
        system
            .order_client
            .create_order(
                OrderCreate::new(customer, shop)
                    .product(bread, 2)
                    .package(breakfast, 1)
                    .deliver_to("12 Harbour Street")
                    .notes("Leave at the door"),
            )
            .await
    }
    .instrument(span)
    .await;

    let order = match placed {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Order rejected");
            system.shutdown().await?;
            return Err(e.into());
        }
    };
    info!(order_id = %order.id, total = %order.total_price, "Order placed");

    let span = tracing::info_span!("fulfillment", order_id = %order.id);
    async {
        system.order_client.assign_rider(order.id, rider).await?;
        system.order_client.rider_respond(order.id, rider, true).await?;
        for status in ["preparing", "ready", "delivered"] {
            let order = system.order_client.set_order_status(order.id, status).await?;
            info!(status = %order.status, "Status updated");
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let view = system
        .order_client
        .view(order.id, &system.user_client, &system.shop_client)
        .await?;
    info!(?view, "Final order");

    while let Ok(event) = system.notifications.try_recv() {
        info!(order_id = %event.order_id, kind = ?event.kind, status = %event.status, "Notification");
    }

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
