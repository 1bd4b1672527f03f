use super::EngineConfig;
use crate::clients::{OrderClient, PackageClient, ProductClient, ShopClient, UserClient};
use crate::notify::{Notifier, OrderNotification};
use crate::order_actor::OrderContext;
use tokio::sync::mpsc;
use tracing::{error, info};

/// The runtime orchestrator for the marketplace.
///
/// `MarketplaceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing the collaborator clients and configuration to the actors
///   that need them (packages need products; orders need everything)
///
/// # Example
///
/// ```ignore
/// let mut system = MarketplaceSystem::new(EngineConfig::from_env()?);
///
/// let shop_id = system.shop_client.create_shop(shop).await?;
/// let order = system.order_client.create_order(params).await?;
/// let event = system.notifications.recv().await;
///
/// system.shutdown().await?;
/// ```
pub struct MarketplaceSystem {
    pub user_client: UserClient,
    pub shop_client: ShopClient,
    pub product_client: ProductClient,
    pub package_client: PackageClient,
    pub order_client: OrderClient,

    /// Events published by the order actor.
    pub notifications: mpsc::Receiver<OrderNotification>,

    config: EngineConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MarketplaceSystem {
    /// Creates and starts every actor. Must be called inside a Tokio runtime.
    pub fn new(config: EngineConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors (no dependencies yet)
        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (shop_actor, shop_client) = crate::shop_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (package_actor, package_client) = crate::package_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);
        let (notifier, notifications) = Notifier::new(buffer);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let shop_handle = tokio::spawn(shop_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let package_handle = tokio::spawn(package_actor.run(product_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            users: user_client.clone(),
            shops: shop_client.clone(),
            products: product_client.clone(),
            packages: package_client.clone(),
            notifier,
            config: config.clone(),
        }));

        info!(?config, "Marketplace started");

        Self {
            user_client,
            shop_client,
            product_client,
            package_client,
            order_client,
            notifications,
            config,
            // Dependents first: each actor's clients live in the context of the ones above it.
            handles: vec![
                order_handle,
                package_handle,
                product_handle,
                shop_handle,
                user_handle,
            ],
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; an actor that holds another actor's client in
    /// its context releases it when its own loop ends, so the dependency graph unwinds from
    /// the order actor down to the user actor.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace...");

        drop(self.order_client);
        drop(self.package_client);
        drop(self.product_client);
        drop(self.shop_client);
        drop(self.user_client);
        drop(self.notifications);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Marketplace shutdown complete.");
        Ok(())
    }
}
