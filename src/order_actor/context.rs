use crate::clients::{PackageClient, ProductClient, ShopClient, UserClient};
use crate::lifecycle::EngineConfig;
use crate::notify::Notifier;

/// Dependencies injected into the Order actor through `run(context)`.
#[derive(Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub shops: ShopClient,
    pub products: ProductClient,
    pub packages: PackageClient,
    pub notifier: Notifier,
    pub config: EngineConfig,
}
