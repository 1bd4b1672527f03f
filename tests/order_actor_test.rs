use marketplace_orders::clients::{
    ActorClient, OrderClient, PackageClient, ProductClient, ShopClient, UserClient,
};
use marketplace_orders::framework::mock::MockClient;
use marketplace_orders::framework::FrameworkError;
use marketplace_orders::lifecycle::EngineConfig;
use marketplace_orders::model::{
    OrderCreate, Package, PackageId, Product, ProductId, RiderAcceptance, Role, Shop, ShopId,
    User, UserId,
};
use marketplace_orders::notify::Notifier;
use marketplace_orders::order_actor::{self, EntityKind, OrderContext, OrderError};
use rust_decimal_macros::dec;

const CUSTOMER: UserId = UserId(1);
const RIDER: UserId = UserId(2);
const SHOP: ShopId = ShopId(1);

/// Scripted collaborators for one order actor.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (validation and composition in on_create)
/// - Mocked users/shops/products/packages, answered in the order the validator asks
struct Mocks {
    users: MockClient<User>,
    shops: MockClient<Shop>,
    products: MockClient<Product>,
    packages: MockClient<Package>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            users: MockClient::new(),
            shops: MockClient::new(),
            products: MockClient::new(),
            packages: MockClient::new(),
        }
    }

    fn expect_customer_and_shop(&mut self) {
        self.users
            .expect_get(CUSTOMER)
            .return_ok(Some(User::new(CUSTOMER, "Alice", "alice@example.com", Role::Customer)));
        self.shops.expect_get(SHOP).return_ok(Some(Shop {
            id: SHOP,
            name: "Corner Bakery".into(),
            owner_id: None,
        }));
    }

    fn spawn(
        &self,
        config: EngineConfig,
    ) -> (OrderClient, tokio::task::JoinHandle<()>) {
        let (actor, client) = order_actor::new(8);
        let handle = tokio::spawn(actor.run(OrderContext {
            users: UserClient::new(self.users.client()),
            shops: ShopClient::new(self.shops.client()),
            products: ProductClient::new(self.products.client()),
            packages: PackageClient::new(self.packages.client()),
            notifier: Notifier::disabled(),
            config,
        }));
        (client, handle)
    }

    fn verify(&self) {
        self.users.verify();
        self.shops.verify();
        self.products.verify();
        self.packages.verify();
    }
}

fn product(id: u32, shop: ShopId, price: rust_decimal::Decimal) -> Product {
    Product::new(ProductId(id), shop, format!("Product {id}"), price)
}

#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut mocks = Mocks::new();
    mocks.expect_customer_and_shop();
    mocks
        .users
        .expect_get(RIDER)
        .return_ok(Some(User::new(RIDER, "Rui", "rui@example.com", Role::Rider)));
    mocks
        .products
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, SHOP, dec!(10.00))));
    mocks.packages.expect_get(PackageId(1)).return_ok(Some(Package {
        id: PackageId(1),
        shop_id: SHOP,
        name: "Breakfast".into(),
        price: dec!(25.00),
        contents: vec![ProductId(1)],
    }));

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let order = order_client
        .create_order(
            OrderCreate::new(CUSTOMER, SHOP)
                .product(ProductId(1), 2)
                .package(PackageId(1), 1)
                .rider(RIDER),
        )
        .await
        .expect("Order creation failed");

    assert_eq!(order.total_price, dec!(45.00));
    assert_eq!(order.rider_id(), Some(RIDER));
    assert_eq!(order.rider_acceptance(), RiderAcceptance::PendingResponse);
    let seqs: Vec<u32> = order
        .line_item_refs()
        .into_iter()
        .chain(order.package_line_refs())
        .map(|line| line.seq)
        .collect();
    assert_eq!(seqs, vec![1, 2]);

    let retrieved = order_client.get(order.id).await.unwrap();
    assert_eq!(retrieved, Some(order));

    mocks.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// The same product listed twice is looked up once and priced from one snapshot.
#[tokio::test]
async fn test_repeated_item_is_looked_up_once() {
    let mut mocks = Mocks::new();
    mocks.expect_customer_and_shop();
    mocks
        .products
        .expect_get(ProductId(4))
        .return_ok(Some(product(4, SHOP, dec!(1.25))));

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let order = order_client
        .create_order(
            OrderCreate::new(CUSTOMER, SHOP)
                .product(ProductId(4), 2)
                .product(ProductId(4), 2),
        )
        .await
        .unwrap();
    assert_eq!(order.product_lines.len(), 2);
    assert_eq!(order.total_price, dec!(5.00));

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_customer_stops_before_other_lookups() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(CUSTOMER).return_ok(None);

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let result = order_client
        .create_order(OrderCreate::new(CUSTOMER, SHOP).product(ProductId(1), 1))
        .await;
    assert_eq!(result, Err(OrderError::NotFound(EntityKind::Customer)));
    assert!(order_client.list().await.unwrap().is_empty());

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_cross_shop_package_is_rejected() {
    let mut mocks = Mocks::new();
    mocks.expect_customer_and_shop();
    mocks
        .products
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, SHOP, dec!(10.00))));
    mocks.packages.expect_get(PackageId(7)).return_ok(Some(Package {
        id: PackageId(7),
        shop_id: ShopId(2),
        name: "Tea set".into(),
        price: dec!(8.00),
        contents: vec![],
    }));

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let result = order_client
        .create_order(
            OrderCreate::new(CUSTOMER, SHOP)
                .product(ProductId(1), 1)
                .package(PackageId(7), 1),
        )
        .await;
    assert_eq!(
        result,
        Err(OrderError::CrossShopReference {
            item: PackageId(7).into(),
            shop: SHOP
        })
    );
    assert_eq!(order_client.line_count().await.unwrap(), 0);

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_collaborator_failure_is_unavailable() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(CUSTOMER).return_err(FrameworkError::ActorClosed);

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let result = order_client
        .create_order(OrderCreate::new(CUSTOMER, SHOP).product(ProductId(1), 1))
        .await;
    assert!(matches!(result, Err(OrderError::Unavailable(_))));
    assert!(order_client.list().await.unwrap().is_empty());

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_assign_rider_checks_role_with_user_lookup() {
    let mut mocks = Mocks::new();
    mocks.expect_customer_and_shop();
    mocks
        .products
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, SHOP, dec!(3.00))));
    mocks
        .users
        .expect_get(CUSTOMER)
        .return_ok(Some(User::new(CUSTOMER, "Alice", "alice@example.com", Role::Customer)));
    mocks
        .users
        .expect_get(RIDER)
        .return_ok(Some(User::new(RIDER, "Rui", "rui@example.com", Role::Rider)));

    let (order_client, actor_handle) = mocks.spawn(EngineConfig::default());

    let order = order_client
        .create_order(OrderCreate::new(CUSTOMER, SHOP).product(ProductId(1), 1))
        .await
        .unwrap();
    assert_eq!(
        order_client.assign_rider(order.id, CUSTOMER).await,
        Err(OrderError::InvalidRole(Role::Rider))
    );
    let assigned = order_client.assign_rider(order.id, RIDER).await.unwrap();
    assert_eq!(assigned.rider_acceptance(), RiderAcceptance::PendingResponse);

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}
