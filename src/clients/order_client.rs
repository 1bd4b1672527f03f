//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; validation and composition happen inside the
//! actor (`Order::on_create`), the client only shapes requests and errors.
use crate::clients::{ShopClient, UserClient};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderView, UserId};
use crate::order_actor::{EntityKind, OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validate, price and commit a new order. Returns the order as committed, before any
    /// later request could touch it.
    #[instrument(skip(self, params), fields(customer = %params.customer_id, shop = %params.shop_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        let (_, order) = self
            .inner
            .create_entity(params)
            .await
            .map_err(Self::map_error)?;
        Ok(order)
    }

    /// Parse `status` and apply it. Unknown names fail with [`OrderError::InvalidStatus`].
    #[instrument(skip(self))]
    pub async fn set_order_status(&self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = status.parse()?;
        self.transition(id, status).await
    }

    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.act(id, OrderAction::SetStatus(status)).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        id: OrderId,
        reason: Option<String>,
        actor: Option<UserId>,
    ) -> Result<Order, OrderError> {
        self.act(id, OrderAction::Cancel { reason, actor }).await
    }

    #[instrument(skip(self))]
    pub async fn assign_rider(&self, id: OrderId, rider: UserId) -> Result<Order, OrderError> {
        self.act(id, OrderAction::AssignRider(rider)).await
    }

    #[instrument(skip(self))]
    pub async fn rider_respond(
        &self,
        id: OrderId,
        rider: UserId,
        accepted: bool,
    ) -> Result<Order, OrderError> {
        self.act(id, OrderAction::RiderRespond { rider, accepted })
            .await
    }

    /// The order with its customer, shop and rider resolved to summaries.
    #[instrument(skip(self, users, shops))]
    pub async fn view(
        &self,
        id: OrderId,
        users: &UserClient,
        shops: &ShopClient,
    ) -> Result<OrderView, OrderError> {
        let order = self.require(id).await?;
        let customer = users.get(order.customer_id).await?;
        let shop = shops.get(order.shop_id).await?;
        let rider = match order.rider_id() {
            Some(rider_id) => users.get(rider_id).await?,
            None => None,
        };
        Ok(OrderView::new(
            order,
            customer.as_ref(),
            shop.as_ref(),
            rider.as_ref(),
        ))
    }

    /// Number of committed line records across all orders.
    #[instrument(skip(self))]
    pub async fn line_count(&self) -> Result<usize, OrderError> {
        let orders = self.list().await?;
        Ok(orders.iter().map(Order::line_count).sum())
    }

    async fn require(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or(OrderError::NotFound(EntityKind::Order))
    }

    async fn act(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(order_error) => order_error,
            Err(FrameworkError::NotFound(_)) => OrderError::NotFound(EntityKind::Order),
            Err(other) => OrderError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::framework::ResourceRequest;
    use crate::model::{ProductId, RiderAssignment, ShopId};

    #[tokio::test]
    async fn test_set_order_status_rejects_unknown_name_without_sending() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);

        let err = orders
            .set_order_status(OrderId(1), "shipped")
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::InvalidStatus("shipped".into()));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_set_order_status_sends_parsed_status() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.set_order_status(OrderId(2), "Ready").await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(2));
        assert_eq!(action, OrderAction::SetStatus(OrderStatus::Ready));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::AlreadyTerminal(OrderStatus::Delivered),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            OrderError::AlreadyTerminal(OrderStatus::Delivered)
        );
    }

    #[tokio::test]
    async fn test_create_order_returns_committed_state_without_reading_back() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            orders
                .create_order(OrderCreate::new(UserId(1), ShopId(1)).product(ProductId(1), 1))
                .await
        });

        let Some(ResourceRequest::Create { params, respond_to }) = receiver.recv().await else {
            panic!("Expected Create request");
        };
        let committed = Order::draft(OrderId(1), params);
        respond_to.send(Ok((OrderId(1), committed.clone()))).unwrap();

        let order = task.await.unwrap().unwrap();
        assert_eq!(order, committed);
        assert_eq!(order.rider, RiderAssignment::Unassigned);
        // The sender is gone and nothing else was queued.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_order_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.assign_rider(OrderId(5), UserId(1)).await });
        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("order_5".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            OrderError::NotFound(EntityKind::Order)
        );
    }
}
