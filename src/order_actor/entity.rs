//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creation runs the whole composition inside `on_create`: the reference validator, then
//! the line composer, then the header is filled in. The framework inserts the order only
//! if that succeeds, so header and lines are committed together or not at all.
//!
//! Orders have no generic update (`Update = Infallible`). All later changes are
//! [`OrderAction`]s and return the updated order.

use super::actions::OrderAction;
use super::{composer, rider, transitions, validator, OrderContext, OrderError};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, RiderAssignment};
use crate::notify::{NotificationKind, OrderNotification};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::draft(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let cart = std::mem::take(&mut self.cart);
        let prices = validator::validate(self, &cart, ctx).await?;
        let composition = composer::compose(self.id, &cart, &prices)?;

        self.product_lines = composition.product_lines;
        self.package_lines = composition.package_lines;
        self.total_price = composition.total_price;
        self.rider = RiderAssignment::initial(cart.rider_id);

        info!(
            order_id = %self.id,
            lines = self.line_count(),
            total = %self.total_price,
            "Order composed"
        );
        ctx.notifier
            .notify(OrderNotification::new(self, NotificationKind::Created));
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        let policy = ctx.config.transition_policy;
        let kind = match action {
            OrderAction::SetStatus(status) => {
                transitions::set_status(self, status, policy)?;
                NotificationKind::StatusChanged
            }
            OrderAction::Cancel { reason, actor } => {
                transitions::cancel(self, reason, actor)?;
                NotificationKind::Cancelled
            }
            OrderAction::AssignRider(rider_id) => {
                transitions::ensure_live(self)?;
                validator::require_rider(&ctx.users, rider_id).await?;
                rider::assign(self, rider_id)?;
                NotificationKind::RiderAssigned
            }
            OrderAction::RiderRespond {
                rider: rider_id,
                accepted,
            } => {
                rider::respond(self, rider_id, accepted, policy)?;
                if accepted {
                    NotificationKind::RiderAccepted
                } else {
                    NotificationKind::RiderRejected
                }
            }
        };

        self.touch();
        ctx.notifier.notify(OrderNotification::new(self, kind));
        Ok(self.clone())
    }
}
