//! Fire-and-forget order notifications.
//!
//! The order actor publishes an [`OrderNotification`] after every successful change. Delivery
//! is best effort: a full or closed channel is logged and the order operation still succeeds.

use crate::model::{Order, OrderId, OrderStatus, UserId};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Created,
    StatusChanged,
    Cancelled,
    RiderAssigned,
    RiderAccepted,
    RiderRejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderNotification {
    pub order_id: OrderId,
    pub kind: NotificationKind,
    pub status: OrderStatus,
    pub rider: Option<UserId>,
}

impl OrderNotification {
    pub fn new(order: &Order, kind: NotificationKind) -> Self {
        Self {
            order_id: order.id,
            kind,
            status: order.status,
            rider: order.rider_id(),
        }
    }
}

/// Sending half of the notification channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: Option<mpsc::Sender<OrderNotification>>,
}

impl Notifier {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<OrderNotification>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// A notifier that drops everything.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn notify(&self, notification: OrderNotification) {
        let Some(sender) = &self.sender else {
            return;
        };
        debug!(order_id = %notification.order_id, kind = ?notification.kind, "Notify");
        if let Err(e) = sender.try_send(notification) {
            warn!(error = %e, "Dropping order notification");
        }
    }
}
