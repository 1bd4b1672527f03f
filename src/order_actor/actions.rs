//! Custom actions for the Order actor.
//!
//! Every mutation of a committed order goes through one of these. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action), which
//! returns the updated order.

use crate::model::{OrderStatus, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Move the fulfillment status, subject to the configured transition policy.
    SetStatus(OrderStatus),
    /// Cancel and record who did it and why.
    Cancel {
        reason: Option<String>,
        actor: Option<UserId>,
    },
    /// Offer the delivery to a rider. Replaces any previous rider.
    AssignRider(UserId),
    /// The assigned rider accepts or rejects.
    RiderRespond { rider: UserId, accepted: bool },
}
