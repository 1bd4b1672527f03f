//! Fulfillment status changes and cancellation.
//!
//! Each function checks everything before it writes, so an `Err` leaves the order as it was.

use super::OrderError;
use crate::model::{AuditEntry, Order, OrderStatus, TransitionPolicy, UserId};
use chrono::Utc;

pub const DEFAULT_CANCEL_REASON: &str = "no reason given";

pub fn ensure_live(order: &Order) -> Result<(), OrderError> {
    if order.status.is_terminal() {
        return Err(OrderError::AlreadyTerminal(order.status));
    }
    Ok(())
}

pub fn set_status(
    order: &mut Order,
    to: OrderStatus,
    policy: TransitionPolicy,
) -> Result<(), OrderError> {
    ensure_live(order)?;
    if !order.status.allows(to, policy) {
        return Err(OrderError::DisallowedTransition {
            from: order.status,
            to,
        });
    }
    order.status = to;
    Ok(())
}

pub fn cancel(
    order: &mut Order,
    reason: Option<String>,
    actor: Option<UserId>,
) -> Result<(), OrderError> {
    ensure_live(order)?;
    let reason = reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CANCEL_REASON.to_string());
    order.audit.push(AuditEntry {
        at: Utc::now(),
        actor,
        reason,
    });
    order.status = OrderStatus::Cancelled;
    Ok(())
}
