//! Rider assignment protocol.
//!
//! Role checks need the user actor and happen in the entity before [`assign`] is called;
//! the functions here only move the `(rider, acceptance)` sub-state.

use super::transitions::ensure_live;
use super::OrderError;
use crate::model::{Order, OrderStatus, RiderAssignment, TransitionPolicy, UserId};

/// Offer the order to `rider`, replacing any earlier assignment.
pub fn assign(order: &mut Order, rider: UserId) -> Result<(), OrderError> {
    ensure_live(order)?;
    order.rider = RiderAssignment::PendingResponse(rider);
    Ok(())
}

/// Record the assigned rider's answer.
///
/// Acceptance confirms the order. Under [`TransitionPolicy::Strict`] an order that has
/// already moved past `Confirmed` keeps its status.
pub fn respond(
    order: &mut Order,
    rider: UserId,
    accepted: bool,
    policy: TransitionPolicy,
) -> Result<(), OrderError> {
    if order.rider_id() != Some(rider) {
        return Err(OrderError::NotAssignedToYou);
    }
    ensure_live(order)?;
    if !order.rider.is_awaiting(rider) {
        return Err(OrderError::AlreadyResponded);
    }

    if accepted {
        order.rider = RiderAssignment::Accepted(rider);
        if policy == TransitionPolicy::Permissive || order.status == OrderStatus::Pending {
            order.status = OrderStatus::Confirmed;
        }
    } else {
        order.rider = RiderAssignment::Unassigned;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderId, RiderAcceptance, ShopId};

    const RIDER: UserId = UserId(7);

    fn pending_order() -> Order {
        Order::draft(OrderId(1), OrderCreate::new(UserId(1), ShopId(1)))
    }

    #[test]
    fn test_accept_confirms() {
        let mut order = pending_order();
        assign(&mut order, RIDER).unwrap();
        respond(&mut order, RIDER, true, TransitionPolicy::Permissive).unwrap();

        assert_eq!(order.rider_acceptance(), RiderAcceptance::Accepted);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(
            respond(&mut order, RIDER, true, TransitionPolicy::Permissive),
            Err(OrderError::AlreadyResponded)
        );
    }

    #[test]
    fn test_reject_clears_rider() {
        let mut order = pending_order();
        order.status = OrderStatus::Preparing;
        assign(&mut order, RIDER).unwrap();
        respond(&mut order, RIDER, false, TransitionPolicy::Permissive).unwrap();

        assert_eq!(order.rider_id(), None);
        assert_eq!(order.rider_acceptance(), RiderAcceptance::Unassigned);
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_other_rider_cannot_respond() {
        let mut order = pending_order();
        assign(&mut order, RIDER).unwrap();
        assert_eq!(
            respond(&mut order, UserId(8), true, TransitionPolicy::Permissive),
            Err(OrderError::NotAssignedToYou)
        );
        assert_eq!(order.rider_acceptance(), RiderAcceptance::PendingResponse);
    }

    #[test]
    fn test_assigned_rider_checked_before_terminal() {
        let mut order = pending_order();
        assign(&mut order, RIDER).unwrap();
        order.status = OrderStatus::Cancelled;

        assert_eq!(
            respond(&mut order, UserId(8), true, TransitionPolicy::Permissive),
            Err(OrderError::NotAssignedToYou)
        );
        assert_eq!(
            respond(&mut order, RIDER, true, TransitionPolicy::Permissive),
            Err(OrderError::AlreadyTerminal(OrderStatus::Cancelled))
        );
        assert_eq!(assign(&mut order, RIDER), Err(OrderError::AlreadyTerminal(OrderStatus::Cancelled)));
    }

    #[test]
    fn test_strict_accept_does_not_move_backwards() {
        let mut order = pending_order();
        order.status = OrderStatus::Ready;
        assign(&mut order, RIDER).unwrap();
        respond(&mut order, RIDER, true, TransitionPolicy::Strict).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.rider_acceptance(), RiderAcceptance::Accepted);
    }

    #[test]
    fn test_reassign_replaces_pending_rider() {
        let mut order = pending_order();
        assign(&mut order, RIDER).unwrap();
        assign(&mut order, UserId(8)).unwrap();
        assert_eq!(order.rider_id(), Some(UserId(8)));
        assert_eq!(
            respond(&mut order, RIDER, true, TransitionPolicy::Permissive),
            Err(OrderError::NotAssignedToYou)
        );
    }
}
