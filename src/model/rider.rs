//! Rider assignment sub-state.
//!
//! The rider reference and the acceptance state are stored together so that a rider is
//! present exactly when acceptance is not `Unassigned`.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// Whether the assigned rider has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiderAcceptance {
    Unassigned,
    PendingResponse,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "acceptance", content = "rider", rename_all = "snake_case")]
pub enum RiderAssignment {
    #[default]
    Unassigned,
    PendingResponse(UserId),
    Accepted(UserId),
}

impl RiderAssignment {
    /// State right after an order is written: pending if a rider was named up front.
    pub fn initial(rider: Option<UserId>) -> Self {
        rider.map_or(Self::Unassigned, Self::PendingResponse)
    }

    pub fn rider(&self) -> Option<UserId> {
        match *self {
            RiderAssignment::Unassigned => None,
            RiderAssignment::PendingResponse(rider) | RiderAssignment::Accepted(rider) => {
                Some(rider)
            }
        }
    }

    pub fn acceptance(&self) -> RiderAcceptance {
        match self {
            RiderAssignment::Unassigned => RiderAcceptance::Unassigned,
            RiderAssignment::PendingResponse(_) => RiderAcceptance::PendingResponse,
            RiderAssignment::Accepted(_) => RiderAcceptance::Accepted,
        }
    }

    pub fn is_awaiting(&self, rider: UserId) -> bool {
        *self == RiderAssignment::PendingResponse(rider)
    }
}
