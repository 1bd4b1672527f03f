//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](super::ResourceClient) and
//! [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants are the CRUD lifecycle (`Create`, `Get`, `Update`, `Delete`), a `List`
/// read over the whole store, and `Action` for resource-specific operations such as the
/// order state machine transitions.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Answered with the new id and the entity as it was committed.
    Create {
        params: T::Create,
        respond_to: Response<(T::Id, T)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
