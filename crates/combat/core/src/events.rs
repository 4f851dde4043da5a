//! Scheduler-side events drained by the host after each call.

use crate::state::{ActionPoints, Alignment, EntityId, QueueKind};

/// Something observable that happened inside the scheduler.
///
/// Events are appended in the order they occur, including those produced by
/// nested calls (an alignment change that ends a turn that ends the combat).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    CombatStarted {
        first: EntityId,
    },
    CombatEnded {
        rounds: u32,
    },
    TurnStarted {
        entity: EntityId,
        round: u32,
        action_points: ActionPoints,
    },
    RoundCompleted {
        round: u32,
    },
    AlignmentChanged {
        entity: EntityId,
        from: Alignment,
        to: Alignment,
    },
    Enqueued {
        entity: EntityId,
        queue: QueueKind,
    },
    Dequeued {
        entity: EntityId,
    },
    ActionPointsSpent {
        entity: EntityId,
        cost: ActionPoints,
        remaining: ActionPoints,
    },
}
