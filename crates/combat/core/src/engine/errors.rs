//! Expected rejections surfaced by the engine.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::EntityId;

/// Reasons an alignment request was refused. Nothing is mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentError {
    #[error("no aligned combatant is within range of {entity}")]
    NoAllyInRange { entity: EntityId },

    #[error("reference entity {reference} has no alignment")]
    ReferenceUnaligned { reference: EntityId },
}

impl CombatError for AlignmentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoAllyInRange { .. } => ErrorSeverity::Recoverable,
            Self::ReferenceUnaligned { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoAllyInRange { .. } => "ALIGNMENT_NO_ALLY_IN_RANGE",
            Self::ReferenceUnaligned { .. } => "ALIGNMENT_REFERENCE_UNALIGNED",
        }
    }
}

/// Errors from combat lifecycle transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no combatants are queued")]
    EmptyTurnQueue,

    #[error("combat is already active")]
    AlreadyActive,

    #[error("combat is not active")]
    NotActive,
}

impl CombatError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyTurnQueue => ErrorSeverity::Recoverable,
            Self::AlreadyActive | Self::NotActive => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTurnQueue => "TURN_EMPTY_QUEUE",
            Self::AlreadyActive => "TURN_ALREADY_ACTIVE",
            Self::NotActive => "TURN_NOT_ACTIVE",
        }
    }
}
