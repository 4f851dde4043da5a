//! Common error infrastructure for combat-core.
//!
//! Expected rejections (an NPC with no ally in range, an unaligned reference
//! entity, starting combat with nobody queued) are reported as typed errors
//! defined next to the operations that produce them. Contract violations
//! (unknown handles, missing queue entries, overspending) are caller bugs and
//! panic instead.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The request was refused but may succeed later once the situation
    /// changes (an ally walks into range).
    Recoverable,

    /// The request is invalid as stated and should not be retried unchanged.
    Validation,
}

impl ErrorSeverity {
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all combat-core errors.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
