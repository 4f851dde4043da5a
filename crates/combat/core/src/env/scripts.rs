//! Script runtime collaborator.

/// Combat notifications understood by the script runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScriptEvent {
    CombatStarted,
    CombatEnded,
}

/// Fire-and-forget event dispatch.
pub trait ScriptOracle {
    /// Runs `script` (if configured) for `event`. Completion is reported back
    /// through [`crate::engine::CombatEngine::on_script_event`].
    fn dispatch(&self, event: ScriptEvent, script: Option<&str>);
}
