//! Start, end, and per-tick evaluation of combat.

use tracing::{debug, info, warn};

use super::{CombatEngine, TurnError};
use crate::env::{ScriptEvent, UiScreen};
use crate::events::CombatEvent;
use crate::state::SimulationMode;

impl CombatEngine<'_> {
    /// Evaluates the combat condition once per world tick.
    ///
    /// Ends an active combat whose condition no longer holds. Starts combat
    /// when the condition holds and the interface is on its main screen.
    pub fn update(&mut self) {
        self.assert_initialized();
        let condition = self.env.world().combat_condition();

        if self.state.active {
            if !condition {
                self.finish_combat(true);
            }
            return;
        }

        if condition
            && self.env.ui().current_screen() == UiScreen::Main
            && let Err(error) = self.start_combat()
        {
            debug!(target: "combat::lifecycle", %error, "combat not started");
        }
    }

    /// Switches the world to turn-based mode and gives the head of the
    /// queue the first turn.
    pub fn start_combat(&mut self) -> Result<(), TurnError> {
        self.assert_initialized();
        if self.state.active {
            return Err(TurnError::AlreadyActive);
        }
        let Some(first) = self.state.turns.begin() else {
            return Err(TurnError::EmptyTurnQueue);
        };

        self.state.active = true;
        self.env.world().set_simulation_mode(SimulationMode::TurnBased);
        self.env.ui().set_combat_mode(true);
        self.state.record(CombatEvent::CombatStarted { first });
        info!(
            target: "combat::lifecycle",
            first = %first,
            combatants = self.state.turns.queue_len(),
            "combat started"
        );

        self.activate_holder();
        let script = self.state.config.start_script.as_deref();
        self.env.scripts().dispatch(ScriptEvent::CombatStarted, script);
        Ok(())
    }

    /// Tears the combat down and returns the world to real time.
    ///
    /// The player's alignment is restored afterwards, outside of combat, so
    /// the player stays engageable.
    pub fn end_combat(&mut self) -> Result<(), TurnError> {
        self.assert_initialized();
        if !self.state.active {
            return Err(TurnError::NotActive);
        }
        self.finish_combat(true);
        Ok(())
    }

    /// Teardown shared by every path that ends a combat.
    pub(super) fn finish_combat(&mut self, restore_player: bool) {
        let player = self.env.world().player();
        let player_alignment = self.state.alignments.alignment(player);
        let rounds = self.state.turns.round();

        if let Some(holder) = self.state.turns.holder() {
            self.env.ui().set_turn_marker(holder, false);
        }
        for (entity, alignment) in self.state.alignments.drain() {
            self.forget(entity, alignment);
        }
        self.state.turns.clear();
        self.state.ledger.reset();
        self.state.active = false;

        self.env.world().set_simulation_mode(SimulationMode::RealTime);
        let ui = self.env.ui();
        ui.show_turn_holder(None);
        ui.show_action_points(None);
        ui.set_combat_mode(false);

        self.state.record(CombatEvent::CombatEnded { rounds });
        info!(target: "combat::lifecycle", rounds, "combat ended");

        if restore_player
            && !player_alignment.is_none()
            && let Err(error) = self.set_alignment(player, player_alignment)
        {
            warn!(
                target: "combat::lifecycle",
                player = %player,
                %error,
                "could not restore player alignment"
            );
        }

        let script = self.state.config.end_script.as_deref();
        self.env.scripts().dispatch(ScriptEvent::CombatEnded, script);
    }
}
