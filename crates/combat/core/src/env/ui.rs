//! Interface layer collaborator.

use crate::state::{ActionPoints, Alignment, EntityId};

/// Screen currently shown by the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum UiScreen {
    /// Default in-game interface.
    Main,
    /// The player's inventory/profile sheet.
    PlayerProfile,
    /// Dialogue, trading, menus, and other modal screens.
    Other,
}

/// Displays driven by the scheduler.
pub trait UiOracle {
    fn current_screen(&self) -> UiScreen;

    fn set_combat_mode(&self, active: bool);

    /// Shows whose turn it is; `None` clears the display.
    fn show_turn_holder(&self, entity: Option<EntityId>);

    /// Shows the holder's remaining points; `None` clears the display.
    fn show_action_points(&self, points: Option<ActionPoints>);

    /// Toggles the "has turn" marker drawn on an entity.
    fn set_turn_marker(&self, entity: EntityId, has_turn: bool);

    /// Shows the faction selector under an entity; `Alignment::None` removes it.
    fn set_combat_selector(&self, entity: EntityId, alignment: Alignment);

    /// Writes a line to the player console.
    fn console_write(&self, line: &str);
}
