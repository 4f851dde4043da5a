//! Traits describing the collaborators the scheduler talks to.
//!
//! The world, creatures, rules database, interface, and script runtime are
//! owned elsewhere. [`CombatEnv`] bundles borrowed trait objects for them so
//! the engine can reach everything it needs without coupling to concrete
//! implementations. Collaborators are used from a single thread; methods
//! take `&self` and implementations keep their own interior state.
mod creatures;
mod rules;
mod scripts;
mod ui;
mod world;

pub use creatures::CreatureOracle;
pub use rules::RulesOracle;
pub use scripts::{ScriptEvent, ScriptOracle};
pub use ui::{UiOracle, UiScreen};
pub use world::WorldOracle;

/// Aggregates the collaborators required by the engine.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    world: &'a dyn WorldOracle,
    creatures: &'a dyn CreatureOracle,
    rules: &'a dyn RulesOracle,
    ui: &'a dyn UiOracle,
    scripts: &'a dyn ScriptOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        world: &'a dyn WorldOracle,
        creatures: &'a dyn CreatureOracle,
        rules: &'a dyn RulesOracle,
        ui: &'a dyn UiOracle,
        scripts: &'a dyn ScriptOracle,
    ) -> Self {
        Self {
            world,
            creatures,
            rules,
            ui,
            scripts,
        }
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }

    pub fn creatures(&self) -> &'a dyn CreatureOracle {
        self.creatures
    }

    pub fn rules(&self) -> &'a dyn RulesOracle {
        self.rules
    }

    pub fn ui(&self) -> &'a dyn UiOracle {
        self.ui
    }

    pub fn scripts(&self) -> &'a dyn ScriptOracle {
        self.scripts
    }
}

impl std::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatEnv").finish_non_exhaustive()
    }
}
