//! In-memory world standing in for the game engine.
//!
//! Positions are a single lane of integers; everything within
//! [`ENGAGE_RANGE`] steps can engage. The host answers the scheduler's
//! queries and records its commands, and the driver reads those records to
//! play out each turn.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use combat_core::{
    ActionPoints, Alignment, AttributeId, CreatureOracle, EntityId, EntityKind, EquipmentSlot,
    ItemTypeId, ScriptEvent, ScriptOracle, SimulationMode, UiOracle, UiScreen, ValueKind,
    WorldOracle,
};
use tracing::{debug, info};

/// Attribute ranked by the bundled configuration.
pub const INITIATIVE: AttributeId = AttributeId(3);

/// Distance within which two actors can engage each other.
pub const ENGAGE_RANGE: i32 = 5;

/// Distance within which a strike lands.
pub const MELEE_REACH: i32 = 1;

#[derive(Clone, Debug)]
pub struct Actor {
    pub name: &'static str,
    pub kind: EntityKind,
    pub max_health: i32,
    pub health: i32,
    pub budget: ActionPoints,
    pub initiative: i32,
    pub position: i32,
    pub hostile: bool,
    pub weapon: Option<ItemTypeId>,
}

impl Actor {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

pub struct SimHost {
    actors: RefCell<BTreeMap<EntityId, Actor>>,
    player: EntityId,
    mode: Cell<SimulationMode>,
    observed: RefCell<BTreeSet<EntityId>>,
    turn_hooks: RefCell<VecDeque<EntityId>>,
    scripts: RefCell<VecDeque<ScriptEvent>>,
}

impl SimHost {
    pub fn new(player: EntityId) -> Self {
        Self {
            actors: RefCell::new(BTreeMap::new()),
            player,
            mode: Cell::new(SimulationMode::RealTime),
            observed: RefCell::new(BTreeSet::new()),
            turn_hooks: RefCell::new(VecDeque::new()),
            scripts: RefCell::new(VecDeque::new()),
        }
    }

    pub fn spawn(&self, entity: EntityId, actor: Actor) {
        debug!(target: "combat_sim::world", entity = %entity, name = actor.name, "spawned");
        self.actors.borrow_mut().insert(entity, actor);
    }

    pub fn actor(&self, entity: EntityId) -> Option<Actor> {
        self.actors.borrow().get(&entity).cloned()
    }

    pub fn actors(&self) -> Vec<(EntityId, Actor)> {
        self.actors
            .borrow()
            .iter()
            .map(|(entity, actor)| (*entity, actor.clone()))
            .collect()
    }

    pub fn distance(&self, a: EntityId, b: EntityId) -> Option<i32> {
        let actors = self.actors.borrow();
        Some((actors.get(&a)?.position - actors.get(&b)?.position).abs())
    }

    /// Moves `entity` one step toward `target`.
    pub fn step_toward(&self, entity: EntityId, target: EntityId) {
        let mut actors = self.actors.borrow_mut();
        let Some(goal) = actors.get(&target).map(|actor| actor.position) else {
            return;
        };
        if let Some(actor) = actors.get_mut(&entity) {
            actor.position += (goal - actor.position).signum();
        }
    }

    /// Applies damage and returns the remaining health.
    pub fn wound(&self, entity: EntityId, damage: i32) -> i32 {
        let mut actors = self.actors.borrow_mut();
        match actors.get_mut(&entity) {
            Some(actor) => {
                actor.health -= damage;
                actor.health
            }
            None => 0,
        }
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode.get()
    }

    #[cfg(test)]
    pub fn is_observed(&self, entity: EntityId) -> bool {
        self.observed.borrow().contains(&entity)
    }

    /// Next creature told its combat turn began.
    pub fn take_turn_hook(&self) -> Option<EntityId> {
        self.turn_hooks.borrow_mut().pop_front()
    }

    /// Next script dispatch awaiting completion.
    pub fn take_script(&self) -> Option<ScriptEvent> {
        self.scripts.borrow_mut().pop_front()
    }

    fn is_alive(&self, entity: EntityId) -> bool {
        self.actors
            .borrow()
            .get(&entity)
            .is_some_and(Actor::is_alive)
    }
}

impl WorldOracle for SimHost {
    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.actors.borrow().get(&entity).map(|actor| actor.kind)
    }

    fn player(&self) -> EntityId {
        self.player
    }

    /// Fighting goes on while the player lives and a hostile creature is
    /// alive within engage range of it.
    fn combat_condition(&self) -> bool {
        if !self.is_alive(self.player) {
            return false;
        }
        let actors = self.actors.borrow();
        let Some(player) = actors.get(&self.player) else {
            return false;
        };
        actors.values().any(|actor| {
            actor.hostile
                && actor.is_alive()
                && (actor.position - player.position).abs() <= ENGAGE_RANGE
        })
    }

    fn set_simulation_mode(&self, mode: SimulationMode) {
        info!(target: "combat_sim::world", %mode, "simulation mode changed");
        self.mode.set(mode);
    }

    fn watch_destruction(&self, watching: bool) {
        debug!(target: "combat_sim::world", watching, "destruction watch");
    }
}

impl CreatureOracle for SimHost {
    fn health(&self, entity: EntityId, kind: ValueKind) -> i32 {
        self.actors
            .borrow()
            .get(&entity)
            .map_or(0, |actor| match kind {
                ValueKind::Base => actor.max_health,
                ValueKind::Current => actor.health,
            })
    }

    fn action_points_budget(&self, entity: EntityId) -> ActionPoints {
        self.actors
            .borrow()
            .get(&entity)
            .map_or(0, |actor| actor.budget)
    }

    fn is_in_range(&self, entity: EntityId, other: EntityId) -> bool {
        self.distance(entity, other)
            .is_some_and(|distance| distance <= ENGAGE_RANGE)
    }

    fn attribute(&self, entity: EntityId, attribute: AttributeId, _kind: ValueKind) -> i32 {
        if attribute != INITIATIVE {
            return 0;
        }
        self.actors
            .borrow()
            .get(&entity)
            .map_or(0, |actor| actor.initiative)
    }

    fn equipped_item_type(&self, entity: EntityId, slot: EquipmentSlot) -> Option<ItemTypeId> {
        match slot {
            EquipmentSlot::RightHand => self.actors.borrow().get(&entity)?.weapon,
            EquipmentSlot::LeftHand => None,
        }
    }

    fn start_combat_turn(&self, entity: EntityId) {
        self.turn_hooks.borrow_mut().push_back(entity);
    }

    fn set_observed(&self, entity: EntityId, observed: bool) {
        let mut set = self.observed.borrow_mut();
        if observed {
            set.insert(entity);
        } else {
            set.remove(&entity);
        }
    }
}

impl UiOracle for SimHost {
    fn current_screen(&self) -> UiScreen {
        UiScreen::Main
    }

    fn set_combat_mode(&self, active: bool) {
        debug!(target: "combat_sim::ui", active, "combat mode");
    }

    fn show_turn_holder(&self, entity: Option<EntityId>) {
        debug!(target: "combat_sim::ui", ?entity, "turn holder");
    }

    fn show_action_points(&self, points: Option<ActionPoints>) {
        debug!(target: "combat_sim::ui", ?points, "action points");
    }

    fn set_turn_marker(&self, entity: EntityId, has_turn: bool) {
        debug!(target: "combat_sim::ui", entity = %entity, has_turn, "turn marker");
    }

    fn set_combat_selector(&self, entity: EntityId, alignment: Alignment) {
        debug!(target: "combat_sim::ui", entity = %entity, %alignment, "combat selector");
    }

    fn console_write(&self, line: &str) {
        info!(target: "combat_sim::console", "{line}");
    }
}

impl ScriptOracle for SimHost {
    fn dispatch(&self, event: ScriptEvent, script: Option<&str>) {
        info!(target: "combat_sim::scripts", %event, script = script.unwrap_or("-"), "script dispatched");
        self.scripts.borrow_mut().push_back(event);
    }
}
