//! In-memory collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap, HashSet};

use combat_core::{
    AbilityId, ActionKind, ActionPoints, Alignment, AttributeId, CombatConfig, CombatEngine,
    CombatEnv, CombatState, CreatureOracle, EntityId, EntityKind, EquipmentSlot, ItemTypeId,
    OrderingPolicy, RulesOracle, ScriptEvent, ScriptOracle, SimulationMode, UiOracle, UiScreen,
    ValueKind, WorldOracle,
};

pub const PLAYER: EntityId = EntityId(1);
pub const E1: EntityId = EntityId(2);
pub const E2: EntityId = EntityId(3);
pub const E3: EntityId = EntityId(4);
pub const CRATE: EntityId = EntityId(50);

pub const PLAYER_BUDGET: ActionPoints = 10;
pub const CREATURE_BUDGET: ActionPoints = 6;

pub const INITIATIVE: AttributeId = AttributeId(3);
pub const FIREBOLT: AbilityId = AbilityId(1);
pub const SWORD: ItemTypeId = ItemTypeId(7);

#[derive(Clone, Debug)]
pub struct Body {
    pub kind: EntityKind,
    pub health: i32,
    pub budget: ActionPoints,
    pub attributes: HashMap<AttributeId, i32>,
    pub equipped: HashMap<EquipmentSlot, ItemTypeId>,
}

/// World, creatures, rules, interface, and scripts in one recording fake.
pub struct Host {
    pub bodies: RefCell<HashMap<EntityId, Body>>,
    pub out_of_range: RefCell<HashSet<(EntityId, EntityId)>>,
    pub condition: Cell<bool>,
    pub screen: Cell<UiScreen>,
    pub mode: Cell<SimulationMode>,
    pub watching: Cell<bool>,
    pub observed: RefCell<BTreeSet<EntityId>>,
    pub turn_hooks: RefCell<Vec<EntityId>>,
    pub combat_mode: Cell<bool>,
    pub holder_display: Cell<Option<EntityId>>,
    pub points_display: Cell<Option<ActionPoints>>,
    pub markers: RefCell<BTreeSet<EntityId>>,
    pub selectors: RefCell<HashMap<EntityId, Alignment>>,
    pub console: RefCell<Vec<String>>,
    pub scripts: RefCell<Vec<(ScriptEvent, Option<String>)>>,
    pub action_costs: HashMap<ActionKind, ActionPoints>,
}

impl Host {
    pub fn new() -> Self {
        let action_costs = HashMap::from([
            (ActionKind::Walk, 1),
            (ActionKind::StopWalking, 4),
            (ActionKind::PickUpItem, 1),
            (ActionKind::DropItem, 4),
            (ActionKind::UseItem, 2),
            (ActionKind::EquipItem, 1),
            (ActionKind::UnequipItem, 1),
            (ActionKind::UseAbility, 2),
            (ActionKind::Strike, 3),
            (ActionKind::Interact, 0),
        ]);

        let host = Self {
            bodies: RefCell::new(HashMap::new()),
            out_of_range: RefCell::new(HashSet::new()),
            condition: Cell::new(true),
            screen: Cell::new(UiScreen::Main),
            mode: Cell::new(SimulationMode::RealTime),
            watching: Cell::new(false),
            observed: RefCell::new(BTreeSet::new()),
            turn_hooks: RefCell::new(Vec::new()),
            combat_mode: Cell::new(false),
            holder_display: Cell::new(None),
            points_display: Cell::new(None),
            markers: RefCell::new(BTreeSet::new()),
            selectors: RefCell::new(HashMap::new()),
            console: RefCell::new(Vec::new()),
            scripts: RefCell::new(Vec::new()),
            action_costs,
        };
        host.spawn(PLAYER, EntityKind::Player, PLAYER_BUDGET);
        host.spawn(CRATE, EntityKind::Other, 0);
        host
    }

    pub fn spawn(&self, entity: EntityId, kind: EntityKind, budget: ActionPoints) {
        self.bodies.borrow_mut().insert(
            entity,
            Body {
                kind,
                health: 20,
                budget,
                attributes: HashMap::new(),
                equipped: HashMap::new(),
            },
        );
    }

    pub fn spawn_creature(&self, entity: EntityId) {
        self.spawn(entity, EntityKind::Creature, CREATURE_BUDGET);
    }

    pub fn despawn(&self, entity: EntityId) {
        self.bodies.borrow_mut().remove(&entity);
    }

    pub fn set_health(&self, entity: EntityId, health: i32) {
        if let Some(body) = self.bodies.borrow_mut().get_mut(&entity) {
            body.health = health;
        }
    }

    pub fn set_attribute(&self, entity: EntityId, attribute: AttributeId, value: i32) {
        if let Some(body) = self.bodies.borrow_mut().get_mut(&entity) {
            body.attributes.insert(attribute, value);
        }
    }

    pub fn equip(&self, entity: EntityId, slot: EquipmentSlot, item_type: ItemTypeId) {
        if let Some(body) = self.bodies.borrow_mut().get_mut(&entity) {
            body.equipped.insert(slot, item_type);
        }
    }

    pub fn separate(&self, a: EntityId, b: EntityId) {
        let mut pairs = self.out_of_range.borrow_mut();
        pairs.insert((a, b));
        pairs.insert((b, a));
    }

    pub fn last_script(&self) -> Option<ScriptEvent> {
        self.scripts.borrow().last().map(|(event, _)| *event)
    }

    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::new(self, self, self, self, self)
    }
}

impl WorldOracle for Host {
    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.bodies.borrow().get(&entity).map(|body| body.kind)
    }

    fn player(&self) -> EntityId {
        PLAYER
    }

    fn combat_condition(&self) -> bool {
        self.condition.get()
    }

    fn set_simulation_mode(&self, mode: SimulationMode) {
        self.mode.set(mode);
    }

    fn watch_destruction(&self, watching: bool) {
        self.watching.set(watching);
    }
}

impl CreatureOracle for Host {
    fn health(&self, entity: EntityId, _kind: ValueKind) -> i32 {
        self.bodies.borrow().get(&entity).map_or(0, |body| body.health)
    }

    fn action_points_budget(&self, entity: EntityId) -> ActionPoints {
        self.bodies.borrow().get(&entity).map_or(0, |body| body.budget)
    }

    fn is_in_range(&self, entity: EntityId, other: EntityId) -> bool {
        !self.out_of_range.borrow().contains(&(entity, other))
    }

    fn attribute(&self, entity: EntityId, attribute: AttributeId, _kind: ValueKind) -> i32 {
        self.bodies
            .borrow()
            .get(&entity)
            .and_then(|body| body.attributes.get(&attribute).copied())
            .unwrap_or(0)
    }

    fn equipped_item_type(&self, entity: EntityId, slot: EquipmentSlot) -> Option<ItemTypeId> {
        self.bodies
            .borrow()
            .get(&entity)
            .and_then(|body| body.equipped.get(&slot).copied())
    }

    fn start_combat_turn(&self, entity: EntityId) {
        self.turn_hooks.borrow_mut().push(entity);
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

impl RulesOracle for Host {
    fn action_cost(&self, kind: ActionKind) -> ActionPoints {
        self.action_costs.get(&kind).copied().unwrap_or(0)
    }

    fn ability_cost(&self, ability: AbilityId) -> ActionPoints {
        if ability == FIREBOLT { 3 } else { 0 }
    }

    fn item_type_cost(&self, item_type: ItemTypeId) -> ActionPoints {
        if item_type == SWORD { 2 } else { 0 }
    }
}

impl UiOracle for Host {
    fn current_screen(&self) -> UiScreen {
        self.screen.get()
    }

    fn set_combat_mode(&self, active: bool) {
        self.combat_mode.set(active);
    }

    fn show_turn_holder(&self, entity: Option<EntityId>) {
        self.holder_display.set(entity);
    }

    fn show_action_points(&self, points: Option<ActionPoints>) {
        self.points_display.set(points);
    }

    fn set_turn_marker(&self, entity: EntityId, has_turn: bool) {
        let mut markers = self.markers.borrow_mut();
        if has_turn {
            markers.insert(entity);
        } else {
            markers.remove(&entity);
        }
    }

    fn set_combat_selector(&self, entity: EntityId, alignment: Alignment) {
        let mut selectors = self.selectors.borrow_mut();
        if alignment.is_none() {
            selectors.remove(&entity);
        } else {
            selectors.insert(entity, alignment);
        }
    }

    fn console_write(&self, line: &str) {
        self.console.borrow_mut().push(line.to_owned());
    }
}

impl ScriptOracle for Host {
    fn dispatch(&self, event: ScriptEvent, script: Option<&str>) {
        self.scripts
            .borrow_mut()
            .push((event, script.map(str::to_owned)));
    }
}

/// Scheduler state plus its collaborators.
pub struct Harness {
    pub host: Host,
    pub state: CombatState,
}

impl Harness {
    pub fn new(config: CombatConfig) -> Self {
        let mut harness = Self {
            host: Host::new(),
            state: CombatState::new(config),
        };
        harness.engine().init();
        harness
    }

    pub fn engine(&mut self) -> CombatEngine<'_> {
        CombatEngine::new(&mut self.state, self.host.env())
    }

    pub fn align(&mut self, entity: EntityId, alignment: Alignment) {
        self.engine()
            .set_alignment(entity, alignment)
            .expect("alignment accepted");
    }

    pub fn holder(&mut self) -> Option<EntityId> {
        self.engine().creature_in_turn()
    }

    /// Passes the turn from whoever holds it.
    pub fn pass(&mut self) -> Option<EntityId> {
        let holder = self.holder()?;
        self.engine().next_turn(holder);
        self.holder()
    }
}

/// Player on one side, two creatures on the other, combat not yet started.
pub fn skirmish(policy: OrderingPolicy) -> Harness {
    let mut config = CombatConfig::with_ordering(policy);
    config.start_script = Some("scripts/combat_start.lua".to_owned());
    config.end_script = Some("scripts/combat_end.lua".to_owned());

    let mut harness = Harness::new(config);
    harness.host.spawn_creature(E1);
    harness.host.spawn_creature(E2);
    harness.host.spawn_creature(E3);
    harness.align(PLAYER, Alignment::Player);
    harness.align(E1, Alignment::Enemy);
    harness.align(E2, Alignment::Enemy);
    harness
}

/// Skirmish with combat already started; the player holds the first turn.
pub fn started_skirmish() -> Harness {
    let mut harness = skirmish(OrderingPolicy::ByInclusion);
    harness.engine().start_combat().expect("combat starts");
    harness
}
