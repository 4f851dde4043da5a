//! Scripted skirmish: the player against a goblin pair, with a wolf joining
//! once the fight is under way.

use anyhow::Result;
use combat_content::CostTable;
use combat_core::{
    ActionPoints, Alignment, CombatConfig, CombatEngine, CombatEnv, CombatEvent, CombatState,
    CreatureEvent, EntityId, EntityKind, EquipmentSlot, ItemTypeId, PerformedAction, RulesOracle,
};
use tracing::{debug, info, warn};

use crate::host::{Actor, MELEE_REACH, SimHost};

pub const PLAYER: EntityId = EntityId(1);
pub const GOBLIN_SCOUT: EntityId = EntityId(2);
pub const GOBLIN_BRUTE: EntityId = EntityId(3);
pub const WOLF: EntityId = EntityId(4);

const SWORD: ItemTypeId = ItemTypeId(7);

/// Tick on which the wolf shows up.
const REINFORCEMENT_TICK: u32 = 4;

/// Upper bound on actions within a single turn.
const ACTIONS_PER_TURN: usize = 16;

/// How a run finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub ticks: u32,
    /// Rounds fought, if a combat ended within the run.
    pub rounds: Option<u32>,
    pub player_alive: bool,
    pub survivors: Vec<EntityId>,
}

/// Owns the scheduler state, the rules database, and the in-memory world.
pub struct Skirmish {
    host: SimHost,
    costs: CostTable,
    state: CombatState,
}

impl Skirmish {
    pub fn new(config: CombatConfig, costs: CostTable) -> Self {
        Self {
            host: SimHost::new(PLAYER),
            costs,
            state: CombatState::new(config),
        }
    }

    fn engine(&mut self) -> CombatEngine<'_> {
        let env = CombatEnv::new(&self.host, &self.host, &self.costs, &self.host, &self.host);
        CombatEngine::new(&mut self.state, env)
    }

    /// Plays the skirmish for at most `max_ticks` world ticks.
    pub fn run(&mut self, max_ticks: u32) -> Result<Outcome> {
        self.engine().init();
        self.deploy()?;

        let mut ticks = 0;
        let mut rounds = None;
        for tick in 0..max_ticks {
            ticks = tick + 1;
            if tick == REINFORCEMENT_TICK {
                self.reinforce();
            }

            self.engine().update();
            self.play_turn();
            self.settle_scripts();

            if let Some(ended) = self.report(tick) {
                rounds = Some(ended);
                break;
            }
        }

        self.engine().shutdown();
        debug!(target: "combat_sim", mode = %self.host.mode(), "scheduler shut down");

        let survivors = self
            .host
            .actors()
            .into_iter()
            .filter(|(_, actor)| actor.is_alive())
            .map(|(entity, _)| entity)
            .collect();
        let player_alive = self.host.actor(PLAYER).is_some_and(|actor| actor.is_alive());

        Ok(Outcome {
            ticks,
            rounds,
            player_alive,
            survivors,
        })
    }

    fn deploy(&mut self) -> Result<()> {
        self.host.spawn(
            PLAYER,
            Actor {
                name: "player",
                kind: EntityKind::Player,
                max_health: 30,
                health: 30,
                budget: 8,
                initiative: 5,
                position: 0,
                hostile: false,
                weapon: Some(SWORD),
            },
        );
        self.host.spawn(GOBLIN_SCOUT, goblin("goblin scout", 7, 2));
        self.host.spawn(GOBLIN_BRUTE, goblin("goblin brute", 3, 3));

        let mut engine = self.engine();
        engine.set_alignment(PLAYER, Alignment::Player)?;
        engine.set_alignment_against(GOBLIN_SCOUT, PLAYER)?;
        engine.set_alignment_with(GOBLIN_BRUTE, GOBLIN_SCOUT)?;
        Ok(())
    }

    fn reinforce(&mut self) {
        self.host.spawn(
            WOLF,
            Actor {
                name: "wolf",
                kind: EntityKind::Creature,
                max_health: 10,
                health: 10,
                budget: 7,
                initiative: 9,
                position: 5,
                hostile: true,
                weapon: None,
            },
        );
        if let Err(error) = self.engine().set_alignment_against(WOLF, PLAYER) {
            warn!(target: "combat_sim", entity = %WOLF, %error, "reinforcement stayed out");
        }
    }

    /// Plays out the turn announced most recently, if its holder still has it.
    fn play_turn(&mut self) {
        while let Some(entity) = self.host.take_turn_hook() {
            if self.engine().creature_in_turn() == Some(entity) {
                self.act(entity);
                return;
            }
            debug!(target: "combat_sim", entity = %entity, "stale turn hook");
        }
    }

    fn act(&mut self, entity: EntityId) {
        for _ in 0..ACTIONS_PER_TURN {
            if self.engine().creature_in_turn() != Some(entity) {
                return;
            }

            let Some(target) = self.nearest_opponent(entity) else {
                self.engine().next_turn(entity);
                return;
            };
            let in_reach = self
                .host
                .distance(entity, target)
                .is_some_and(|distance| distance <= MELEE_REACH);

            let action = if in_reach {
                PerformedAction::Strike(EquipmentSlot::RightHand)
            } else {
                PerformedAction::Walk
            };
            if self.price(entity, action) > self.engine().action_points() {
                self.out_of_points(entity);
                return;
            }

            let killed = match action {
                PerformedAction::Strike(_) => self.strike(entity, target),
                _ => {
                    self.host.step_toward(entity, target);
                    false
                }
            };
            self.engine()
                .on_creature_event(entity, CreatureEvent::ActionPerformed(action));
            if killed {
                self.engine().on_creature_event(target, CreatureEvent::Died);
            }
        }

        if self.engine().creature_in_turn() == Some(entity) {
            self.engine().next_turn(entity);
        }
    }

    fn out_of_points(&mut self, entity: EntityId) {
        self.engine()
            .on_creature_event(entity, CreatureEvent::InsufficientActionPoints);
        // The player is only warned; the simulated player then ends the turn.
        if self.engine().creature_in_turn() == Some(entity) {
            self.engine().next_turn(entity);
        }
    }

    /// Applies a strike and returns whether the target died.
    fn strike(&mut self, attacker: EntityId, target: EntityId) -> bool {
        let damage = match self.host.actor(attacker).and_then(|actor| actor.weapon) {
            Some(_) => 6,
            None => 3,
        };
        let remaining = self.host.wound(target, damage);
        info!(
            target: "combat_sim",
            attacker = %attacker,
            victim = %target,
            damage,
            remaining,
            "strike"
        );
        remaining <= 0
    }

    fn price(&self, entity: EntityId, action: PerformedAction) -> ActionPoints {
        if action.kind().is_free() {
            return 0;
        }
        let base = self.costs.action_cost(action.kind());
        match action {
            PerformedAction::Strike(_) => {
                let weapon = self.host.actor(entity).and_then(|actor| actor.weapon);
                base + weapon.map_or(0, |item_type| self.costs.item_type_cost(item_type))
            }
            PerformedAction::UseAbility(ability) => base + self.costs.ability_cost(ability),
            _ => base,
        }
    }

    fn nearest_opponent(&mut self, entity: EntityId) -> Option<EntityId> {
        let engine = self.engine();
        let side = engine.alignment(entity);
        if side.is_none() {
            return None;
        }
        let opponents: Vec<EntityId> = engine
            .turn_order()
            .into_iter()
            .filter(|&other| engine.alignment(other) == side.opposite())
            .collect();
        drop(engine);

        opponents
            .into_iter()
            .filter(|&other| self.host.actor(other).is_some_and(|actor| actor.is_alive()))
            .min_by_key(|&other| self.host.distance(entity, other).unwrap_or(i32::MAX))
    }

    fn settle_scripts(&mut self) {
        while let Some(event) = self.host.take_script() {
            self.engine().on_script_event(event);
        }
    }

    /// Logs recorded events and returns the round count once a combat ended.
    fn report(&mut self, tick: u32) -> Option<u32> {
        let mut ended = None;
        for event in self.state.drain_events() {
            match event {
                CombatEvent::CombatStarted { first } => {
                    info!(target: "combat_sim", tick, first = %first, "combat started");
                }
                CombatEvent::CombatEnded { rounds } => {
                    info!(target: "combat_sim", tick, rounds, "combat ended");
                    ended = Some(rounds);
                }
                CombatEvent::RoundCompleted { round } => {
                    info!(target: "combat_sim", tick, round, "round completed");
                }
                other => debug!(target: "combat_sim", tick, event = ?other, "combat event"),
            }
        }
        ended
    }
}

fn goblin(name: &'static str, initiative: i32, position: i32) -> Actor {
    Actor {
        name,
        kind: EntityKind::Creature,
        max_health: 12,
        health: 12,
        budget: 6,
        initiative,
        position,
        hostile: true,
        weapon: None,
    }
}
