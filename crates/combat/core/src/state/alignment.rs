//! Faction membership: one mapping per side.

use std::collections::HashSet;

use super::{Alignment, EntityId};

/// Two faction sets of entity handles.
///
/// An entity is in at most one set at a time. The sets carry no ordering;
/// callers that need a stable order sort by handle.
#[derive(Clone, Debug, Default)]
pub struct AlignmentStore {
    player_side: HashSet<EntityId>,
    enemy_side: HashSet<EntityId>,
}

impl AlignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks the entity up across both factions.
    pub fn alignment(&self, entity: EntityId) -> Alignment {
        if self.player_side.contains(&entity) {
            Alignment::Player
        } else if self.enemy_side.contains(&entity) {
            Alignment::Enemy
        } else {
            Alignment::None
        }
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.player_side.contains(&entity) || self.enemy_side.contains(&entity)
    }

    /// Number of entities aligned to `alignment`. Always 0 for `Alignment::None`.
    pub fn len(&self, alignment: Alignment) -> usize {
        match alignment {
            Alignment::None => 0,
            Alignment::Player => self.player_side.len(),
            Alignment::Enemy => self.enemy_side.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player_side.is_empty() && self.enemy_side.is_empty()
    }

    /// Adds the entity to the faction for `alignment`.
    ///
    /// # Panics
    ///
    /// Panics for `Alignment::None` or if the entity is already aligned;
    /// callers remove the previous membership first.
    pub fn insert(&mut self, entity: EntityId, alignment: Alignment) {
        assert!(
            !self.contains(entity),
            "entity {entity} is already aligned; remove it before re-aligning"
        );
        let faction = match alignment {
            Alignment::Player => &mut self.player_side,
            Alignment::Enemy => &mut self.enemy_side,
            Alignment::None => panic!("cannot store a membership for Alignment::None"),
        };
        faction.insert(entity);
    }

    /// Drops the entity's membership, returning the side it was on.
    pub fn remove(&mut self, entity: EntityId) -> Option<Alignment> {
        if self.player_side.remove(&entity) {
            Some(Alignment::Player)
        } else if self.enemy_side.remove(&entity) {
            Some(Alignment::Enemy)
        } else {
            None
        }
    }

    /// All aligned entities, sorted by handle.
    pub fn members(&self) -> Vec<(EntityId, Alignment)> {
        let mut members: Vec<_> = self
            .player_side
            .iter()
            .map(|&entity| (entity, Alignment::Player))
            .chain(self.enemy_side.iter().map(|&entity| (entity, Alignment::Enemy)))
            .collect();
        members.sort_by_key(|(entity, _)| *entity);
        members
    }

    /// Removes every membership, returning the former members sorted by handle.
    pub fn drain(&mut self) -> Vec<(EntityId, Alignment)> {
        let members = self.members();
        self.player_side.clear();
        self.enemy_side.clear();
        members
    }
}
