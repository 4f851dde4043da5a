use std::fmt;

/// Stable handle of an entity owned by the world.
///
/// The scheduler never owns the entity behind a handle; it only keeps
/// membership records keyed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spendable per-turn resource.
pub type ActionPoints = u32;

/// Identifier of an ability in the rules database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityId(pub u16);

/// Identifier of an item type (weapon family) in the rules database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTypeId(pub u16);

/// Identifier of an extended creature attribute (initiative, agility, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeId(pub u16);

/// Side a combatant fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Alignment {
    /// Not taking part in combat.
    #[default]
    None,
    /// Fights alongside the player.
    Player,
    /// Fights against the player.
    Enemy,
}

impl Alignment {
    /// Returns the opposing side. `None` has no opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Alignment::None => Alignment::None,
            Alignment::Player => Alignment::Enemy,
            Alignment::Enemy => Alignment::Player,
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Alignment::None)
    }
}

/// Classification of a world entity, as reported by the world.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    /// The player-controlled character.
    Player,
    /// Any NPC creature.
    Creature,
    /// Scenery, items, and everything else that cannot fight.
    Other,
}

impl EntityKind {
    /// Returns true for kinds that may hold an alignment.
    #[inline]
    pub const fn is_combatant(self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::Creature)
    }
}

/// Whether the world advances continuously or turn by turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SimulationMode {
    RealTime,
    TurnBased,
}

/// Which value of a stat is requested: the unmodified base or the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Base,
    Current,
}

/// Equipment slot a strike is delivered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    LeftHand,
    RightHand,
}
