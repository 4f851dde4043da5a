use crate::state::AttributeId;

/// How combatants are placed in the turn queue when they join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderingPolicy {
    /// Append to the tail in join order.
    #[default]
    ByInclusion,
    /// Keep the queue sorted by the attribute, highest first. Equal values
    /// keep join order.
    ByRankedAttribute(AttributeId),
}

/// Scheduler configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Queue insertion policy, read once when the state is created.
    pub ordering: OrderingPolicy,
    /// Script dispatched when combat starts.
    pub start_script: Option<String>,
    /// Script dispatched when combat ends.
    pub end_script: Option<String>,
    /// Console line shown when the player lacks points for an action.
    pub insufficient_points_message: String,
}

impl CombatConfig {
    pub const DEFAULT_INSUFFICIENT_POINTS_MESSAGE: &'static str =
        "Not enough action points.";

    pub fn new() -> Self {
        Self {
            ordering: OrderingPolicy::default(),
            start_script: None,
            end_script: None,
            insufficient_points_message: Self::DEFAULT_INSUFFICIENT_POINTS_MESSAGE.to_owned(),
        }
    }

    pub fn with_ordering(ordering: OrderingPolicy) -> Self {
        Self {
            ordering,
            ..Self::new()
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
