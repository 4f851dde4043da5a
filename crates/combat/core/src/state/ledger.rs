use super::ActionPoints;

/// Live action-point counter of the current turn holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionPointLedger {
    points: ActionPoints,
    spend_blocked: bool,
}

impl ActionPointLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> ActionPoints {
        self.points
    }

    pub fn is_blocked(&self) -> bool {
        self.spend_blocked
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.spend_blocked = blocked;
    }

    /// Loads the budget of a new turn holder.
    pub fn reload(&mut self, points: ActionPoints) {
        self.points = points;
    }

    /// Deducts `cost` and returns the remaining points.
    ///
    /// # Panics
    ///
    /// Panics if `cost` exceeds the remaining points; the counter never goes
    /// negative.
    pub fn spend(&mut self, cost: ActionPoints) -> ActionPoints {
        assert!(
            cost <= self.points,
            "action cost {cost} exceeds remaining action points {}",
            self.points
        );
        self.points -= cost;
        self.points
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
