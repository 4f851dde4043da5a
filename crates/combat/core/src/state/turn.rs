//! Turn order bookkeeping: the round queue, late joiners, and pending leavers.
//!
//! The cursor is an index into the vector-backed queue. The queue itself is
//! only reshaped while no cursor is held (out of combat, or inside the
//! cycle-boundary reconciliation), so nested calls can never leave the cursor
//! pointing at a different entry than the one whose points are tracked.

use std::collections::BTreeSet;

use crate::config::OrderingPolicy;

use super::EntityId;

/// Queue membership of a single combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnEntry {
    pub entity: EntityId,
}

impl TurnEntry {
    pub const fn new(entity: EntityId) -> Self {
        Self { entity }
    }
}

/// Which list an entry was found in by [`TurnQueues::remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueKind {
    Turn,
    Waiting,
}

/// Outcome of moving the cursor forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The cursor now rests on this entity.
    Holder(EntityId),
    /// The end of the queue was reached; the round is over.
    Wrapped,
}

/// Turn queue, waiting queue, leaving set, and the active-turn cursor.
#[derive(Clone, Debug)]
pub struct TurnQueues {
    queue: Vec<TurnEntry>,
    waiting: Vec<TurnEntry>,
    leaving: BTreeSet<EntityId>,
    cursor: Option<usize>,
    round: u32,
}

impl TurnQueues {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            waiting: Vec::new(),
            leaving: BTreeSet::new(),
            cursor: None,
            round: 0,
        }
    }

    /// Entities in turn order, including those marked as leaving.
    pub fn order(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.queue.iter().map(|entry| entry.entity)
    }

    /// Entities waiting for the next round, in join order.
    pub fn waiting(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.waiting.iter().map(|entry| entry.entity)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_leaving(&self, entity: EntityId) -> bool {
        self.leaving.contains(&entity)
    }

    /// Marks an entity for removal at the next cycle boundary.
    pub fn mark_leaving(&mut self, entity: EntityId) {
        self.leaving.insert(entity);
    }

    /// Cancels a pending removal. Returns true if the entity was marked.
    pub fn unmark_leaving(&mut self, entity: EntityId) -> bool {
        self.leaving.remove(&entity)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Entity at the cursor, if a turn is being held.
    pub fn holder(&self) -> Option<EntityId> {
        self.cursor
            .and_then(|index| self.queue.get(index))
            .map(|entry| entry.entity)
    }

    /// Inserts an entity into the turn queue according to `policy`.
    ///
    /// `value_of` resolves the ranking attribute and is only consulted by
    /// [`OrderingPolicy::ByRankedAttribute`]. Entries with equal values keep
    /// their insertion order.
    pub fn enqueue(
        &mut self,
        entity: EntityId,
        policy: OrderingPolicy,
        mut value_of: impl FnMut(EntityId) -> i32,
    ) -> usize {
        debug_assert!(self.cursor.is_none(), "turn queue reshaped while a turn is held");

        let index = match policy {
            OrderingPolicy::ByInclusion => self.queue.len(),
            OrderingPolicy::ByRankedAttribute(_) => {
                let value = value_of(entity);
                self.queue
                    .iter()
                    .position(|entry| value_of(entry.entity) < value)
                    .unwrap_or(self.queue.len())
            }
        };
        self.queue.insert(index, TurnEntry::new(entity));
        index
    }

    /// Appends an entity to the waiting queue.
    pub fn enqueue_waiting(&mut self, entity: EntityId) {
        self.waiting.push(TurnEntry::new(entity));
    }

    /// Removes an entity's entry, searching the waiting queue first.
    ///
    /// Returns `None` if the entity is in neither queue.
    pub fn remove(&mut self, entity: EntityId) -> Option<QueueKind> {
        if let Some(index) = self.waiting.iter().position(|entry| entry.entity == entity) {
            self.waiting.remove(index);
            return Some(QueueKind::Waiting);
        }

        let index = self.queue.iter().position(|entry| entry.entity == entity)?;
        if let Some(cursor) = self.cursor {
            assert_ne!(
                index, cursor,
                "cannot remove {entity} while it holds the turn"
            );
            if index < cursor {
                self.cursor = Some(cursor - 1);
            }
        }
        self.queue.remove(index);
        Some(QueueKind::Turn)
    }

    /// Places the cursor on the head of the queue and starts round 1.
    pub fn begin(&mut self) -> Option<EntityId> {
        if self.queue.is_empty() {
            return None;
        }
        self.round = 1;
        self.cursor = Some(0);
        self.holder()
    }

    /// Moves the cursor past the current holder, skipping leaving entries.
    ///
    /// On [`Advance::Wrapped`] the cursor is released so the caller can run
    /// the boundary reconciliation.
    pub fn advance(&mut self) -> Advance {
        let mut index = self.cursor.map_or(0, |index| index + 1);
        while let Some(entry) = self.queue.get(index) {
            if !self.leaving.contains(&entry.entity) {
                self.cursor = Some(index);
                return Advance::Holder(entry.entity);
            }
            index += 1;
        }
        self.cursor = None;
        Advance::Wrapped
    }

    /// Drains the leaving set.
    pub fn take_leaving(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.leaving).into_iter().collect()
    }

    /// Drains the waiting queue in join order.
    pub fn take_waiting(&mut self) -> Vec<EntityId> {
        self.waiting.drain(..).map(|entry| entry.entity).collect()
    }

    /// Starts the next round with the cursor on the head of the queue.
    pub fn rewind(&mut self) -> Option<EntityId> {
        self.round += 1;
        self.cursor = (!self.queue.is_empty()).then_some(0);
        self.holder()
    }

    /// Forgets every entry and releases the cursor.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.waiting.clear();
        self.leaving.clear();
        self.cursor = None;
        self.round = 0;
    }
}

impl Default for TurnQueues {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AttributeId;

    fn ids(queues: &TurnQueues) -> Vec<u32> {
        queues.order().map(|entity| entity.0).collect()
    }

    #[test]
    fn inclusion_policy_appends() {
        let mut queues = TurnQueues::new();
        for id in [3, 1, 2] {
            queues.enqueue(EntityId(id), OrderingPolicy::ByInclusion, |_| 0);
        }
        assert_eq!(ids(&queues), vec![3, 1, 2]);
    }

    #[test]
    fn ranked_policy_orders_descending_and_keeps_ties_stable() {
        let values = |entity: EntityId| match entity.0 {
            1 => 10,
            2 => 30,
            3 => 10,
            4 => 20,
            _ => 0,
        };
        let policy = OrderingPolicy::ByRankedAttribute(AttributeId(0));
        let mut queues = TurnQueues::new();
        for id in [1, 2, 3, 4] {
            queues.enqueue(EntityId(id), policy, values);
        }
        assert_eq!(ids(&queues), vec![2, 4, 1, 3]);
    }

    #[test]
    fn advance_skips_leaving_and_wraps() {
        let mut queues = TurnQueues::new();
        for id in 1..=3 {
            queues.enqueue(EntityId(id), OrderingPolicy::ByInclusion, |_| 0);
        }
        assert_eq!(queues.begin(), Some(EntityId(1)));

        queues.mark_leaving(EntityId(2));
        assert_eq!(queues.advance(), Advance::Holder(EntityId(3)));
        assert_eq!(queues.advance(), Advance::Wrapped);
        assert_eq!(queues.holder(), None);

        assert_eq!(queues.take_leaving(), vec![EntityId(2)]);
        assert_eq!(queues.remove(EntityId(2)), Some(QueueKind::Turn));
        assert_eq!(queues.rewind(), Some(EntityId(1)));
        assert_eq!(queues.round(), 2);
        assert_eq!(ids(&queues), vec![1, 3]);
    }

    #[test]
    fn remove_prefers_waiting_queue() {
        let mut queues = TurnQueues::new();
        queues.enqueue(EntityId(5), OrderingPolicy::ByInclusion, |_| 0);
        queues.enqueue_waiting(EntityId(5));

        assert_eq!(queues.remove(EntityId(5)), Some(QueueKind::Waiting));
        assert_eq!(queues.remove(EntityId(5)), Some(QueueKind::Turn));
        assert_eq!(queues.remove(EntityId(5)), None);
    }

    #[test]
    fn removing_before_cursor_keeps_holder() {
        let mut queues = TurnQueues::new();
        for id in 1..=3 {
            queues.enqueue(EntityId(id), OrderingPolicy::ByInclusion, |_| 0);
        }
        queues.begin();
        queues.advance();
        queues.advance();
        assert_eq!(queues.holder(), Some(EntityId(3)));

        queues.remove(EntityId(1));
        assert_eq!(queues.holder(), Some(EntityId(3)));
    }
}
