mod common;

use combat_core::{CombatEvent, CreatureEvent, EntityId, EquipmentSlot, PerformedAction, UiScreen};

use common::*;

fn perform(harness: &mut Harness, entity: EntityId, action: PerformedAction) {
    harness
        .engine()
        .on_creature_event(entity, CreatureEvent::ActionPerformed(action));
}

#[test]
fn walking_costs_its_base_price() {
    let mut harness = started_skirmish();

    perform(&mut harness, PLAYER, PerformedAction::Walk);

    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET - 1);
    assert_eq!(harness.host.points_display.get(), Some(PLAYER_BUDGET - 1));
}

#[test]
fn dropping_and_stopping_are_free() {
    let mut harness = started_skirmish();
    harness.state.drain_events();

    perform(&mut harness, PLAYER, PerformedAction::DropItem);
    perform(&mut harness, PLAYER, PerformedAction::StopWalking);

    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET);
    assert!(harness.state.drain_events().is_empty());
}

#[test]
fn abilities_add_their_own_cost() {
    let mut harness = started_skirmish();
    harness.state.drain_events();

    perform(&mut harness, PLAYER, PerformedAction::UseAbility(FIREBOLT));

    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET - 5);
    assert_eq!(
        harness.state.drain_events(),
        vec![CombatEvent::ActionPointsSpent {
            entity: PLAYER,
            cost: 5,
            remaining: PLAYER_BUDGET - 5,
        }]
    );
}

#[test]
fn strikes_add_the_wielded_item_cost() {
    let mut harness = started_skirmish();
    harness.host.equip(PLAYER, EquipmentSlot::RightHand, SWORD);

    perform(&mut harness, PLAYER, PerformedAction::Strike(EquipmentSlot::RightHand));
    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET - 5);

    perform(&mut harness, PLAYER, PerformedAction::Strike(EquipmentSlot::LeftHand));
    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET - 8);
}

#[test]
fn creature_out_of_points_passes_the_turn() {
    let mut harness = started_skirmish();
    harness.pass();

    perform(&mut harness, E1, PerformedAction::Strike(EquipmentSlot::RightHand));
    assert_eq!(harness.holder(), Some(E1));
    perform(&mut harness, E1, PerformedAction::Strike(EquipmentSlot::RightHand));

    assert_eq!(harness.holder(), Some(E2));
    assert_eq!(harness.engine().action_points(), CREATURE_BUDGET);
}

#[test]
fn player_out_of_points_on_main_screen_passes_the_turn() {
    let mut harness = started_skirmish();

    perform(&mut harness, PLAYER, PerformedAction::UseAbility(FIREBOLT));
    perform(&mut harness, PLAYER, PerformedAction::UseAbility(FIREBOLT));

    assert_eq!(harness.holder(), Some(E1));
}

#[test]
fn player_keeps_the_turn_while_the_profile_is_open() {
    let mut harness = started_skirmish();
    harness.host.screen.set(UiScreen::PlayerProfile);

    perform(&mut harness, PLAYER, PerformedAction::UseAbility(FIREBOLT));
    perform(&mut harness, PLAYER, PerformedAction::UseAbility(FIREBOLT));

    assert_eq!(harness.holder(), Some(PLAYER));
    assert_eq!(harness.engine().action_points(), 0);

    harness.host.screen.set(UiScreen::Main);
    perform(&mut harness, PLAYER, PerformedAction::Interact);

    assert_eq!(harness.holder(), Some(E1));
}

#[test]
fn blocked_spending_charges_nothing() {
    let mut harness = started_skirmish();

    harness.engine().block_action_point_spend(true);
    perform(&mut harness, PLAYER, PerformedAction::Walk);
    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET);

    harness.engine().block_action_point_spend(false);
    perform(&mut harness, PLAYER, PerformedAction::Walk);
    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET - 1);
}

#[test]
fn turn_change_lifts_the_block() {
    let mut harness = started_skirmish();
    harness.engine().block_action_point_spend(true);

    harness.pass();
    perform(&mut harness, E1, PerformedAction::Walk);

    assert_eq!(harness.engine().action_points(), CREATURE_BUDGET - 1);
}

#[test]
fn actions_outside_the_turn_are_not_charged() {
    let mut harness = started_skirmish();
    harness.state.drain_events();

    perform(&mut harness, E1, PerformedAction::Walk);

    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET);
    assert!(harness.state.drain_events().is_empty());
}

#[test]
fn creature_that_cannot_afford_an_action_passes() {
    let mut harness = started_skirmish();
    harness.pass();

    harness
        .engine()
        .on_creature_event(E1, CreatureEvent::InsufficientActionPoints);

    assert_eq!(harness.holder(), Some(E2));
    assert!(harness.host.console.borrow().is_empty());
}

#[test]
fn player_that_cannot_afford_an_action_is_told_so() {
    let mut harness = started_skirmish();
    let message = harness.state.config().insufficient_points_message.clone();

    harness
        .engine()
        .on_creature_event(PLAYER, CreatureEvent::InsufficientActionPoints);

    assert_eq!(harness.holder(), Some(PLAYER));
    assert_eq!(*harness.host.console.borrow(), vec![message]);
}

#[test]
fn actions_from_unobserved_creatures_are_dropped() {
    let mut harness = started_skirmish();
    harness.host.spawn_creature(EntityId(9));

    perform(&mut harness, EntityId(9), PerformedAction::Walk);

    assert_eq!(harness.engine().action_points(), PLAYER_BUDGET);
}

#[test]
#[should_panic(expected = "exceeds remaining action points")]
fn overspending_is_a_contract_violation() {
    let mut harness = started_skirmish();
    harness.pass();
    harness.host.equip(E1, EquipmentSlot::RightHand, SWORD);

    perform(&mut harness, E1, PerformedAction::Strike(EquipmentSlot::RightHand));
    perform(&mut harness, E1, PerformedAction::Strike(EquipmentSlot::RightHand));
}
