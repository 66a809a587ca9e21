/// Scenario tests stepping the room engine one action at a time
mod common;

use common::{MemoryStore, ScriptedConsole};
use game_rules::{Item, PlayerState, RoomId};
use narrative_core::{step, Ending};

fn run_steps(state: &mut PlayerState, console: &mut ScriptedConsole, steps: usize) -> Option<Ending> {
    let mut store = MemoryStore::default();
    let mut ending = None;
    for _ in 0..steps {
        ending = step(state, console, &mut store).expect("step");
    }
    ending
}

#[test]
fn test_go_right_then_back() {
    let mut state = PlayerState::new("Ada");
    let mut console = ScriptedConsole::new(&["Go right", "Go back"]);

    run_steps(&mut state, &mut console, 1);
    assert_eq!(state.current_room, RoomId::Kitchen);

    run_steps(&mut state, &mut console, 1);
    assert_eq!(state.current_room, RoomId::Start);
    assert!(state.has_visited(RoomId::Kitchen));
}

#[test]
fn test_chest_key_opens_corridor_door() {
    let mut state = PlayerState::new("Ada");
    let mut console = ScriptedConsole::new(&["open chest", "go left", "try door"]);

    run_steps(&mut state, &mut console, 1);
    assert!(state.has(Item::Key));
    assert_eq!(state.current_room, RoomId::Start);

    run_steps(&mut state, &mut console, 1);
    assert_eq!(state.current_room, RoomId::Corridor);

    run_steps(&mut state, &mut console, 1);
    assert!(!state.has(Item::Key));
    assert_eq!(state.current_room, RoomId::TreasureRoom);
    assert!(console.said("You used: key"));
}

#[test]
fn test_treasure_room_without_medallion_traps_immediately() {
    let mut state = PlayerState::new("Ada");
    state.current_room = RoomId::TreasureRoom;
    let mut console = ScriptedConsole::new(&[]);

    let ending = run_steps(&mut state, &mut console, 1);

    assert_eq!(ending, Some(Ending::LockedIn));
    assert!(state.game_over);
    assert!(!console.said("Enter portal"));
    assert!(console.said("You're trapped in the treasure room forever!"));
}

#[test]
fn test_knife_scares_creature_and_offers_medallion() {
    let mut state = PlayerState::new("Ada");
    state.current_room = RoomId::Kitchen;
    let mut console = ScriptedConsole::new(&["Take knife", "Open pantry", "Take medallion"]);

    run_steps(&mut state, &mut console, 2);
    assert!(state.has(Item::Knife));
    assert_eq!(state.current_room, RoomId::Pantry);

    run_steps(&mut state, &mut console, 1);
    assert_eq!(state.health, 100);
    assert!(console.said("1. Take medallion"));
    assert!(state.has(Item::Medallion));
    assert_eq!(state.current_room, RoomId::Kitchen);
}

#[test]
fn test_unarmed_pantry_visit_wounds() {
    let mut state = PlayerState::new("Ada");
    state.current_room = RoomId::Kitchen;
    let mut console = ScriptedConsole::new(&["Open pantry"]);

    run_steps(&mut state, &mut console, 2);

    assert_eq!(state.health, 50);
    assert_eq!(state.current_room, RoomId::Kitchen);
    assert!(!state.game_over);
    assert!(console.said("You took 50 damage! Health is now 50."));
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn test_second_unarmed_pantry_visit_kills() {
    let mut state = PlayerState::new("Ada");
    state.current_room = RoomId::Kitchen;
    let mut console = ScriptedConsole::new(&["Open pantry", "Open pantry"]);

    let ending = run_steps(&mut state, &mut console, 4);

    assert_eq!(ending, Some(Ending::Died));
    assert_eq!(state.health, 0);
    assert!(state.game_over);
    assert!(console.said("You have died! Game over."));
}

#[test]
fn test_check_inventory_stays_in_room() {
    let mut state = PlayerState::new("Ada");
    state.current_room = RoomId::Corridor;
    let mut console = ScriptedConsole::new(&["check", "try door"]);

    run_steps(&mut state, &mut console, 2);

    assert_eq!(state.current_room, RoomId::Corridor);
    assert!(console.said("Location: Corridor"));
    assert!(console.said("The door is locked. You need a key to open it."));
    assert!(console.said("You're back in the creaky corridor."));
}

#[test]
fn test_invalid_input_is_reprompted() {
    let mut state = PlayerState::new("Ada");
    let mut console = ScriptedConsole::new(&["", "go", "42", "2"]);

    run_steps(&mut state, &mut console, 1);

    assert_eq!(state.current_room, RoomId::Kitchen);
    let invalid = console
        .output
        .iter()
        .filter(|l| l.starts_with("Invalid choice"))
        .count();
    assert_eq!(invalid, 3);
}
