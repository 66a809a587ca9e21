//! The transition table: what each action does in each room.
//!
//! Pure with respect to I/O. `CheckInventory` and `SaveGame` need the console
//! and the save store, so the step driver handles them and they resolve to
//! [`Next::Stay`] here.

use game_rules::{Item, PlayerState, RoomId};
use log::warn;

use super::{Action, Next};
use crate::events::{Ending, GameEvent};

/// Effects of one action, in the order they should be narrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub events: Vec<GameEvent>,
    pub next: Next,
}

impl Transition {
    fn to(next: Next) -> Self {
        Self {
            events: Vec::new(),
            next,
        }
    }

    fn with(mut self, event: impl Into<GameEvent>) -> Self {
        self.events.push(event.into());
        self
    }

    fn say(self, line: &'static str) -> Self {
        self.with(GameEvent::Narration(line))
    }
}

/// Apply `action` taken in `room` to `state`.
pub fn resolve(room: RoomId, action: Action, state: &mut PlayerState) -> Transition {
    use Action::*;
    use RoomId::*;

    match (room, action) {
        (Start, GoLeft) => Transition::to(Next::Move(Corridor)),
        (Start, GoRight) => Transition::to(Next::Move(Kitchen)),
        (Start, OpenChest) => match state.add_item(Item::Key) {
            Some(event) => Transition::to(Next::Stay)
                .say("You open the chest and find a rusty KEY inside.")
                .with(event),
            None => Transition::to(Next::Stay).say("The chest is empty."),
        },
        (Start, QuitGame) => Transition::to(Next::End(Ending::Quit)),

        (Corridor, TryDoor) => {
            if !state.has(Item::Key) {
                return Transition::to(Next::Stay)
                    .say("The door is locked. You need a key to open it.");
            }
            let mut transition = Transition::to(Next::Move(TreasureRoom))
                .say("The key fits! The door unlocks with a satisfying click.");
            transition.events.extend(state.remove_item(Item::Key).map(GameEvent::from));
            transition
        }
        (Corridor, GoBack) => Transition::to(Next::Move(Start)),

        (Kitchen, TakeKnife) => match state.add_item(Item::Knife) {
            Some(event) => Transition::to(Next::Stay)
                .with(event)
                .say("You take the knife. It might be useful for protection."),
            None => Transition::to(Next::Stay).say("You already have the knife."),
        },
        (Kitchen, OpenPantry) => Transition::to(Next::Move(Pantry)),
        (Kitchen, GoBack) => Transition::to(Next::Move(Start)),

        (Pantry, TakeMedallion) => {
            let mut transition = Transition::to(Next::Move(Kitchen));
            transition.events.extend(state.add_item(Item::Medallion).map(GameEvent::from));
            transition.say("The medallion feels warm to the touch.")
        }
        (Pantry, GoBack) => Transition::to(Next::Move(Kitchen)),

        (TreasureRoom, EnterPortal) => Transition::to(Next::End(Ending::Escaped)),
        (TreasureRoom, TakeTreasure) => Transition::to(Next::End(Ending::Trapped)),
        (TreasureRoom, GoBack) => Transition::to(Next::Move(Corridor)),

        (_, CheckInventory | SaveGame) => Transition::to(Next::Stay),
        (room, action) => {
            warn!("{} is not offered in {room}; staying put", action.label());
            Transition::to(Next::Stay)
        }
    }
}
