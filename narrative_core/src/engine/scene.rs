//! What the player sees and may do on entering each room.

use game_rules::{Item, PlayerState, RoomId, CREATURE_DAMAGE};

use super::Next;
use crate::events::{Ending, GameEvent};

/// Every action a room can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GoLeft,
    GoRight,
    OpenChest,
    CheckInventory,
    SaveGame,
    QuitGame,
    TryDoor,
    GoBack,
    TakeKnife,
    OpenPantry,
    TakeMedallion,
    EnterPortal,
    TakeTreasure,
}

impl Action {
    /// Menu label, also what the player types to pick it.
    pub fn label(&self) -> &'static str {
        match self {
            Action::GoLeft => "Go left",
            Action::GoRight => "Go right",
            Action::OpenChest => "Open chest",
            Action::CheckInventory => "Check inventory",
            Action::SaveGame => "Save game",
            Action::QuitGame => "Quit game",
            Action::TryDoor => "Try door",
            Action::GoBack => "Go back",
            Action::TakeKnife => "Take knife",
            Action::OpenPantry => "Open pantry",
            Action::TakeMedallion => "Take medallion",
            Action::EnterPortal => "Enter portal",
            Action::TakeTreasure => "Take treasure",
        }
    }
}

/// How an entry finishes once its narration is out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer {
    /// Ask the player to pick one of these.
    Choose(Vec<Action>),
    /// The room decided on its own; no prompt.
    Forced(Next),
}

/// Result of walking into a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub events: Vec<GameEvent>,
    pub offer: Offer,
}

impl Scene {
    fn new() -> Self {
        Self {
            events: Vec::new(),
            offer: Offer::Forced(Next::Stay),
        }
    }

    fn say(&mut self, lines: &[&'static str]) {
        self.events
            .extend(lines.iter().copied().map(GameEvent::Narration));
    }

    fn choose(mut self, actions: &[Action]) -> Self {
        self.offer = Offer::Choose(actions.to_vec());
        self
    }

    fn forced(mut self, next: Next) -> Self {
        self.offer = Offer::Forced(next);
        self
    }
}

/// Enter `room`: record the visit, narrate, and apply any on-entry effects.
pub fn enter(room: RoomId, state: &mut PlayerState) -> Scene {
    match room {
        RoomId::Start => start(state),
        RoomId::Corridor => corridor(state),
        RoomId::Kitchen => kitchen(state),
        RoomId::Pantry => pantry(state),
        RoomId::TreasureRoom => treasure_room(state),
    }
}

fn start(state: &mut PlayerState) -> Scene {
    state.mark_visited(RoomId::Start);
    let mut scene = Scene::new();

    // Waking up happens once per game, not once per room.
    if state.visited_rooms.len() == 1 {
        scene.say(&[
            "You wake up in a dimly lit room with no memory of how you got here.",
            "The air is damp and cold. You can hear distant dripping water.",
        ]);
    } else {
        scene.say(&["You return to the room where you first woke up."]);
    }
    scene.say(&[
        "There are two doors: one to your LEFT and one to your RIGHT.",
        "There's also a small CHEST in the corner.",
    ]);
    scene.choose(&[
        Action::GoLeft,
        Action::GoRight,
        Action::OpenChest,
        Action::CheckInventory,
        Action::SaveGame,
        Action::QuitGame,
    ])
}

fn corridor(state: &mut PlayerState) -> Scene {
    let mut scene = Scene::new();
    if state.mark_visited(RoomId::Corridor) {
        scene.say(&["You enter a long, dark corridor. The floor creaks with each step."]);
    } else {
        scene.say(&["You're back in the creaky corridor."]);
    }
    scene.say(&[
        "At the end of the corridor is a heavy DOOR with a keyhole.",
        "You can also go BACK to the previous room.",
    ]);
    scene.choose(&[Action::TryDoor, Action::GoBack, Action::CheckInventory])
}

fn kitchen(state: &mut PlayerState) -> Scene {
    let mut scene = Scene::new();
    if state.mark_visited(RoomId::Kitchen) {
        scene.say(&[
            "You enter what appears to be an abandoned kitchen.",
            "There's a foul smell coming from the pantry.",
        ]);
    } else {
        scene.say(&["You're back in the smelly kitchen."]);
    }
    scene.say(&[
        "You see a KNIFE on the counter and the PANTRY door is slightly ajar.",
        "You can also go BACK to the previous room.",
    ]);
    scene.choose(&[
        Action::TakeKnife,
        Action::OpenPantry,
        Action::GoBack,
        Action::CheckInventory,
    ])
}

fn pantry(state: &mut PlayerState) -> Scene {
    state.mark_visited(RoomId::Pantry);
    let mut scene = Scene::new();

    // The creature lurks until its medallion has been taken.
    if state.has(Item::Medallion) {
        scene.say(&[
            "The pantry is empty now, except for the lingering smell.",
            "You can go BACK to the kitchen.",
        ]);
        return scene.choose(&[Action::GoBack]);
    }

    scene.say(&[
        "As you open the pantry door, a horrible stench overwhelms you!",
        "A grotesque creature leaps at you from the shadows!",
    ]);
    if state.has(Item::Knife) {
        scene.say(&[
            "You quickly pull out your knife and defend yourself!",
            "The creature lets out a shriek and retreats into the darkness.",
            "In the commotion, you notice a small MEDALLION on the floor.",
        ]);
        return scene.choose(&[Action::TakeMedallion, Action::GoBack]);
    }

    scene.events.push(state.apply_damage(CREATURE_DAMAGE).into());
    if state.game_over {
        return scene.forced(Next::End(Ending::Died));
    }
    scene.say(&["You manage to escape back to the kitchen, badly wounded."]);
    scene.forced(Next::Move(RoomId::Kitchen))
}

fn treasure_room(state: &mut PlayerState) -> Scene {
    state.mark_visited(RoomId::TreasureRoom);
    let mut scene = Scene::new();
    scene.say(&["You enter a magnificent chamber filled with gold and jewels!"]);

    if !state.has(Item::Medallion) {
        return scene.forced(Next::End(Ending::LockedIn));
    }
    scene.say(&[
        "The medallion in your pocket begins to glow brightly!",
        "A portal opens before you, offering escape from this place!",
    ]);
    scene.choose(&[Action::EnterPortal, Action::TakeTreasure, Action::GoBack])
}
