//! Room Engine - the state machine over rooms.
//!
//! A single [`step`] works as follows:
//! 1. **Enter**: the current room records the visit and narrates itself
//! 2. **Forced outcomes**: some rooms decide on entry (pantry fight, locked treasure room)
//! 3. **Choice**: otherwise the player picks one of the offered actions
//! 4. **Resolve**: the transition table applies the action to the player state
//! 5. **Advance**: move, stay (re-enter next step) or end the game
//!
//! Staying in a room is another turn of the caller's loop, never recursion.

mod scene;
mod transitions;

pub use scene::*;
pub use transitions::*;

use game_rules::{PlayerState, RoomId};
use log::{debug, info, warn};

use crate::events::{Ending, GameEvent};
use crate::persistence::SaveStore;
use crate::prompt::{ChoicePrompter, Narrator, PromptError};

/// Prompt shown with every room menu.
pub const ROOM_PROMPT: &str = "What will you do?";

/// Where the player ends up after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Remain in the current room; it is entered again next step.
    Stay,
    Move(RoomId),
    End(Ending),
}

/// Run one room entry and at most one player action.
///
/// Returns the ending once the game is over.
pub fn step<C, S>(
    state: &mut PlayerState,
    console: &mut C,
    store: &mut S,
) -> Result<Option<Ending>, PromptError>
where
    C: Narrator + ChoicePrompter,
    S: SaveStore,
{
    let room = state.current_room;
    debug!("entering {room} (health {}, inventory: {})", state.health, state.inventory.describe());

    let scene = scene::enter(room, state);
    narrate(console, &scene.events);

    let next = match scene.offer {
        Offer::Forced(next) => next,
        Offer::Choose(actions) => {
            let labels: Vec<&str> = actions.iter().map(Action::label).collect();
            let choice = console.choose(ROOM_PROMPT, &labels)?;
            let Some(&action) = actions.get(choice) else {
                warn!("{room}: choice {choice} is out of range for {} options", actions.len());
                return Ok(None);
            };
            debug!("{room}: chose {}", action.label());
            match action {
                Action::CheckInventory => console.show(&status_card(state)),
                Action::SaveGame => save(state, console, store),
                _ => {}
            }
            let transition = transitions::resolve(room, action, state);
            narrate(console, &transition.events);
            transition.next
        }
    };

    Ok(advance(state, next, console))
}

fn advance<C: Narrator>(state: &mut PlayerState, next: Next, console: &mut C) -> Option<Ending> {
    match next {
        Next::Stay => None,
        Next::Move(room) => {
            debug!("moving {} -> {room}", state.current_room);
            state.current_room = room;
            None
        }
        Next::End(ending) => {
            for line in ending.narration() {
                console.say(line);
            }
            state.game_over = true;
            info!("game over for {}: {ending:?}", state.name);
            Some(ending)
        }
    }
}

fn narrate<C: Narrator>(console: &mut C, events: &[GameEvent]) {
    for event in events {
        console.say(&event.to_string());
    }
}

fn save<C: Narrator, S: SaveStore>(state: &PlayerState, console: &mut C, store: &mut S) {
    match store.save(state) {
        Ok(()) => console.say("Game saved successfully!"),
        Err(e) => {
            warn!("save failed: {e}");
            console.say("Failed to save game.");
        }
    }
}

/// The "Check inventory" card.
pub fn status_card(state: &PlayerState) -> String {
    let rule = "=".repeat(40);
    format!(
        "\n{rule}\nName: {}\nHealth: {}\nInventory: {}\nLocation: {}\n{rule}\n",
        state.name,
        state.health,
        state.inventory.describe(),
        state.current_room.display_name(),
    )
}
