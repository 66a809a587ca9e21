//! The player aggregate.

use std::collections::BTreeSet;

use super::{InventoryComponent, Item};
use crate::mechanics::{self, PlayerEvent, MAX_HEALTH};
use crate::world_state::RoomId;

/// Everything the room engine reads and mutates during a session.
///
/// Owned by the game controller and lent to each room step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    /// Always within `0..=MAX_HEALTH`; zero means dead.
    pub health: u32,
    pub inventory: InventoryComponent,
    pub current_room: RoomId,
    /// Only grows. Drives narration, never gates actions.
    pub visited_rooms: BTreeSet<RoomId>,
    pub game_over: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: String::new(),
            health: MAX_HEALTH,
            inventory: InventoryComponent::default(),
            current_room: RoomId::Start,
            visited_rooms: BTreeSet::new(),
            game_over: false,
        }
    }
}

impl PlayerState {
    /// Fresh state for a new game.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has(&self, item: Item) -> bool {
        self.inventory.contains(item)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_visited(&self, room: RoomId) -> bool {
        self.visited_rooms.contains(&room)
    }

    /// Record a visit. Returns `true` on the first visit to `room`.
    pub fn mark_visited(&mut self, room: RoomId) -> bool {
        self.visited_rooms.insert(room)
    }

    /// Pick up an item. `None` if it was already carried.
    pub fn add_item(&mut self, item: Item) -> Option<PlayerEvent> {
        self.inventory
            .insert(item)
            .then_some(PlayerEvent::PickedUp(item))
    }

    /// Use up an item. `None` if it was not carried.
    pub fn remove_item(&mut self, item: Item) -> Option<PlayerEvent> {
        self.inventory
            .remove(item)
            .then_some(PlayerEvent::Used(item))
    }

    /// Take damage. Health is clamped at zero, which ends the game.
    pub fn apply_damage(&mut self, amount: u32) -> PlayerEvent {
        self.health = mechanics::damaged(self.health, amount);
        if self.health == 0 {
            self.game_over = true;
            PlayerEvent::Died
        } else {
            PlayerEvent::TookDamage {
                amount,
                health: self.health,
            }
        }
    }

    pub fn heal(&mut self, amount: u32) -> PlayerEvent {
        self.health = mechanics::healed(self.health, amount);
        PlayerEvent::Healed {
            amount,
            health: self.health,
        }
    }
}
