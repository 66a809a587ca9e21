//! Logical save schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::entities::{InventoryComponent, Item, PlayerState};
use crate::error::RulesError;
use crate::mechanics::MAX_HEALTH;
use crate::world_state::RoomId;

/// Current revision of [`SaveData`].
pub const SAVE_SCHEMA_VERSION: u8 = 1;

/// What a save file holds. The encoding is left to the persistence adapter.
///
/// Sets are written as lists so that a hand-edited file with duplicates can be
/// detected instead of silently collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u8,
    pub player_name: String,
    pub inventory: Vec<Item>,
    pub health: u32,
    pub current_room: RoomId,
    pub visited_rooms: Vec<RoomId>,
}

impl From<&PlayerState> for SaveData {
    fn from(state: &PlayerState) -> Self {
        Self {
            version: SAVE_SCHEMA_VERSION,
            player_name: state.name.clone(),
            inventory: state.inventory.iter().collect(),
            health: state.health,
            current_room: state.current_room,
            visited_rooms: state.visited_rooms.iter().copied().collect(),
        }
    }
}

impl SaveData {
    /// Validate the snapshot and rebuild the live state from it.
    pub fn into_state(self) -> Result<PlayerState, RulesError> {
        if self.version != SAVE_SCHEMA_VERSION {
            return Err(RulesError::SchemaMismatch {
                expected: SAVE_SCHEMA_VERSION,
                found: self.version,
            });
        }
        if self.player_name.trim().is_empty() {
            return Err(RulesError::EmptyName);
        }
        // A dead player can never have saved.
        if self.health == 0 || self.health > MAX_HEALTH {
            return Err(RulesError::HealthOutOfRange(self.health));
        }

        let mut inventory = InventoryComponent::default();
        for item in self.inventory {
            if !inventory.insert(item) {
                return Err(RulesError::DuplicateItem(item));
            }
        }
        let mut visited_rooms = BTreeSet::new();
        for room in self.visited_rooms {
            if !visited_rooms.insert(room) {
                return Err(RulesError::DuplicateRoom(room));
            }
        }

        Ok(PlayerState {
            name: self.player_name,
            health: self.health,
            inventory,
            current_room: self.current_room,
            visited_rooms,
            game_over: false,
        })
    }
}
