//! Entity definitions for the game world.

mod components;
mod player;

pub use components::*;
pub use player::*;

use serde::{Deserialize, Serialize};

/// The fixed vocabulary of items the rooms hand out and check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Found in the chest at the start. Opens the corridor door.
    Key,
    /// Lies on the kitchen counter. Scares off the pantry creature.
    Knife,
    /// Dropped by the fleeing creature. Opens the portal in the treasure room.
    Medallion,
}

impl Item {
    pub const ALL: [Item; 3] = [Item::Key, Item::Knife, Item::Medallion];

    /// Identifier used in narration and in save files.
    pub fn id(&self) -> &'static str {
        match self {
            Item::Key => "key",
            Item::Knife => "knife",
            Item::Medallion => "medallion",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
