//! The map of rooms and the persisted snapshot of a session.

mod save;

pub use save::*;

use serde::{Deserialize, Serialize};

/// Rooms of the map. Endings are not rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    Start,
    Corridor,
    Kitchen,
    Pantry,
    TreasureRoom,
}

impl RoomId {
    pub const ALL: [RoomId; 5] = [
        RoomId::Start,
        RoomId::Corridor,
        RoomId::Kitchen,
        RoomId::Pantry,
        RoomId::TreasureRoom,
    ];

    /// Name shown on the status card.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomId::Start => "Start",
            RoomId::Corridor => "Corridor",
            RoomId::Kitchen => "Kitchen",
            RoomId::Pantry => "Pantry",
            RoomId::TreasureRoom => "Treasure Room",
        }
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
