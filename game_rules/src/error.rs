//! Errors raised by the rules crate.

use thiserror::Error;

use crate::entities::Item;
use crate::world_state::RoomId;

/// Errors raised when a snapshot cannot be turned back into a [`crate::PlayerState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Snapshot written by an incompatible schema revision.
    #[error("schema mismatch: expected version {expected}, got {found}")]
    SchemaMismatch { expected: u8, found: u8 },

    #[error("player name is empty")]
    EmptyName,

    #[error("health {0} is outside 1..=100")]
    HealthOutOfRange(u32),

    #[error("item listed twice in inventory: {0}")]
    DuplicateItem(Item),

    #[error("room listed twice in visited rooms: {0}")]
    DuplicateRoom(RoomId),
}
