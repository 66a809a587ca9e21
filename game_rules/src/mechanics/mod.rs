//! Game mechanics: health limits and the events raised by player mutators.

use crate::entities::Item;

/// Health of a fresh player and the ceiling for healing.
pub const MAX_HEALTH: u32 = 100;

/// Damage dealt by the pantry creature to an unarmed player.
pub const CREATURE_DAMAGE: u32 = 50;

/// Observable outcome of a [`crate::PlayerState`] mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    PickedUp(Item),
    Used(Item),
    TookDamage { amount: u32, health: u32 },
    Died,
    Healed { amount: u32, health: u32 },
}

/// Health left after taking `amount` damage. Never drops below zero.
pub fn damaged(health: u32, amount: u32) -> u32 {
    health.saturating_sub(amount)
}

/// Health after healing `amount`, capped at [`MAX_HEALTH`].
pub fn healed(health: u32, amount: u32) -> u32 {
    health.saturating_add(amount).min(MAX_HEALTH)
}
