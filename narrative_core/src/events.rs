//! Narration events and the ways a game can end.

use game_rules::PlayerEvent;

/// One line of output produced while entering a room or applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Narration(&'static str),
    Player(PlayerEvent),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Narration(text) => f.write_str(text),
            GameEvent::Player(PlayerEvent::PickedUp(item)) => write!(f, "You picked up: {item}"),
            GameEvent::Player(PlayerEvent::Used(item)) => write!(f, "You used: {item}"),
            GameEvent::Player(PlayerEvent::TookDamage { amount, health }) => {
                write!(f, "You took {amount} damage! Health is now {health}.")
            }
            GameEvent::Player(PlayerEvent::Died) => f.write_str("You have died! Game over."),
            GameEvent::Player(PlayerEvent::Healed { amount, health }) => {
                write!(f, "You healed {amount} points. Health is now {health}.")
            }
        }
    }
}

impl From<PlayerEvent> for GameEvent {
    fn from(event: PlayerEvent) -> Self {
        GameEvent::Player(event)
    }
}

/// Terminal outcomes. Reaching any of them sets `game_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Stepped through the portal with the medallion.
    Escaped,
    /// Grabbed the treasure and sprung the ceiling trap.
    Trapped,
    /// Walked into the treasure room without the medallion.
    LockedIn,
    Died,
    Quit,
}

impl Ending {
    /// Closing lines for this ending. Death is already announced by its event.
    pub fn narration(&self) -> &'static [&'static str] {
        match self {
            Ending::Escaped => &[
                "As you step through the portal, you feel a warm light surround you.",
                "You find yourself back in your own home, safe and sound.",
                "Congratulations! You've escaped with your life and the mysterious medallion!",
            ],
            Ending::Trapped => &[
                "Greed overwhelms you as you stuff your pockets with gold.",
                "Suddenly, the door slams shut and the ceiling begins to lower!",
                "You've triggered a trap! There's no escape!",
            ],
            Ending::LockedIn => &[
                "As you admire the treasure, you hear the door lock behind you!",
                "You're trapped in the treasure room forever!",
            ],
            Ending::Died | Ending::Quit => &[],
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Ending::Escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_rules::Item;

    #[test]
    fn test_player_event_text() {
        assert_eq!(
            GameEvent::from(PlayerEvent::PickedUp(Item::Key)).to_string(),
            "You picked up: key"
        );
        assert_eq!(
            GameEvent::from(PlayerEvent::TookDamage { amount: 50, health: 50 }).to_string(),
            "You took 50 damage! Health is now 50."
        );
    }

    #[test]
    fn test_only_escape_is_victory() {
        assert!(Ending::Escaped.is_victory());
        assert!(!Ending::Trapped.is_victory());
        assert!(!Ending::LockedIn.is_victory());
        assert!(Ending::Quit.narration().is_empty());
    }
}
