//! # Narrative Core
//!
//! Drives the adventure on top of `game_rules`. Each room is a node in a small
//! state machine; a step enters the current room, narrates it, asks the player
//! for one action and applies it to the [`game_rules::PlayerState`].
//!
//! ## Core Components
//!
//! - **engine**: room scenes, the transition table and the single-step driver
//! - **game**: the controller - main menu, new/load, and the play loop
//! - **prompt**: ports for narration and line input, plus choice resolution
//! - **persistence**: the save/load port and a JSON file adapter
//! - **events**: narration events and game endings
//!
//! ## Design Philosophy
//!
//! - **Explicit State**: the player aggregate is passed by reference into every step
//! - **Pure Transitions**: what an action does is decided without touching I/O
//! - **Ports at the Edge**: rendering, input and storage are traits the binary fills in

pub mod engine;
pub mod events;
pub mod game;
pub mod persistence;
pub mod prompt;

pub use engine::*;
pub use events::*;
pub use game::*;
pub use persistence::*;
pub use prompt::*;
