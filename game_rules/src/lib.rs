//! # Game Rules
//!
//! The rules crate of the adventure - items, rooms, the player aggregate and the
//! logical save schema. This crate is the single source of truth for game state
//! and does no I/O of its own.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
