//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. The session has
//! no notion of held keys, so each press becomes exactly one intent.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
