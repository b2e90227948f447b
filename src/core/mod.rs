//! Core domain types for the subwords game
//!
//! The secret word with its subword list, and the player who tries to find them.
//! Both are pure, in-memory types; loading and I/O live elsewhere.

mod player;
mod word;

pub use player::Player;
pub use word::{CountAnomaly, Word};
