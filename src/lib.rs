//! Subwords
//!
//! A console word game: find as many subwords of a secret word as you can.
//!
//! # Quick Start
//!
//! ```rust
//! use subwords::core::{Player, Word};
//!
//! let word = Word::new("planet", vec!["planet".into(), "plane".into(), "plan".into()]);
//! assert!(word.check_word("plane"));
//!
//! // Subwords longer than 4 letters, minus the secret word itself
//! assert_eq!(word.count_words(4), 1);
//!
//! let mut player = Player::new("Ada");
//! player.add_word("plane");
//! assert!(player.check_word("plane"));
//! ```

// Core domain types
pub mod core;

// Dictionary loading and saving
pub mod dictionary;

// Game rules and session state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
