//! Embedded default dictionary
//!
//! The dictionary shipped in `data/default_dict.json`, compiled into the binary
//! so the game can be played without any file next to it.

/// JSON text of the default dictionary
pub const DEFAULT_DICTIONARY_JSON: &str = include_str!("../../data/default_dict.json");
