//! Subword dictionaries
//!
//! A dictionary maps every playable word to the ordered list of its subwords.
//! Generation puts each word into its own list.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_DICTIONARY_JSON;
pub use loader::{load_from_file, save_to_file};

use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Mapping from word to subwords, as stored in the dictionary JSON file
///
/// Keys are kept sorted so that seeded random selection is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Vec<String>>,
}

/// Error type for loading and saving dictionaries
#[derive(Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened, read or written
    Io { path: PathBuf, source: io::Error },
    /// The contents are not a JSON object of string arrays
    Parse(serde_json::Error),
    /// The dictionary has no words to play with
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot access dictionary '{}': {source}", path.display())
            }
            Self::Parse(err) => write!(f, "Malformed dictionary: {err}"),
            Self::Empty => write!(f, "Dictionary contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl Dictionary {
    /// Parse a dictionary from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] if the text is not a JSON object
    /// mapping strings to arrays of strings.
    ///
    /// # Examples
    /// ```
    /// use subwords::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_json_str(r#"{"garden": ["garden", "danger"]}"#).unwrap();
    /// assert_eq!(dictionary.len(), 1);
    /// assert!(Dictionary::from_json_str("[1, 2]").is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(json).map_err(DictionaryError::Parse)
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] if the embedded file is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json_str(DEFAULT_DICTIONARY_JSON)
    }

    /// Add or replace the subwords of a word
    pub fn insert(&mut self, word: impl Into<String>, subwords: Vec<String>) {
        self.entries.insert(word.into(), subwords);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the subwords of a word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Iterate over the words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over (word, subwords) pairs in sorted word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, subwords)| (word.as_str(), subwords.as_slice()))
    }

    /// Pick one entry uniformly at random
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &[String])> {
        let words: Vec<&String> = self.entries.keys().collect();
        let word = words.choose(rng)?;
        self.entries
            .get_key_value(word.as_str())
            .map(|(word, subwords)| (word.as_str(), subwords.as_slice()))
    }

    /// Write the dictionary as JSON indented with four spaces
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
    }
}
