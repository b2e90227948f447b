//! Secret word representation
//!
//! A Word stores the secret word of a session along with every subword the
//! dictionary lists for it.

use crate::dictionary::{Dictionary, DictionaryError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// The secret word of a game session and its subwords
///
/// The subword list keeps dictionary order. It normally contains the secret
/// word itself, which [`Word::count_words`] relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    subwords: Vec<String>,
    lookup: FxHashSet<String>,
}

/// Reasons why [`Word::count_words`] is off by one for a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAnomaly {
    /// The secret word is missing from its own subword list
    MissingFromSubwords,
    /// The secret word is not longer than the minimum length, so it was never counted
    NotLongerThanMinimum,
}

impl fmt::Display for CountAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFromSubwords => write!(f, "word is missing from its own subword list"),
            Self::NotLongerThanMinimum => {
                write!(f, "word is not longer than the minimum subword length")
            }
        }
    }
}

impl Word {
    /// Create a Word from its text and subword list
    ///
    /// # Examples
    /// ```
    /// use subwords::core::Word;
    ///
    /// let word = Word::new("planet", vec!["planet".into(), "plane".into()]);
    /// assert_eq!(word.text(), "planet");
    /// assert!(word.check_word("plane"));
    /// ```
    pub fn new(text: impl Into<String>, subwords: Vec<String>) -> Self {
        let lookup = subwords.iter().cloned().collect();
        Self {
            text: text.into(),
            subwords,
            lookup,
        }
    }

    /// Pick a secret word uniformly at random from a dictionary
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if the dictionary has no entries.
    pub fn choose<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Self, DictionaryError> {
        let (text, subwords) = dictionary.choose(rng).ok_or(DictionaryError::Empty)?;
        Ok(Self::new(text, subwords.to_vec()))
    }

    /// Get the secret word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the subwords in dictionary order
    #[inline]
    #[must_use]
    pub fn subwords(&self) -> &[String] {
        &self.subwords
    }

    /// Check whether a candidate is one of the subwords
    ///
    /// Exact, case-sensitive match with no normalization.
    #[inline]
    #[must_use]
    pub fn check_word(&self, candidate: &str) -> bool {
        self.lookup.contains(candidate)
    }

    /// Count the subwords strictly longer than `min_length`, minus one for the secret word
    ///
    /// The subtraction is unconditional. When [`Word::count_anomaly`] reports a
    /// problem the result is one lower than the number of guessable subwords and
    /// can be negative.
    #[must_use]
    pub fn count_words(&self, min_length: usize) -> isize {
        let longer = self
            .subwords
            .iter()
            .filter(|subword| subword.chars().count() > min_length)
            .count();

        longer as isize - 1
    }

    /// Report why [`Word::count_words`] would be off by one, if it would
    #[must_use]
    pub fn count_anomaly(&self, min_length: usize) -> Option<CountAnomaly> {
        if !self.check_word(&self.text) {
            Some(CountAnomaly::MissingFromSubwords)
        } else if self.text.chars().count() <= min_length {
            Some(CountAnomaly::NotLongerThanMinimum)
        } else {
            None
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
