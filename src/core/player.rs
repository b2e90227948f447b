//! Player state for a single session

/// A player and the subwords they have found so far
///
/// Accepted guesses are kept in the order they were made. The game rejects
/// repeats before calling [`Player::add_word`], so the list has no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    used_words: Vec<String>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            used_words: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Record an accepted guess
    pub fn add_word(&mut self, word: impl Into<String>) {
        self.used_words.push(word.into());
    }

    /// Check whether a word was already guessed
    #[must_use]
    pub fn check_word(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn count_words(&self) -> usize {
        self.used_words.len()
    }
}
