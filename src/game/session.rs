//! Game session state machine
//!
//! `AwaitingName -> Playing -> {Won, Quit}`

use super::GameConfig;
use crate::core::{Player, Word};
use std::fmt;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingName,
    Playing,
    Won,
    Quit,
}

/// Why a guess was not accepted
///
/// Variants are listed in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than `min_length - 1` characters
    TooShort,
    /// The secret word itself
    SecretWord,
    /// Not in the secret word's subword list
    NotSubword,
    /// Accepted earlier in this session
    AlreadyGuessed,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(Rejection),
    Accepted { guessed: usize, target: isize },
    Quit { guessed: usize },
}

/// Error type for calls made in the wrong state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadyJoined,
    NotPlaying(GameState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyJoined => write!(f, "A player has already joined this session"),
            Self::NotPlaying(state) => write!(f, "Session is not accepting guesses ({state:?})"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Validate a guess against the game rules
///
/// Rules are checked in a fixed order and the first failing one is returned.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first rule the guess breaks.
pub fn check_guess(
    config: &GameConfig,
    word: &Word,
    player: &Player,
    guess: &str,
) -> Result<(), Rejection> {
    if guess.chars().count() < config.shortest_guess() {
        Err(Rejection::TooShort)
    } else if guess == word.text() {
        Err(Rejection::SecretWord)
    } else if !word.check_word(guess) {
        Err(Rejection::NotSubword)
    } else if player.check_word(guess) {
        Err(Rejection::AlreadyGuessed)
    } else {
        Ok(())
    }
}

/// One game: a secret word, a player, and the target they must reach
pub struct Session {
    config: GameConfig,
    word: Word,
    player: Option<Player>,
    target: isize,
    state: GameState,
}

impl Session {
    /// Create a session waiting for a player
    ///
    /// The target is `min(max_amount, word.count_words(min_length))`.
    #[must_use]
    pub fn new(config: GameConfig, word: Word) -> Self {
        if let Some(anomaly) = word.count_anomaly(config.min_length) {
            log::warn!(
                "subword count for '{}' is off by one: {anomaly}",
                word.text()
            );
        }

        let target = word.count_words(config.min_length).min(config.amount_cap());
        log::info!(
            "new session: {} subwords, target {target}",
            word.subwords().len()
        );

        Self {
            config,
            word,
            player: None,
            target,
            state: GameState::AwaitingName,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of accepted guesses needed to win
    #[inline]
    #[must_use]
    pub const fn target(&self) -> isize {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player, once one has joined
    #[inline]
    #[must_use]
    pub const fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Register the player and start playing
    ///
    /// A session whose target is not positive is won immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyJoined`] if a player already joined.
    pub fn join(&mut self, name: impl Into<String>) -> Result<GameState, SessionError> {
        if self.state != GameState::AwaitingName {
            return Err(SessionError::AlreadyJoined);
        }

        let player = Player::new(name);
        log::debug!("player '{}' joined", player.name());
        self.state = if Self::reached(&player, self.target) {
            GameState::Won
        } else {
            GameState::Playing
        };
        self.player = Some(player);

        Ok(self.state)
    }

    /// Submit one line of input
    ///
    /// The quit token ends the session; anything else is treated as a guess.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotPlaying`] unless the session is playing.
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, SessionError> {
        if input == self.config.quit_token {
            return self.quit();
        }

        let player = match (self.state, self.player.as_mut()) {
            (GameState::Playing, Some(player)) => player,
            (state, _) => return Err(SessionError::NotPlaying(state)),
        };

        if let Err(rejection) = check_guess(&self.config, &self.word, player, input) {
            log::debug!("rejected '{input}': {rejection:?}");
            return Ok(GuessOutcome::Rejected(rejection));
        }

        player.add_word(input);
        let guessed = player.count_words();
        log::debug!("accepted '{input}' ({guessed} of {})", self.target);

        if Self::reached(player, self.target) {
            self.state = GameState::Won;
        }

        Ok(GuessOutcome::Accepted {
            guessed,
            target: self.target,
        })
    }

    /// Leave the session, reporting the number of accepted guesses
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotPlaying`] unless the session is playing.
    pub fn quit(&mut self) -> Result<GuessOutcome, SessionError> {
        let guessed = match (self.state, self.player.as_ref()) {
            (GameState::Playing, Some(player)) => player.count_words(),
            (state, _) => return Err(SessionError::NotPlaying(state)),
        };

        self.state = GameState::Quit;
        Ok(GuessOutcome::Quit { guessed })
    }

    fn reached(player: &Player, target: isize) -> bool {
        player.count_words() as isize >= target
    }
}
