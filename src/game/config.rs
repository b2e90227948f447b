//! Game configuration

/// Subwords must be longer than this to count towards the target
pub const MINIMAL_LENGTH: usize = 5;

/// Upper bound on the number of subwords a player must find
pub const MINIMAL_AMOUNT: usize = 8;

/// Input that ends the game early
pub const QUIT_TOKEN: &str = "STOP";

/// Tunable constants of a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum subword length used for the target count
    pub min_length: usize,
    /// Cap on the target count
    pub max_amount: usize,
    /// Literal input that quits the session
    pub quit_token: String,
}

impl GameConfig {
    #[must_use]
    pub fn new(min_length: usize, max_amount: usize) -> Self {
        Self {
            min_length,
            max_amount,
            quit_token: QUIT_TOKEN.to_string(),
        }
    }

    /// Shortest guess that is not rejected as too short
    #[must_use]
    pub const fn shortest_guess(&self) -> usize {
        self.min_length.saturating_sub(1)
    }

    /// `max_amount` as a signed cap on the target, saturating at `isize::MAX`
    #[must_use]
    pub fn amount_cap(&self) -> isize {
        isize::try_from(self.max_amount).unwrap_or(isize::MAX)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MINIMAL_LENGTH, MINIMAL_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_length, 5);
        assert_eq!(config.max_amount, 8);
        assert_eq!(config.quit_token, "STOP");
        assert_eq!(config.shortest_guess(), 4);
    }

    #[test]
    fn amount_cap_saturates() {
        assert_eq!(GameConfig::new(5, 8).amount_cap(), 8);
        assert_eq!(GameConfig::new(5, usize::MAX).amount_cap(), isize::MAX);
    }

    #[test]
    fn shortest_guess_saturates() {
        assert_eq!(GameConfig::new(0, 8).shortest_guess(), 0);
        assert_eq!(GameConfig::new(1, 8).shortest_guess(), 0);
    }
}
