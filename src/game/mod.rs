//! Game rules and session state
//!
//! [`Session`] drives one game: it validates every guess against the secret
//! word and the player's history and decides when the game is won or left.

mod config;
mod session;

pub use config::{GameConfig, MINIMAL_AMOUNT, MINIMAL_LENGTH, QUIT_TOKEN};
pub use session::{GameState, GuessOutcome, Rejection, Session, SessionError, check_guess};
