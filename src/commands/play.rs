//! Interactive game mode
//!
//! Reads a player name, picks a secret word and runs the guess loop until the
//! player wins or leaves.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{GameConfig, GameState, GuessOutcome, Session};
use crate::output::messages;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a played game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    /// Final session state; `AwaitingName` if input ended before a name was given
    pub state: GameState,
    pub player: Option<String>,
    pub secret: Option<String>,
    pub target: isize,
    pub guessed: Vec<String>,
}

/// Play one game over the given input and output
///
/// End of input while playing counts as leaving the game.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or reading input / writing
/// output fails.
pub fn run_play<R, W, G>(
    config: &GameConfig,
    dictionary: &Dictionary,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<PlayResult>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    messages::write_greeting(output)?;
    let Some(name) = read_line(input).context("Failed to read player name")? else {
        log::info!("input closed before a player name was given");
        return Ok(PlayResult {
            state: GameState::AwaitingName,
            player: None,
            secret: None,
            target: 0,
            guessed: Vec::new(),
        });
    };

    let word = Word::choose(dictionary, rng)?;
    let mut session = Session::new(config.clone(), word);
    session.join(name.as_str())?;
    messages::write_rules(output, &name, session.word(), session.target(), config)?;

    while session.state() == GameState::Playing {
        messages::write_prompt(output, &config.quit_token)?;
        let outcome = match read_line(input).context("Failed to read guess")? {
            Some(line) => session.submit(&line)?,
            None => {
                writeln!(output)?;
                session.quit()?
            }
        };

        match outcome {
            GuessOutcome::Rejected(rejection) => {
                messages::write_rejection(output, rejection, session.word())?;
            }
            GuessOutcome::Accepted { guessed, target } => {
                messages::write_accepted(output, guessed, target)?;
            }
            GuessOutcome::Quit { guessed } => {
                messages::write_farewell(output, &name, guessed)?;
            }
        }
    }

    let guessed = session
        .player()
        .map(|player| player.used_words().to_vec())
        .unwrap_or_default();

    if session.state() == GameState::Won {
        messages::write_victory(output, &name, session.word(), &guessed)?;
    }
    output.flush()?;

    Ok(PlayResult {
        state: session.state(),
        player: Some(name),
        secret: Some(session.word().text().to_string()),
        target: session.target(),
        guessed,
    })
}

/// Read one line without its line terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
