//! Messages shown during a game
//!
//! Everything is written to a caller-supplied writer so that sessions can be
//! driven from stdin/stdout or from scripted buffers.

use super::formatters::{guess_progress_bar, plural};
use crate::core::Word;
use crate::game::{GameConfig, Rejection};
use colored::Colorize;
use std::io::{self, Write};

pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hello! What's your name?")
}

/// Explain the rules once the secret word is known
pub fn write_rules<W: Write>(
    out: &mut W,
    name: &str,
    word: &Word,
    target: isize,
    config: &GameConfig,
) -> io::Result<()> {
    writeln!(out, "Let's play, {}", name.bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(
        out,
        "You need to make {target} words from word '{}'.",
        word.text().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "New words must be at least {} letters long.",
        config.shortest_guess()
    )?;
    writeln!(
        out,
        "If you want to leave this game - write '{}'.",
        config.quit_token
    )?;
    writeln!(out, "Good luck!")?;
    writeln!(out)
}

pub fn write_prompt<W: Write>(out: &mut W, quit_token: &str) -> io::Result<()> {
    write!(out, "Type your new word or '{quit_token}' to leave this game: ")?;
    out.flush()
}

pub fn write_rejection<W: Write>(out: &mut W, rejection: Rejection, word: &Word) -> io::Result<()> {
    let message = match rejection {
        Rejection::TooShort => {
            "This is very short subword! Don't forget about rules! Try again.".to_string()
        }
        Rejection::SecretWord => {
            "Thought to cheat? We do not accept this word! Try again.".to_string()
        }
        Rejection::NotSubword => format!(
            "This is incorrect subword! Don't forget your word - '{}'. Try again.",
            word.text()
        ),
        Rejection::AlreadyGuessed => "You already guessed this word. Try again.".to_string(),
    };

    writeln!(out, "{}", message.yellow())?;
    writeln!(out)
}

pub fn write_accepted<W: Write>(out: &mut W, guessed: usize, target: isize) -> io::Result<()> {
    writeln!(
        out,
        "{} [{}]",
        format!("It's good subword! You guessed {guessed} of {target}! Let's go next.").green(),
        guess_progress_bar(guessed, target, 20).cyan()
    )?;
    writeln!(out)
}

pub fn write_farewell<W: Write>(out: &mut W, name: &str, guessed: usize) -> io::Result<()> {
    writeln!(
        out,
        "We will miss you {name}! You guessed only {guessed} {}!",
        plural(guessed, "word")
    )
}

/// Celebration banner
pub fn write_victory<W: Write>(
    out: &mut W,
    name: &str,
    word: &Word,
    guessed: &[String],
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!("All subwords are guessed! You are amazing {name}! Come and we'll play again!")
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    if !guessed.is_empty() {
        writeln!(out, "\n  Words found in '{}':", word.text())?;
        for (i, subword) in guessed.iter().enumerate() {
            writeln!(
                out,
                "    {}. {}",
                (i + 1).to_string().bright_black(),
                subword.bright_white().bold()
            )?;
        }
    }
    writeln!(out)
}
