//! Formatting utilities for terminal output

/// Create a progress bar string
///
/// A non-positive `max` renders a full bar.
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        width
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress of a player towards the target count
#[must_use]
pub fn guess_progress_bar(guessed: usize, target: isize, width: usize) -> String {
    create_progress_bar(guessed as f64, target as f64, width)
}

/// Pick the singular or plural form of a noun
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
