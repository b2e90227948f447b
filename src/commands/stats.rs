//! Dictionary statistics command
//!
//! Summarises a dictionary and lists the words whose subword count is off by
//! one under the given game configuration.

use crate::core::{CountAnomaly, Word};
use crate::dictionary::Dictionary;
use crate::game::GameConfig;

/// Summary of a dictionary
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    pub words: usize,
    pub total_subwords: usize,
    pub average_subwords: f64,
    /// Words whose target is at least one
    pub playable: usize,
    /// Largest target over all words, before the `max_amount` cap
    pub best_word: Option<(String, isize)>,
    pub anomalies: Vec<(String, CountAnomaly)>,
    pub min_length: usize,
}

/// Collect statistics for a dictionary
#[must_use]
pub fn dictionary_stats(dictionary: &Dictionary, config: &GameConfig) -> StatsResult {
    let mut total_subwords = 0;
    let mut playable = 0;
    let mut best_word: Option<(String, isize)> = None;
    let mut anomalies = Vec::new();

    for (text, subwords) in dictionary.iter() {
        let word = Word::new(text, subwords.to_vec());
        total_subwords += subwords.len();

        let count = word.count_words(config.min_length);
        if count.min(config.amount_cap()) >= 1 {
            playable += 1;
        }
        if best_word.as_ref().is_none_or(|(_, best)| count > *best) {
            best_word = Some((text.to_string(), count));
        }
        if let Some(anomaly) = word.count_anomaly(config.min_length) {
            anomalies.push((text.to_string(), anomaly));
        }
    }

    let words = dictionary.len();
    StatsResult {
        words,
        total_subwords,
        average_subwords: if words == 0 {
            0.0
        } else {
            total_subwords as f64 / words as f64
        },
        playable,
        best_word,
        anomalies,
        min_length: config.min_length,
    }
}
