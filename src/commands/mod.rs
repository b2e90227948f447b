//! Command implementations

#[cfg(feature = "scrape")]
pub mod generate;
pub mod play;
pub mod stats;

#[cfg(feature = "scrape")]
pub use generate::{
    GenerateConfig, GenerateSummary, Generation, PageSource, WordFinder, run_generate,
};
pub use play::{PlayResult, run_play};
pub use stats::{StatsResult, dictionary_stats};
