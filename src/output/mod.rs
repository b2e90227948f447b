//! Terminal output formatting
//!
//! Game messages, reports and pretty-printing.

pub mod display;
pub mod formatters;
pub mod messages;

#[cfg(feature = "scrape")]
pub use display::print_generate_summary;
pub use display::print_stats_result;
