//! Display functions for command results

use super::formatters::{create_progress_bar, plural};
#[cfg(feature = "scrape")]
use crate::commands::GenerateSummary;
use crate::commands::StatsResult;
use colored::Colorize;

/// Print dictionary statistics
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Contents:".bright_cyan().bold());
    println!("   Words:            {}", result.words);
    println!("   Subwords:         {}", result.total_subwords);
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_subwords).bright_yellow().bold()
    );

    println!("\n🎯 {}", "Playability:".bright_cyan().bold());
    let bar = create_progress_bar(result.playable as f64, result.words as f64, 30);
    println!(
        "   Playable:         [{}] {}/{}",
        bar.green(),
        result.playable,
        result.words
    );
    if let Some((word, count)) = &result.best_word {
        println!(
            "   Richest word:     {} ({count} subwords longer than {})",
            word.bright_white().bold(),
            result.min_length
        );
    }

    if result.anomalies.is_empty() {
        println!("\n{}", "✅ Every word counts its subwords correctly".green());
    } else {
        println!(
            "\n{}",
            format!(
                "⚠️  {} {} with a subword count off by one:",
                result.anomalies.len(),
                plural(result.anomalies.len(), "word")
            )
            .yellow()
            .bold()
        );
        for (word, anomaly) in &result.anomalies {
            println!("   • {}: {anomaly}", word.bright_white());
        }
    }
}

/// Print the result of a dictionary generation run
#[cfg(feature = "scrape")]
pub fn print_generate_summary(summary: &GenerateSummary) {
    println!(
        "{}",
        format!(
            "✅ Wrote {} {} with {} subwords to {}",
            summary.words_written,
            plural(summary.words_written, "word"),
            summary.total_subwords,
            summary.output.display()
        )
        .green()
        .bold()
    );
    println!(
        "   Looked up {} {}",
        summary.words_looked_up,
        plural(summary.words_looked_up, "page")
    );
    println!(
        "   Skipped {} short {}",
        summary.words_skipped,
        plural(summary.words_skipped, "word")
    );
}
