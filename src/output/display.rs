//! Display functions for command results

use super::formatters::{coloring_to_emoji, gain_bar};
use crate::belief::Belief;
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::RankedGuess;
use colored::Colorize;

/// Print a ranked shortlist of guesses
pub fn print_shortlist(shortlist: &[RankedGuess]) {
    println!("\n{}", "Best guesses:".bright_cyan().bold());
    for (i, ranked) in shortlist.iter().enumerate() {
        println!(
            "  {}. {}  [{}] {}  (prior {})",
            i + 1,
            ranked.word.text().to_uppercase().bright_white().bold(),
            gain_bar(ranked.expected_gain, 20).green(),
            format!("{:.3} nats", ranked.expected_gain).bright_yellow(),
            format!("{:.1}%", ranked.prior * 100.0).bright_black(),
        );
    }
}

/// Print the most plausible remaining candidates
pub fn print_candidates(belief: &Belief, limit: usize) {
    println!("Remaining candidates:");
    for (word, p) in belief.by_descending_weight().into_iter().take(limit) {
        println!(
            "  • {} {}",
            word.text().to_uppercase(),
            format!("({:.1}%)", p * 100.0).bright_black()
        );
    }
    if belief.support_size() > limit {
        println!("  … and {} more", belief.support_size() - limit);
    }
    println!();
}

/// Print the result of a single-secret simulation
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            coloring_to_emoji(step.coloring)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Entropy:    {:.3} → {:.3} nats",
                step.entropy_before, step.entropy_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark run
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed).red()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Round distribution:".bright_cyan().bold());
        let mut rounds: Vec<&usize> = result.distribution.keys().collect();
        rounds.sort_unstable();
        for &r in rounds {
            let count = result.distribution[&r];
            let bar_len = count * 40 / result.total_words.max(1);
            println!("   {r}: {} {count}", "█".repeat(bar_len.max(1)).cyan());
        }
    }
    println!();
}
