//! Batch simulation over a fixed test set
//!
//! Runs the advisor against every secret in a list and aggregates solve
//! statistics.

use crate::belief::Belief;
use crate::core::{Coloring, Word};
use crate::solver::Advisor;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Simulate every secret in `secrets`, starting each game from `prior`
///
/// A game fails when the round limit is exceeded or the belief drains (the
/// secret was outside the modeled space). Failed games still count their
/// rounds toward the average, as a solver that burns six rounds and loses
/// should not look cheap.
pub fn run_benchmark<R: Rng>(
    prior: &Belief,
    secrets: &[Word],
    round_limit: usize,
    advisor: &mut Advisor<'_, R>,
) -> BenchmarkResult {
    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut failed = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut belief = prior.clone();
        let mut rounds = 0;
        let mut won = false;

        for round in 1..=round_limit {
            rounds = round;

            let Some(guess) = advisor.recommend(&belief, round) else {
                break;
            };

            let coloring = Coloring::of(secret, &guess);
            if coloring.is_perfect() {
                won = true;
                break;
            }

            belief = advisor.observe(&belief, &guess, coloring);
            if belief.is_empty() {
                break;
            }
        }

        if won {
            solved += 1;
            *distribution.entry(rounds).or_insert(0) += 1;
        } else {
            failed += 1;
        }

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);

        pb.set_message(secret.text().to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = secrets.len();

    BenchmarkResult {
        total_words,
        solved,
        failed,
        average_rounds: if total_words == 0 {
            0.0
        } else {
            total_rounds as f64 / total_words as f64
        },
        min_rounds: if total_words == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(1e-9),
    }
}
