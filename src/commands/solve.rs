//! Single-secret simulation
//!
//! Plays a full game against a known secret and records the solution path.

use crate::belief::Belief;
use crate::core::{Coloring, Word};
use crate::solver::Advisor;
use rand::Rng;

/// Configuration for simulating a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: 6,
        }
    }
}

/// A single round in the simulation
pub struct RoundStep {
    pub word: String,
    pub coloring: Coloring,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy_before: f64,
    pub entropy_after: f64,
}

/// Result of simulating a secret
pub struct SolveResult {
    pub success: bool,
    pub secret: String,
    pub steps: Vec<RoundStep>,
}

/// Simulate solving `config.secret` starting from `prior`
///
/// Each round takes the advisor's recommendation, computes the true coloring
/// against the secret, and applies an exact belief update.
///
/// # Errors
/// Returns an error if the secret is not a valid word or the advisor cannot
/// produce a legal guess while candidates remain.
pub fn solve_secret<R: Rng>(
    config: &SolveConfig,
    prior: &Belief,
    advisor: &mut Advisor<'_, R>,
) -> Result<SolveResult, String> {
    let secret = Word::new(&config.secret).map_err(|e| format!("Invalid secret word: {e}"))?;

    let mut belief = prior.clone();
    let mut steps: Vec<RoundStep> = Vec::new();

    for round in 1..=config.max_rounds {
        if belief.is_empty() {
            // Secret lies outside the modeled candidate space
            break;
        }

        let guess = advisor
            .recommend(&belief, round)
            .ok_or_else(|| "No legal guesses available".to_string())?;

        let coloring = Coloring::of(&secret, &guess);
        let posterior = advisor.observe(&belief, &guess, coloring);

        steps.push(RoundStep {
            word: guess.text().to_string(),
            coloring,
            candidates_before: belief.support_size(),
            candidates_after: posterior.support_size(),
            entropy_before: belief.entropy(),
            entropy_after: posterior.entropy(),
        });

        if coloring.is_perfect() {
            return Ok(SolveResult {
                success: true,
                secret: config.secret.clone(),
                steps,
            });
        }

        belief = posterior;
    }

    Ok(SolveResult {
        success: false,
        secret: config.secret.clone(),
        steps,
    })
}
