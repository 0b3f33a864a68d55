//! Wordle Advisor - CLI
//!
//! Probabilistic guess advisor: seeds a belief from a word-list prior,
//! recommends guesses by expected information gain, and updates the belief
//! from observed colorings.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;
use wordle_advisor::{
    belief::{Belief, DEFAULT_SAMPLE_CAP},
    commands::{SolveConfig, run_advise, run_benchmark, solve_secret},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    priors::{PriorKind, load_prior_file, load_word_file},
    solver::{Advisor, RankOptions},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle advisor using Bayesian belief updates and expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Prior file: one `word` or `word weight` per line (forms must not mix)
    #[arg(long, global = true, value_name = "PATH")]
    prior_file: Option<PathBuf>,

    /// Solution list for a uniform prior (one word per line)
    #[arg(long, global = true, value_name = "PATH")]
    solutions: Option<PathBuf>,

    /// Treat the weighted prior file as the canonical frequency prior
    /// (enables its precomputed opener)
    #[arg(long, global = true)]
    frequency: bool,

    /// Allowed-guess list (defaults to the prior's support)
    #[arg(long, global = true, value_name = "PATH")]
    allowed: Option<PathBuf>,

    /// Sampling cap for guess evaluation
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_CAP)]
    cap: usize,

    /// Seed for the sampling RNG (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score every allowed word instead of only the sampled candidates
    #[arg(long, global = true)]
    exhaustive: bool,

    /// Recompute the first guess instead of using the precomputed opener
    #[arg(long, global = true)]
    no_opener: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default)
    Advise,

    /// Simulate solving a known secret
    Solve {
        /// The secret word to solve for
        secret: String,

        /// Show per-round candidate counts and entropies
        #[arg(short, long)]
        verbose: bool,

        /// Round limit for the simulation
        #[arg(long, default_value_t = 6)]
        max_rounds: usize,
    },

    /// Batch simulation over the solutions file
    Benchmark {
        /// Limit number of secrets to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Round limit per game
        #[arg(long, default_value_t = 6)]
        max_rounds: usize,
    },
}

/// Build the session prior from the CLI flags
///
/// Returns the belief, its identity (for the opener table), and the solution
/// words when a solutions file was given (the benchmark test set).
fn load_prior(cli: &Cli) -> Result<(Belief, PriorKind, Vec<Word>)> {
    let solutions = match &cli.solutions {
        Some(path) => load_word_file(path)
            .with_context(|| format!("loading solutions from {}", path.display()))?,
        None => Vec::new(),
    };

    if let Some(path) = &cli.prior_file {
        let parsed = load_prior_file(path)
            .with_context(|| format!("loading prior from {}", path.display()))?;

        if cli.frequency && !parsed.weighted {
            bail!("--frequency requires a weighted prior file (word weight lines)");
        }

        let kind = if cli.frequency {
            PriorKind::FrequencyWeighted
        } else {
            PriorKind::Custom
        };

        let belief = Belief::normalized(parsed.weights)
            .with_context(|| format!("prior {} carries no probability mass", path.display()))?;
        if belief.is_empty() {
            bail!("prior file {} contains no words", path.display());
        }

        Ok((belief, kind, solutions))
    } else if solutions.is_empty() {
        bail!("provide a prior: --prior-file <PATH> or --solutions <PATH>");
    } else {
        let belief = Belief::uniform(solutions.iter().cloned());
        Ok((belief, PriorKind::UniformSolutions, solutions))
    }
}

/// Build the allowed-guess set, defaulting to the prior's support
fn load_allowed(cli: &Cli, prior: &Belief) -> Result<FxHashSet<Word>> {
    match &cli.allowed {
        Some(path) => {
            let words = load_word_file(path)
                .with_context(|| format!("loading allowed guesses from {}", path.display()))?;
            Ok(words.into_iter().collect())
        }
        None => Ok(prior.iter().map(|(w, _)| w.clone()).collect()),
    }
}

/// Drop prior words the game would not accept as guesses
///
/// Every candidate must be guessable; the reverse is allowed.
fn restrict_to_allowed(prior: Belief, allowed: &FxHashSet<Word>) -> Result<Belief> {
    let kept: FxHashMap<Word, f64> = prior
        .iter()
        .filter(|(w, _)| allowed.contains(*w))
        .map(|(w, p)| (w.clone(), p))
        .collect();

    if kept.len() == prior.support_size() {
        return Ok(prior);
    }

    eprintln!(
        "note: dropping {} prior words not in the allowed-guess list",
        prior.support_size() - kept.len()
    );
    Belief::normalized(kept).context("no prior word is an allowed guess")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (prior, prior_kind, solutions) = load_prior(&cli)?;
    let allowed = load_allowed(&cli, &prior)?;
    if allowed.is_empty() {
        bail!("allowed-guess set is empty");
    }
    let prior = restrict_to_allowed(prior, &allowed)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let options = RankOptions {
        exhaustive: cli.exhaustive,
        cap: cli.cap,
    };
    let mut advisor = Advisor::new(&allowed, prior_kind, options, rng);
    if cli.no_opener {
        advisor = advisor.without_opener();
    }

    match cli.command.unwrap_or(Commands::Advise) {
        Commands::Advise => run_advise(prior, &mut advisor).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            secret,
            verbose,
            max_rounds,
        } => {
            let mut config = SolveConfig::new(secret);
            config.max_rounds = max_rounds;

            let result =
                solve_secret(&config, &prior, &mut advisor).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { limit, max_rounds } => {
            let secrets: Vec<Word> = solutions
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .collect();
            if secrets.is_empty() {
                bail!("benchmark needs --solutions with at least one word");
            }

            println!("Benchmarking {} secrets...", secrets.len());
            let result = run_benchmark(&prior, &secrets, max_rounds, &mut advisor);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
