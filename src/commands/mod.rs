//! Command implementations

pub mod advise;
pub mod benchmark;
pub mod solve;

pub use advise::run_advise;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveConfig, SolveResult, solve_secret};
