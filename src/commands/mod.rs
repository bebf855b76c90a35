//! Command implementations

pub mod benchmark;
pub mod check;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, seeded_boards};
pub use check::{CheckResult, check_word};
pub use play::run_play;
pub use solve::{FoundWord, SolveResult, solve_board};
