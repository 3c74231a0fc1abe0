//! CLI command implementations for linetally operations.
//!
//! Each submodule handles one command: a plain config struct built by `main`
//! from the parsed CLI, and a `handle_*` function that reads the input, runs
//! the pure core computation, and writes the report.
//!
//! Available commands:
//! - **aggregate**: sum blank-line-separated groups and report max or top-K
//! - **score**: tally two-token round lines against a fixed rule table

pub mod aggregate;
pub mod score;

pub use aggregate::{handle_aggregate, AggregateConfig};
pub use score::{handle_score, ScoreConfig};
