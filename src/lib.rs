// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    aggregate, group_sums, max_sum, score_rounds, top_k_sum, AggregateMode, Error, Result,
    ScoreTable, TableVariant, MOVE_TABLE, OUTCOME_TABLE,
};

pub use crate::io::output::{create_writer, AggregateReport, OutputFormat, OutputWriter, ScoreReport};
