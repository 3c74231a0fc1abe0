pub mod errors;
pub mod groups;
pub mod rounds;

pub use errors::{Error, Result};
pub use groups::{aggregate, group_sums, max_sum, top_k_sum, AggregateMode};
pub use rounds::{
    decode_round, score_rounds, Round, ScoreTable, TableVariant, MOVE_TABLE, OUTCOME_TABLE,
};
