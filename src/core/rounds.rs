//! Rule-table scoring of two-token round lines.
//!
//! Each line names an opponent shape (`A`..`C`) and a response token
//! (`X`..`Z`); the pair indexes a fixed 3x3 [`ScoreTable`] and the looked-up
//! points are summed over all lines. Two table variants exist because the
//! response token has two readings: the shape I play, or the outcome I need.

use crate::core::errors::{Error, Result};

/// Which reading of the response token a tally uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableVariant {
    /// `X`/`Y`/`Z` is the shape I play (Rock/Paper/Scissors).
    Move,
    /// `X`/`Y`/`Z` is the outcome I need (lose/draw/win).
    Outcome,
}

impl TableVariant {
    pub fn table(self) -> &'static ScoreTable {
        match self {
            TableVariant::Move => &MOVE_TABLE,
            TableVariant::Outcome => &OUTCOME_TABLE,
        }
    }
}

/// Immutable 3x3 matrix of round scores, indexed `[opponent][response]`.
///
/// Cells combine the shape score (Rock 1, Paper 2, Scissors 3) with the
/// outcome score (loss 0, draw 3, win 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    cells: [[u32; 3]; 3],
}

impl ScoreTable {
    pub const fn new(cells: [[u32; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn score(&self, opponent: usize, response: usize) -> u32 {
        self.cells[opponent][response]
    }
}

/// Response token read as the shape I play.
pub const MOVE_TABLE: ScoreTable = ScoreTable::new([
    // vs Rock:     X=Rock draws, Y=Paper wins, Z=Scissors loses
    [1 + 3, 2 + 6, 3 + 0],
    // vs Paper
    [1 + 0, 2 + 3, 3 + 6],
    // vs Scissors
    [1 + 6, 2 + 0, 3 + 3],
]);

/// Response token read as the outcome I need; the cell carries the score of
/// the shape that produces that outcome against the opponent's shape.
pub const OUTCOME_TABLE: ScoreTable = ScoreTable::new([
    //  X=lose  Y=draw  Z=win
    [0 + 3, 3 + 1, 6 + 2], // vs Rock
    [0 + 1, 3 + 2, 6 + 3], // vs Paper
    [0 + 2, 3 + 3, 6 + 1], // vs Scissors
]);

/// One decoded round: a pair of indices in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub opponent: usize,
    pub response: usize,
}

/// Decode one line into a [`Round`].
///
/// The line must split into exactly two single-character tokens; the first
/// must be in `A..=C`, the second in `X..=Z`.
pub fn decode_round(line: &str, line_number: usize) -> Result<Round> {
    let mut tokens = line.split_whitespace();
    let (Some(opponent), Some(response), None) =
        (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(Error::MalformedLine {
            line: line_number,
            content: line.to_string(),
        });
    };

    Ok(Round {
        opponent: decode_token(opponent, 'A', 'C', "'A'..='C'", line, line_number)?,
        response: decode_token(response, 'X', 'Z', "'X'..='Z'", line, line_number)?,
    })
}

fn decode_token(
    token: &str,
    base: char,
    top: char,
    expected: &'static str,
    line: &str,
    line_number: usize,
) -> Result<usize> {
    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(Error::MalformedLine {
            line: line_number,
            content: line.to_string(),
        });
    };
    if c < base || c > top {
        return Err(Error::TokenOutOfRange {
            line: line_number,
            token: c,
            expected,
        });
    }
    Ok(c as usize - base as usize)
}

/// Score every round line against `table` and sum the points.
///
/// Visits each line exactly once in input order; blank lines are malformed
/// since round input has no group structure.
pub fn score_rounds(input: &str, table: &ScoreTable) -> Result<u64> {
    let mut total = 0u64;
    for (index, line) in input.lines().enumerate() {
        let round = decode_round(line, index + 1)?;
        total += u64::from(table.score(round.opponent, round.response));
    }
    Ok(total)
}
