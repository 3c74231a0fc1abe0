//! Grouped-sum aggregation over blank-line-separated blocks.
//!
//! A group is a maximal run of non-blank lines; every blank line starts a
//! new group, so the number of groups is always the number of blank
//! separators plus one. Group sums are produced in encounter order and the
//! caller picks a report via [`AggregateMode`].

use crate::core::errors::{Error, Result};

/// How a sequence of group sums is reduced to a single reported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMode {
    /// Report the single largest group sum.
    Max,
    /// Report the sum of the K largest group sums.
    Top(usize),
}

/// Sum each blank-line-separated group of integers, in encounter order.
///
/// Every non-blank line must parse as an `i64`; lines are blank when empty
/// after trimming, so CRLF inputs and whitespace-only separators behave the
/// same as plain empty lines. Empty input is one empty group with sum 0.
pub fn group_sums(input: &str) -> Result<Vec<i64>> {
    let mut sums = Vec::new();
    let mut current = 0i64;

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            sums.push(current);
            current = 0;
            continue;
        }

        let value: i64 = trimmed.parse().map_err(|_| Error::InvalidInteger {
            line: index + 1,
            content: line.to_string(),
        })?;
        current += value;
    }
    sums.push(current);

    Ok(sums)
}

/// The largest group sum, or 0 for an empty slice.
pub fn max_sum(sums: &[i64]) -> i64 {
    sums.iter().copied().max().unwrap_or(0)
}

/// Sum of the `k` largest group sums; sums everything when fewer than `k`
/// groups exist.
pub fn top_k_sum(sums: &[i64], k: usize) -> i64 {
    let mut sorted = sums.to_vec();
    sorted.sort_unstable();
    sorted.iter().rev().take(k).sum()
}

/// Reduce group sums to the reported value for the selected mode.
pub fn aggregate(sums: &[i64], mode: AggregateMode) -> i64 {
    match mode {
        AggregateMode::Max => max_sum(sums),
        AggregateMode::Top(k) => top_k_sum(sums, k),
    }
}
