//! Library-level tests for grouped-sum aggregation.
//!
//! Property tests verify the invariants that hold for all inputs:
//! - group count equals blank separators + 1
//! - each group sum equals the sum of its constituent integers
//! - max mode dominates every group and equals at least one
//! - top-K matches a sort-based reference

use indoc::indoc;
use linetally::{aggregate, group_sums, max_sum, top_k_sum, AggregateMode, Error};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn worked_sample_max_and_top_three() {
    let input = indoc! {"
        1000
        2000
        3000

        4000

        5000
        6000

        7000
        8000
        9000

        10000
    "};

    let sums = group_sums(input).unwrap();
    assert_eq!(sums, vec![6000, 4000, 11000, 24000, 10000]);
    assert_eq!(aggregate(&sums, AggregateMode::Max), 24000);
    assert_eq!(aggregate(&sums, AggregateMode::Top(3)), 45000);
}

#[test]
fn documented_scenario_from_design_notes() {
    let input = "1\n2\n\n6\n\n\n3\n5\n";
    let sums = group_sums(input).unwrap();
    assert_eq!(sums, vec![3, 6, 0, 8]);
    assert_eq!(max_sum(&sums), 8);
    assert_eq!(top_k_sum(&sums, 3), 17);
}

#[test]
fn malformed_line_fails_without_a_result() {
    let err = group_sums("100\nabc\n").unwrap_err();
    assert!(matches!(err, Error::InvalidInteger { line: 2, .. }));
}

/// Independent reference: split on blank lines, sum each block.
fn reference_group_sums(groups: &[Vec<i64>]) -> Vec<i64> {
    groups.iter().map(|g| g.iter().sum()).collect()
}

fn render_groups(groups: &[Vec<i64>]) -> String {
    groups
        .iter()
        .map(|g| {
            g.iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

proptest! {
    #[test]
    fn prop_group_count_is_separators_plus_one(
        groups in prop::collection::vec(
            prop::collection::vec(0i64..10_000, 1..6),
            1..8,
        )
    ) {
        let input = render_groups(&groups);
        let separators = input.lines().filter(|l| l.trim().is_empty()).count();
        let sums = group_sums(&input).unwrap();

        prop_assert_eq!(sums.len(), separators + 1);
        prop_assert_eq!(sums, reference_group_sums(&groups));
    }

    #[test]
    fn prop_max_dominates_and_is_attained(
        groups in prop::collection::vec(
            prop::collection::vec(0i64..10_000, 1..6),
            1..8,
        )
    ) {
        let sums = group_sums(&render_groups(&groups)).unwrap();
        let max = max_sum(&sums);

        prop_assert!(sums.iter().all(|&s| s <= max));
        prop_assert!(sums.contains(&max));
    }

    #[test]
    fn prop_top_k_matches_sorted_reference(
        sums in prop::collection::vec(-10_000i64..10_000, 0..12),
        k in 0usize..6,
    ) {
        let mut sorted = sums.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let expected: i64 = sorted.iter().take(k).sum();

        prop_assert_eq!(top_k_sum(&sums, k), expected);
    }

    #[test]
    fn prop_top_one_equals_max(
        groups in prop::collection::vec(
            prop::collection::vec(0i64..10_000, 1..6),
            1..8,
        )
    ) {
        let sums = group_sums(&render_groups(&groups)).unwrap();
        prop_assert_eq!(top_k_sum(&sums, 1), max_sum(&sums));
    }
}
