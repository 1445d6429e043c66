//! Property-based tests for the kernels

use super::*;
use proptest::prelude::*;

// ============================================================================
// Reference implementations
// ============================================================================

/// Quadratic enumeration of every contiguous span
fn brute_force_count(values: &[i64], target: i64) -> usize {
    let mut count = 0;
    for start in 0..values.len() {
        let mut sum = 0i64;
        for &value in &values[start..] {
            sum += value;
            if sum == target {
                count += 1;
            }
        }
    }
    count
}

fn string_reverse(n: u64) -> u128 {
    n.to_string()
        .chars()
        .rev()
        .collect::<String>()
        .parse()
        .unwrap()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_equal_length_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (0usize..40).prop_flat_map(|len| {
        (
            proptest::collection::vec(-1000i64..1000, len),
            proptest::collection::vec(-1000i64..1000, len),
        )
    })
}

/// An equal-length pair together with an independent shuffle of each side
fn arb_shuffled_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>, Vec<i64>, Vec<i64>)> {
    arb_equal_length_pair().prop_flat_map(|(first, second)| {
        (
            Just(first.clone()),
            Just(second.clone()),
            Just(first).prop_shuffle(),
            Just(second).prop_shuffle(),
        )
    })
}

fn arb_small_sequence() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-10i64..=10, 1..25)
}

/// Numbers without any zero digit, so reversal is an involution
fn arb_zero_free_number() -> impl Strategy<Value = u64> {
    proptest::collection::vec(1u64..=9, 1..19)
        .prop_map(|digits| digits.into_iter().fold(0, |acc, d| acc * 10 + d))
}

// ============================================================================
// Merge with cancellation
// ============================================================================

proptest! {
    #[test]
    fn merge_output_is_sorted((first, second) in arb_equal_length_pair()) {
        let merged = merge_with_cancellation(&first, &second).unwrap();
        prop_assert_eq!(merged.len(), first.len());
        prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn merge_ignores_input_order(
        (first, second, shuffled_first, shuffled_second) in arb_shuffled_pair(),
    ) {
        let expected = merge_with_cancellation(&first, &second).unwrap();

        // each side is permuted independently; both are re-sorted internally
        prop_assert_eq!(
            merge_with_cancellation(&shuffled_first, &second).unwrap(),
            expected.clone()
        );
        prop_assert_eq!(
            merge_with_cancellation(&first, &shuffled_second).unwrap(),
            expected.clone()
        );
        prop_assert_eq!(
            merge_with_cancellation(&shuffled_first, &shuffled_second).unwrap(),
            expected
        );
    }

    #[test]
    fn merge_rejects_unequal_lengths(
        first in proptest::collection::vec(any::<i64>(), 0..10),
        extra in proptest::collection::vec(any::<i64>(), 1..5),
    ) {
        let mut second = first.clone();
        second.extend(extra);
        prop_assert_eq!(
            merge_with_cancellation(&first, &second),
            Err(KernelError::LengthMismatch { left: first.len(), right: second.len() })
        );
    }
}

// ============================================================================
// Subarray counting
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4000))]

    #[test]
    fn prefix_sum_matches_brute_force(values in arb_small_sequence(), target in -15i64..=15) {
        prop_assert_eq!(
            count_subarrays_with_sum(&values, target).unwrap(),
            brute_force_count(&values, target)
        );
    }
}

proptest! {
    #[test]
    fn count_never_exceeds_span_total(values in arb_small_sequence(), target in any::<i64>()) {
        let n = values.len();
        prop_assert!(count_subarrays_with_sum(&values, target).unwrap() <= n * (n + 1) / 2);
    }
}

// ============================================================================
// Digit reversal
// ============================================================================

proptest! {
    #[test]
    fn reversal_agrees_with_string_reversal(n in any::<u64>()) {
        prop_assert_eq!(reverse_digits(n), string_reverse(n));
    }

    #[test]
    fn reversal_round_trips_without_zeros(n in arb_zero_free_number()) {
        let once = u64::try_from(reverse_digits(n)).unwrap();
        prop_assert_eq!(u64::try_from(reverse_digits(once)).unwrap(), n);
    }

    #[test]
    fn matches_bounded_by_first_length(
        first in proptest::collection::vec(0i64..1000, 1..30),
        second in proptest::collection::vec(0i64..1000, 1..30),
    ) {
        let count = count_matches_with_reversal(&first, &second).unwrap();
        prop_assert!(count <= first.len());
    }

    #[test]
    fn every_element_matches_itself(first in proptest::collection::vec(0i64..100_000, 1..30)) {
        prop_assert_eq!(count_matches_with_reversal(&first, &first).unwrap(), first.len());
    }
}
