//! Cross matching with digit reversal

use super::KernelError;
use std::collections::HashSet;

/// Reverses the decimal digits of `n`.
///
/// Leading zeros of the result are not preserved, so trailing zeros of the
/// input disappear: `120` reverses to `21`. The result is `u128` because the
/// reversal of a 20-digit `u64` can exceed `u64::MAX`.
pub fn reverse_digits(mut n: u64) -> u128 {
    let mut reversed = 0u128;
    loop {
        reversed = reversed * 10 + u128::from(n % 10);
        n /= 10;
        if n == 0 {
            return reversed;
        }
    }
}

/// Counts the elements of `first` found in `second` either as-is or with
/// their digits reversed. Each element of `first` counts at most once.
pub fn count_matches_with_reversal(first: &[i64], second: &[i64]) -> Result<usize, KernelError> {
    if first.is_empty() || second.is_empty() {
        return Err(KernelError::EmptyInput);
    }
    let first = non_negative(first)?;
    let lookup: HashSet<u64> = non_negative(second)?.into_iter().collect();

    let count = first
        .into_iter()
        .filter(|&x| {
            lookup.contains(&x)
                || u64::try_from(reverse_digits(x)).is_ok_and(|r| lookup.contains(&r))
        })
        .count();
    Ok(count)
}

fn non_negative(values: &[i64]) -> Result<Vec<u64>, KernelError> {
    values
        .iter()
        .map(|&v| u64::try_from(v).map_err(|_| KernelError::NegativeValue(v)))
        .collect()
}
