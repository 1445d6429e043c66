//! Counting contiguous subarrays with a given sum

use super::KernelError;
use std::collections::HashMap;

/// Counts the non-empty contiguous spans of `values` whose sum is `target`.
///
/// Runs in linear time using running prefix sums: a span ending at `i` sums
/// to `target` exactly when some earlier prefix equals `prefix(i) - target`.
/// Prefixes are accumulated as `i128` so no `i64` input can overflow.
pub fn count_subarrays_with_sum(values: &[i64], target: i64) -> Result<usize, KernelError> {
    if values.is_empty() {
        return Err(KernelError::EmptyInput);
    }

    let target = i128::from(target);
    let mut seen: HashMap<i128, usize> = HashMap::with_capacity(values.len() + 1);
    seen.insert(0, 1);

    let mut running = 0i128;
    let mut count = 0usize;
    for &value in values {
        running += i128::from(value);
        count += seen.get(&(running - target)).copied().unwrap_or(0);
        *seen.entry(running).or_insert(0) += 1;
    }
    Ok(count)
}
