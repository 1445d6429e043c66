//! Elementwise merge with cancellation

use super::KernelError;

/// Pairs the largest values of `first` with the smallest of `second`.
///
/// `first` is sorted descending and `second` ascending; each aligned pair
/// yields `0` when both values are equal and their sum otherwise. The
/// produced values are returned sorted ascending.
pub fn merge_with_cancellation(first: &[i64], second: &[i64]) -> Result<Vec<i64>, KernelError> {
    if first.len() != second.len() {
        return Err(KernelError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    let mut descending = first.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    let mut ascending = second.to_vec();
    ascending.sort_unstable();

    let mut merged = descending
        .iter()
        .zip(&ascending)
        .map(|(&a, &b)| {
            if a == b {
                Ok(0)
            } else {
                a.checked_add(b).ok_or(KernelError::Overflow)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    merged.sort_unstable();
    Ok(merged)
}
