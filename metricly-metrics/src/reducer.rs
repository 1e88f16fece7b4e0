//! The validate-and-sum primitive shared by every formula.
//!
//! Each input is coerced, checked for negative elements, then reduced to its
//! total with compensated summation. Inputs are processed in order and the
//! first failure aborts the whole call, so callers never see partial sums.

use metricly_common::{ArrayLike, MetricError, Result};
use tracing::{debug, trace};

/// Validate `arrays` and return one total per input, in input order.
///
/// # Errors
/// - [`MetricError::TypeConversion`] if any input is not a numeric array.
/// - [`MetricError::NegativeValue`] if any input holds a negative element.
pub fn validate_and_sum(arrays: &[ArrayLike]) -> Result<Vec<f64>> {
    arrays
        .iter()
        .enumerate()
        .map(|(index, array)| total_at(index, array))
        .collect()
}

/// Fixed-arity form of [`validate_and_sum`], for destructuring:
///
/// ```
/// use metricly_metrics::{reducer::validate_and_sum_n, ArrayLike};
/// let [spend, clicks] =
///     validate_and_sum_n([ArrayLike::from(vec![1.5, 2.5]), ArrayLike::from(4)]).unwrap();
/// assert_eq!((spend, clicks), (4.0, 4.0));
/// ```
pub fn validate_and_sum_n<const N: usize>(arrays: [ArrayLike; N]) -> Result<[f64; N]> {
    let mut sums = [0.0; N];
    for (index, (slot, array)) in sums.iter_mut().zip(arrays.iter()).enumerate() {
        *slot = total_at(index, array)?;
    }
    Ok(sums)
}

/// Validate a single input and return its total.
pub fn total(array: &ArrayLike) -> Result<f64> {
    total_at(0, array)
}

fn total_at(index: usize, array: &ArrayLike) -> Result<f64> {
    let values = array.to_values().inspect_err(|_| {
        debug!(index, "rejected input: not array-like and numeric");
    })?;

    if let Some(value) = values.iter().find(|x| **x < 0.0) {
        debug!(index, value, "rejected input: negative element");
        return Err(MetricError::NegativeValue);
    }

    let sum = kahan_sum(&values);
    trace!(index, len = values.len(), sum, "summed input");
    Ok(sum)
}

/// Neumaier-compensated summation.
///
/// Carries the low-order bits lost by each addition in a separate term, so
/// the error stays O(ε) regardless of length. Returns `0.0` for an empty
/// slice. A running sum that overflows is returned as that infinity.
///
/// ```
/// use metricly_metrics::reducer::kahan_sum;
/// assert_eq!(kahan_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
/// assert_eq!(kahan_sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if !t.is_finite() {
            return t;
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}
