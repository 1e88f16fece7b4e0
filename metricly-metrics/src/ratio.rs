use metricly_common::{MetricError, Result};
use tracing::debug;

/// Reject a zero denominator total.
///
/// `quantity` names the total in business terms ("Total hires") and becomes
/// the subject of the [`MetricError::DivisionGuard`] message.
pub fn guard_denominator(total: f64, quantity: &str) -> Result<()> {
    if total == 0.0 {
        debug!(quantity, "rejected denominator: total is zero");
        return Err(MetricError::DivisionGuard(quantity.to_string()));
    }
    Ok(())
}

/// `numerator / denominator`, guarded on the denominator.
///
/// Totals that overflowed to infinity on both sides have no defined ratio
/// and fail with [`MetricError::TypeConversion`].
pub fn ratio(numerator: f64, denominator: f64, quantity: &str) -> Result<f64> {
    guard_denominator(denominator, quantity)?;
    defined(numerator / denominator)
}

/// `(current - previous) / previous`, guarded on the previous total.
pub fn relative_change(current: f64, previous: f64, quantity: &str) -> Result<f64> {
    guard_denominator(previous, quantity)?;
    defined((current - previous) / previous)
}

fn defined(value: f64) -> Result<f64> {
    if value.is_nan() {
        debug!("rejected result: overflowed totals have no defined ratio");
        return Err(MetricError::TypeConversion);
    }
    Ok(value)
}
