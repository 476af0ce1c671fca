use crate::types::{PriceObservation, RateWindow};

/// Mean of the quoted rates whose date lies in `window` (inclusive),
/// converted from percent to a decimal fraction. No matching rows gives 0.0.
pub fn average_risk_free_rate(rate_series: &[PriceObservation], window: &RateWindow) -> f64 {
    let (sum, count) = rate_series
        .iter()
        .filter(|o| window.contains(o.date))
        .fold((0.0, 0usize), |(sum, count), o| (sum + o.price, count + 1));

    if count == 0 {
        return 0.0;
    }
    sum / count as f64 / 100.0
}
