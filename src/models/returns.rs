use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::PriceObservation;

/// Log returns of consecutive prices: r[i] = ln(p[i+1] / p[i]).
///
/// Fewer than two observations yield an empty series. Any non-positive or
/// non-finite price is a domain error, checked before anything is computed,
/// so NaN never leaks into volatility.
pub fn compute_log_returns(prices: &[PriceObservation]) -> AnalysisResult<Vec<f64>> {
    if let Some(bad) = prices.iter().find(|o| !(o.price.is_finite() && o.price > 0.0)) {
        return Err(AnalysisError::Domain(format!(
            "log return undefined for price {} on date {}",
            bad.price, bad.date
        )));
    }

    Ok(prices
        .windows(2)
        .map(|pair| (pair[1].price / pair[0].price).ln())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn obs(prices: &[f64]) -> Vec<PriceObservation> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PriceObservation::new(20240301.0 + i as f64, p))
            .collect()
    }

    #[test]
    fn test_length_is_n_minus_one() {
        for n in 0usize..6 {
            let prices: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
            let r = compute_log_returns(&obs(&prices)).unwrap();
            assert_eq!(r.len(), n.saturating_sub(1), "n={n}");
        }
    }

    #[test]
    fn test_values() {
        let p = [500.0, 505.0, 503.0];
        let r = compute_log_returns(&obs(&p)).unwrap();
        assert_relative_eq!(r[0], (505.0f64 / 500.0).ln());
        assert_relative_eq!(r[1], (503.0f64 / 505.0).ln());
    }

    #[test]
    fn test_non_positive_price_is_domain_error() {
        for bad in [0.0, -3.0, f64::NAN] {
            let r = compute_log_returns(&obs(&[100.0, bad, 101.0]));
            assert!(matches!(r, Err(AnalysisError::Domain(_))), "price {bad} accepted");
        }
        // Guard applies even when there is no pair to difference
        assert!(compute_log_returns(&obs(&[-1.0])).is_err());
    }
}
