use crate::errors::AnalysisResult;
use crate::models::require_positive;
use crate::types::StrikeSet;

/// Strike levels as percent of spot.
const K_110_PCT: f64 = 110.0;
const K_95_PCT: f64 = 95.0;

/// Derive the strike set from a spot price.
///
/// Computed as `spot * pct / 100` rather than `spot * 1.10`: the latter picks up
/// the representation error of 1.10 (100.0 * 1.1 == 110.00000000000001), the
/// former is exact whenever spot * pct is.
pub fn derive_strikes(spot: f64) -> AnalysisResult<StrikeSet> {
    require_positive("spot", spot)?;
    Ok(StrikeSet {
        spot,
        k_110: spot * K_110_PCT / 100.0,
        k_100: spot,
        k_95: spot * K_95_PCT / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;

    #[test]
    fn test_round_spot_is_exact() {
        let s = derive_strikes(100.0).unwrap();
        assert_eq!(s, StrikeSet { spot: 100.0, k_110: 110.0, k_100: 100.0, k_95: 95.0 });

        let s = derive_strikes(500.0).unwrap();
        assert_eq!(s.strikes(), [550.0, 500.0, 475.0]);
    }

    #[test]
    fn test_fractional_spot() {
        let s = derive_strikes(512.37).unwrap();
        assert!((s.k_110 - 563.607).abs() < 1e-9);
        assert_eq!(s.k_100, 512.37);
        assert!((s.k_95 - 486.7515).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_spot() {
        assert!(matches!(derive_strikes(0.0), Err(AnalysisError::Domain(_))));
        assert!(matches!(derive_strikes(-5.0), Err(AnalysisError::Domain(_))));
    }
}
