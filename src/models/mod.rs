pub mod black_scholes;
pub mod normal;
pub mod rates;
pub mod returns;
pub mod strikes;
pub mod volatility;

use crate::errors::{AnalysisError, AnalysisResult};

/// European option pricing models implement this trait.
/// Both methods must be pure functions of the precomputed parameters.
pub trait PricingModel {
    fn name(&self) -> &'static str;

    fn call(&self, params: &ModelParams) -> f64;

    fn put(&self, params: &ModelParams) -> f64;
}

/// Validated pricing inputs with d1, d2 and the discount factor computed once,
/// so call and put for the same (S, K) always share them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub spot: f64,
    pub strike: f64,
    pub ttl_years: f64,
    pub rate: f64,
    pub sigma: f64,
    // Precomputed
    pub sigma_sqrt_t: f64,
    pub d1: f64,
    pub d2: f64,
    /// e^(-rT)
    pub discount: f64,
}

impl ModelParams {
    /// Fails with a domain error unless S, K, T and sigma are finite and > 0.
    /// The rate may be any finite value, including zero or negative.
    pub fn new(spot: f64, strike: f64, ttl_years: f64, rate: f64, sigma: f64) -> AnalysisResult<Self> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        require_positive("time to expiry", ttl_years)?;
        require_positive("volatility", sigma)?;
        if !rate.is_finite() {
            return Err(AnalysisError::Domain(format!("rate must be finite, got {rate}")));
        }

        let sigma_sqrt_t = sigma * ttl_years.sqrt();
        let d1 = ((spot / strike).ln() + (rate + 0.5 * sigma * sigma) * ttl_years) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        Ok(Self {
            spot,
            strike,
            ttl_years,
            rate,
            sigma,
            sigma_sqrt_t,
            d1,
            d2,
            discount: (-rate * ttl_years).exp(),
        })
    }
}

#[inline]
pub(crate) fn require_positive(what: &str, value: f64) -> AnalysisResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::Domain(format!("{what} must be finite and > 0, got {value}")))
    }
}
