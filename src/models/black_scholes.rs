use crate::errors::AnalysisResult;
use crate::models::normal::standard_normal_cdf;
use crate::models::{ModelParams, PricingModel};

/// Black-Scholes European option pricing.
///
/// call = S*Phi(d1) - K*e^(-rT)*Phi(d2)
/// put  = K*e^(-rT)*Phi(-d2) - S*Phi(-d1)
///
/// where d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))
/// and   d2 = d1 - sigma*sqrt(T), both taken from `ModelParams`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholes {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    #[inline]
    fn call(&self, params: &ModelParams) -> f64 {
        params.spot * standard_normal_cdf(params.d1)
            - params.strike * params.discount * standard_normal_cdf(params.d2)
    }

    #[inline]
    fn put(&self, params: &ModelParams) -> f64 {
        params.strike * params.discount * standard_normal_cdf(-params.d2)
            - params.spot * standard_normal_cdf(-params.d1)
    }
}

/// Price a European call. Domain error unless S, K, T, sigma > 0.
pub fn call_price(spot: f64, strike: f64, ttl_years: f64, rate: f64, sigma: f64) -> AnalysisResult<f64> {
    let params = ModelParams::new(spot, strike, ttl_years, rate, sigma)?;
    Ok(BlackScholes.call(&params))
}

/// Price a European put. Domain error unless S, K, T, sigma > 0.
pub fn put_price(spot: f64, strike: f64, ttl_years: f64, rate: f64, sigma: f64) -> AnalysisResult<f64> {
    let params = ModelParams::new(spot, strike, ttl_years, rate, sigma)?;
    Ok(BlackScholes.put(&params))
}
