use crate::config::AppConfig;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::feeds::sheet::load_sheet;
use crate::models::black_scholes::BlackScholes;
use crate::models::rates::average_risk_free_rate;
use crate::models::returns::compute_log_returns;
use crate::models::strikes::derive_strikes;
use crate::models::volatility::annualized_volatility;
use crate::models::{ModelParams, PricingModel};
use crate::types::*;

/// Outcome of one configured period. The error, if any, is scoped to that period.
#[derive(Debug)]
pub struct PeriodOutcome {
    pub spec: PeriodSpec,
    pub result: AnalysisResult<PeriodReport>,
}

/// Price the three strikes of one period.
///
/// returns -> volatility, rate window -> rate, first price -> strikes,
/// then one call and one put per strike in K_110, K_100, K_95 order.
pub fn run_period(
    observations: &[PriceObservation],
    rate_series: &[PriceObservation],
    window: &RateWindow,
    expiry_years: f64,
    trading_days_per_year: f64,
) -> AnalysisResult<PeriodReport> {
    let first = observations
        .first()
        .ok_or_else(|| AnalysisError::EmptyPeriod("no observations, no spot price".into()))?;

    let returns = compute_log_returns(observations)?;
    let volatility = annualized_volatility(&returns, trading_days_per_year);
    let rate = average_risk_free_rate(rate_series, window);
    let strikes = derive_strikes(first.price)?;

    if volatility == 0.0 {
        tracing::warn!(returns = returns.len(), "volatility is 0.0, not enough price movement to price");
        return Err(AnalysisError::Domain(format!(
            "insufficient data: volatility 0.0 from {} returns",
            returns.len()
        )));
    }

    let mut warnings = Vec::new();
    if rate == 0.0 {
        tracing::warn!(start = window.start, end = window.end, "averaged risk-free rate is 0.0");
        warnings.push(PeriodWarning::ZeroRate);
    }

    tracing::info!(
        spot = strikes.spot,
        sigma = volatility,
        rate = rate,
        observations = observations.len(),
        "period inputs ready"
    );

    let pricing = price_strikes(&BlackScholes::new(), &strikes, expiry_years, rate, volatility)?;

    Ok(PeriodReport {
        volatility,
        rate,
        strikes,
        pricing,
        warnings,
    })
}

/// Price every strike with `model`, sharing one `ModelParams` per strike
/// between the call and the put.
pub fn price_strikes(
    model: &dyn PricingModel,
    strikes: &StrikeSet,
    expiry_years: f64,
    rate: f64,
    sigma: f64,
) -> AnalysisResult<PricingResult> {
    let mut call_prices = [0.0; 3];
    let mut put_prices = [0.0; 3];

    for (i, strike) in strikes.strikes().into_iter().enumerate() {
        let params = ModelParams::new(strikes.spot, strike, expiry_years, rate, sigma)?;
        call_prices[i] = model.call(&params);
        put_prices[i] = model.put(&params);
        tracing::debug!(
            model = model.name(),
            strike,
            call = call_prices[i],
            put = put_prices[i],
            "priced strike"
        );
    }

    Ok(PricingResult {
        call_prices,
        put_prices,
    })
}

/// Load the rate sheet once, then load and price each configured period.
///
/// I/O failures end the run. Any other error is recorded against its period
/// and the remaining periods still run.
pub fn run_all(config: &AppConfig) -> AnalysisResult<Vec<PeriodOutcome>> {
    let rate_series = load_sheet(&config.rate_source, &config.rate_sheet)?;

    let mut outcomes = Vec::with_capacity(config.periods.len());
    for spec in &config.periods {
        let span = tracing::info_span!("period", label = %spec.label);
        let _guard = span.enter();

        let observations = load_sheet(&config.spot_source, &spec.sheet)?;
        let result = match run_period(
            &observations,
            &rate_series,
            &spec.window,
            config.expiry_years,
            config.trading_days_per_year,
        ) {
            Err(e) if e.is_fatal() => return Err(e),
            other => other,
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, "period failed");
        }

        outcomes.push(PeriodOutcome {
            spec: spec.clone(),
            result,
        });
    }

    Ok(outcomes)
}
