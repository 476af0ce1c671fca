/// Trading days per year used to annualize daily return volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized historical volatility: population standard deviation of the
/// returns (divisor n, not n-1) times sqrt(trading_days_per_year).
///
/// An empty series, a single return, or identical returns give exactly 0.0.
/// Callers treat 0.0 as "not enough data" rather than as an error.
pub fn annualized_volatility(returns: &[f64], trading_days_per_year: f64) -> f64 {
    // sum / n need not reproduce a repeated value, so test dispersion directly
    let Some(&first) = returns.first() else {
        return 0.0;
    };
    if returns.iter().all(|&r| r == first) {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n;

    variance.sqrt() * trading_days_per_year.sqrt()
}
