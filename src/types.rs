use serde::Serialize;

// ── Input rows ──

/// One validated (date, price) row. `date` is a numeric day code
/// (YYYYMMDD for the bundled sheets) and is only ever compared, never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceObservation {
    pub date: f64,
    pub price: f64,
}

impl PriceObservation {
    #[inline]
    pub fn new(date: f64, price: f64) -> Self {
        Self { date, price }
    }
}

/// Closed date interval [start, end] used to filter a rate series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateWindow {
    pub start: f64,
    pub end: f64,
}

impl RateWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, date: f64) -> bool {
        date >= self.start && date <= self.end
    }
}

// ── Derived values ──

/// Strikes derived from the first price of a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrikeSet {
    #[serde(rename = "S")]
    pub spot: f64,
    #[serde(rename = "K_110")]
    pub k_110: f64,
    #[serde(rename = "K_100")]
    pub k_100: f64,
    #[serde(rename = "K_95")]
    pub k_95: f64,
}

impl StrikeSet {
    /// Strikes in pricing order: K_110, K_100, K_95.
    #[inline]
    pub fn strikes(&self) -> [f64; 3] {
        [self.k_110, self.k_100, self.k_95]
    }
}

/// Call and put prices, positionally aligned with `StrikeSet::strikes()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub call_prices: [f64; 3],
    pub put_prices: [f64; 3],
}

// ── Periods ──

/// One comparison period: which sheet to read and which rate window to average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSpec {
    pub label: String,
    pub sheet: String,
    pub window: RateWindow,
}

/// Degenerate-but-defined outcomes worth surfacing to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodWarning {
    /// Averaged rate is 0.0, either from no rows in the window or rows averaging to zero.
    ZeroRate,
}

impl std::fmt::Display for PeriodWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRate => write!(f, "zero risk-free rate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub volatility: f64,
    pub rate: f64,
    pub strikes: StrikeSet,
    pub pricing: PricingResult,
    pub warnings: Vec<PeriodWarning>,
}
