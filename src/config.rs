use crate::errors::{AnalysisError, AnalysisResult};
use crate::models::volatility::TRADING_DAYS_PER_YEAR;
use crate::types::{PeriodSpec, RateWindow};
use chrono::NaiveDate;
use std::path::PathBuf;

const DEFAULT_SOURCE: &str = "data/SPY_Data_2024";
const DEFAULT_RATE_SHEET: &str = "TB3MS_2024";
const DEFAULT_PERIODS: &str =
    "Mar-Jun 2024|20240301|20240630|March-June;Jul-Oct 2024|20240701|20241031|July-October";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spot_source: PathBuf,
    pub rate_source: PathBuf,
    pub rate_sheet: String,
    pub trading_days_per_year: f64,
    pub expiry_years: f64,
    pub periods: Vec<PeriodSpec>,
    pub output_format: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> AnalysisResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys take defaults,
    /// so `from_lookup(|_| None)` reproduces the stock two-period run.
    pub fn from_lookup<F>(lookup: F) -> AnalysisResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let spot_source = PathBuf::from(var_or("SPOT_SOURCE", DEFAULT_SOURCE));
        let rate_source = lookup("RATE_SOURCE")
            .map(PathBuf::from)
            .unwrap_or_else(|| spot_source.clone());

        let trading_days_per_year = parse_positive(
            "TRADING_DAYS_PER_YEAR",
            &var_or("TRADING_DAYS_PER_YEAR", &TRADING_DAYS_PER_YEAR.to_string()),
        )?;
        let expiry_years = parse_positive("EXPIRY_YEARS", &var_or("EXPIRY_YEARS", "0.25"))?;

        let output_format = match var_or("OUTPUT_FORMAT", "text").to_ascii_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => {
                return Err(AnalysisError::Config(format!(
                    "OUTPUT_FORMAT: expected text or json, got {other:?}"
                )))
            }
        };

        Ok(Self {
            spot_source,
            rate_source,
            rate_sheet: var_or("RATE_SHEET", DEFAULT_RATE_SHEET),
            trading_days_per_year,
            expiry_years,
            periods: parse_periods(&var_or("PERIODS", DEFAULT_PERIODS))?,
            output_format,
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> AnalysisResult<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| AnalysisError::Config(format!("{key}: {e}")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalysisError::Config(format!("{key}: must be > 0, got {value}")));
    }
    Ok(value)
}

/// Parse `sheet|start|end|label` entries separated by `;`.
fn parse_periods(raw: &str) -> AnalysisResult<Vec<PeriodSpec>> {
    let mut periods = Vec::new();
    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let fields: Vec<&str> = entry.split('|').map(str::trim).collect();
        let [sheet, start, end, label] = fields.as_slice() else {
            return Err(AnalysisError::Config(format!(
                "PERIODS: expected sheet|start|end|label, got {entry:?}"
            )));
        };

        let start = parse_date_code(start)?;
        let end = parse_date_code(end)?;
        if start > end {
            return Err(AnalysisError::Config(format!(
                "PERIODS: window start {start} is after end {end} in {entry:?}"
            )));
        }

        periods.push(PeriodSpec {
            label: label.to_string(),
            sheet: sheet.to_string(),
            window: RateWindow::new(start, end),
        });
    }

    if periods.is_empty() {
        return Err(AnalysisError::Config("PERIODS: no periods configured".into()));
    }
    Ok(periods)
}

/// Window bounds must be real calendar dates in YYYYMMDD form.
fn parse_date_code(raw: &str) -> AnalysisResult<f64> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|e| AnalysisError::Config(format!("PERIODS: bad date {raw:?}: {e}")))?;
    raw.parse::<f64>()
        .map_err(|e| AnalysisError::Config(format!("PERIODS: bad date {raw:?}: {e}")))
}
