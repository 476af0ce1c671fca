use crate::errors::AnalysisResult;
use crate::pipeline::PeriodOutcome;
use crate::types::{PeriodWarning, StrikeSet};
use serde::Serialize;

/// Flat JSON view of one period. Priced periods fill the numeric fields,
/// failed ones carry only `error`.
#[derive(Debug, Serialize)]
struct PeriodJson<'a> {
    label: &'a str,
    sheet: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    volatility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strikes: Option<StrikeSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    call_prices: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    put_prices: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a [PeriodWarning]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a PeriodOutcome> for PeriodJson<'a> {
    fn from(o: &'a PeriodOutcome) -> Self {
        let report = o.result.as_ref().ok();
        Self {
            label: &o.spec.label,
            sheet: &o.spec.sheet,
            volatility: report.map(|r| r.volatility),
            rate: report.map(|r| r.rate),
            strikes: report.map(|r| r.strikes),
            call_prices: report.map(|r| r.pricing.call_prices),
            put_prices: report.map(|r| r.pricing.put_prices),
            warnings: report.map(|r| r.warnings.as_slice()),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// One `<label> Results: {...}` line per period, each followed by an indented
/// summary of the inputs that produced it.
pub fn render_text(outcomes: &[PeriodOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let label = &outcome.spec.label;
        match &outcome.result {
            Ok(report) => {
                out.push_str(&format!(
                    "{label} Results: {{Call Prices={}, Put Prices={}}}\n",
                    format_prices(&report.pricing.call_prices),
                    format_prices(&report.pricing.put_prices),
                ));
                let s = &report.strikes;
                out.push_str(&format!(
                    "  sigma={:.6} r={:.6} S={} K_110={} K_100={} K_95={}\n",
                    report.volatility, report.rate, s.spot, s.k_110, s.k_100, s.k_95
                ));
                if !report.warnings.is_empty() {
                    let warnings: Vec<String> =
                        report.warnings.iter().map(PeriodWarning::to_string).collect();
                    out.push_str(&format!("  warnings: {}\n", warnings.join(", ")));
                }
            }
            Err(e) => out.push_str(&format!("{label} Results: failed: {e}\n")),
        }
    }
    out
}

pub fn render_json(outcomes: &[PeriodOutcome]) -> AnalysisResult<String> {
    let view: Vec<PeriodJson<'_>> = outcomes.iter().map(PeriodJson::from).collect();
    Ok(serde_json::to_string_pretty(&view)?)
}

fn format_prices(prices: &[f64; 3]) -> String {
    let parts: Vec<String> = prices.iter().map(|p| p.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
