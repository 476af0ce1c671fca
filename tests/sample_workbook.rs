//! Runs the full pipeline against the bundled sample workbook.

use option_analysis::config::AppConfig;
use option_analysis::feeds::sheet::load_sheet;
use option_analysis::pipeline::run_all;
use option_analysis::report::render_text;
use std::path::{Path, PathBuf};

fn sample_workbook() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir).join("data").join("SPY_Data_2024")
}

fn sample_config() -> AppConfig {
    let dir = sample_workbook().to_string_lossy().to_string();
    AppConfig::from_lookup(move |key| match key {
        "SPOT_SOURCE" => Some(dir.clone()),
        _ => None,
    })
    .expect("default periods should parse")
}

#[test]
fn test_sample_sheets_load() {
    let dir = sample_workbook();
    let mar_jun = load_sheet(&dir, "Mar-Jun 2024").expect("Should load Mar-Jun");
    let jul_oct = load_sheet(&dir, "Jul-Oct 2024").expect("Should load Jul-Oct");
    let rates = load_sheet(&dir, "TB3MS_2024").expect("Should load TB3MS");

    assert_eq!(mar_jun.len(), 18);
    assert_eq!(jul_oct.len(), 19);
    assert_eq!(rates.len(), 12);
    assert_eq!(mar_jun[0].date, 20240301.0);
    assert_eq!(mar_jun[0].price, 512.85);
    assert!(mar_jun.windows(2).all(|w| w[0].date < w[1].date), "Dates should be ascending");
}

#[test]
fn test_sample_run_prices_both_periods() {
    let outcomes = run_all(&sample_config()).expect("Sample run should not hit I/O errors");
    assert_eq!(outcomes.len(), 2);

    for outcome in &outcomes {
        let report = outcome.result.as_ref().expect("Each sample period should price");
        assert!(report.volatility > 0.0 && report.volatility < 1.0, "sigma={}", report.volatility);
        assert!(report.rate > 0.04 && report.rate < 0.06, "r={}", report.rate);
        assert!(report.warnings.is_empty());
        for (c, p) in report.pricing.call_prices.iter().zip(&report.pricing.put_prices) {
            assert!(c.is_finite() && *c > 0.0 && *c < report.strikes.spot);
            assert!(p.is_finite() && *p > 0.0 && *p < report.strikes.spot);
        }
        // Calls get cheaper and puts dearer as the strike rises (K_95 < K_100 < K_110)
        let calls = report.pricing.call_prices;
        let puts = report.pricing.put_prices;
        assert!(calls[0] < calls[1] && calls[1] < calls[2]);
        assert!(puts[0] > puts[1] && puts[1] > puts[2]);
    }

    // March-June: TB3MS rows for Mar..Jun, all dated the first of the month
    let mar_jun = outcomes[0].result.as_ref().unwrap();
    let expected = (5.24 + 5.24 + 5.25 + 5.24) / 4.0 / 100.0;
    assert!((mar_jun.rate - expected).abs() < 1e-12, "r={}", mar_jun.rate);
    assert_eq!(mar_jun.strikes.spot, 512.85);

    let text = render_text(&outcomes);
    assert!(text.contains("March-June Results: {Call Prices=["));
    assert!(text.contains("July-October Results: {Call Prices=["));
}
