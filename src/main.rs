use option_analysis::config::{AppConfig, OutputFormat};
use option_analysis::{pipeline, report};

fn main() {
    // Diagnostics on stderr, results on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        spot_source = %cfg.spot_source.display(),
        rate_source = %cfg.rate_source.display(),
        periods = cfg.periods.len(),
        expiry_years = cfg.expiry_years,
        "option analysis starting"
    );

    let outcomes = match pipeline::run_all(&cfg) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("run aborted: {e}");
            std::process::exit(1);
        }
    };

    let rendered = match cfg.output_format {
        OutputFormat::Text => Ok(report::render_text(&outcomes)),
        OutputFormat::Json => report::render_json(&outcomes),
    };
    match rendered {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            tracing::error!("render error: {e}");
            std::process::exit(1);
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        tracing::error!(failed, "some periods could not be priced");
        std::process::exit(1);
    }
}
