use anyhow::{Context, Result};
use clap::Parser;
use pieceflow::{
    analytics::AnalyticsEngine,
    cli::{Cli, OutputFormat},
    config::AnalysisConfig,
    ingest,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the optional config file with command-line overrides
fn resolve_config(args: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_toml_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(threshold) = args.error_threshold {
        config.error_threshold = threshold;
    }
    if let Some(status) = args.status {
        config.status = status;
    }
    if let Some(top_paths) = args.top_paths {
        config.top_paths = top_paths;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = resolve_config(&args)?;

    let store = ingest::load_store_from_file(&args.input)?;
    let report = AnalyticsEngine::new(&store)
        .summarize(&config)
        .with_context(|| format!("Analysis of {} failed", args.input.display()))?;

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print!("{}", report.to_csv()),
    }

    Ok(())
}
