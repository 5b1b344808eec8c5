use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bar100_core::{pipeline, PipelineConfig, DEFAULT_CALIBRATION_WINDOW};

/// Correct a raw Bar100 depth log and render its time-series charts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the raw log; outputs are written here too.
    #[arg(short, long)]
    dir: PathBuf,

    /// Raw log file name, e.g. DEPTH.txt
    #[arg(short, long, default_value = "DEPTH.txt")]
    file: String,

    /// Calibration window: leading samples averaged for the sea-level baseline.
    #[arg(long, default_value_t = DEFAULT_CALIBRATION_WINDOW)]
    window: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::new(cli.dir, cli.file).with_window(cli.window);

    let summary = pipeline::run(&config)
        .with_context(|| format!("correction run failed for {}", config.input_path().display()))?;

    info!(
        rows = summary.rows,
        baseline_mbar = summary.baseline.mean_mbar,
        window = summary.baseline.window,
        "correction run complete"
    );
    println!("Wrote {}", summary.csv_path.display());
    for path in &summary.chart_paths {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
