// crates/bar100-core/src/pipeline.rs

use std::path::PathBuf;

use tracing::{debug, info};

use bar100_parser::parse_depth_file;

use crate::calibration::Baseline;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export::write_corrected_csv;
use crate::plot::render_charts;
use crate::processing::correct_log;

/// What a completed run produced.
#[derive(Debug)]
pub struct PipelineRunSummary {
    pub rows: usize,
    pub baseline: Baseline,
    pub csv_path: PathBuf,
    pub chart_paths: Vec<PathBuf>,
}

/// Run the whole correction pipeline: parse, calibrate, export, plot.
/// Straight-line execution; the first failure aborts the run.
pub fn run(config: &PipelineConfig) -> Result<PipelineRunSummary> {
    let input_path = config.input_path();
    info!(path = %input_path.display(), "reading raw depth log");
    let log = parse_depth_file(&input_path)?;
    info!(rows = log.len(), "parsed raw depth log");

    let dataset = correct_log(&log, config.window)?;
    debug!(
        baseline_mbar = dataset.baseline.mean_mbar,
        window = dataset.baseline.window,
        offset_mbar = dataset.baseline.offset_mbar(),
        "baseline computed"
    );

    let csv_path = config.output_csv_path();
    write_corrected_csv(&dataset, &csv_path)?;

    let chart_paths = render_charts(&dataset, config)?;

    Ok(PipelineRunSummary {
        rows: dataset.len(),
        baseline: dataset.baseline,
        csv_path,
        chart_paths,
    })
}
