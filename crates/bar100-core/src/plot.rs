// crates/bar100-core/src/plot.rs

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::processing::CorrectedDataset;

pub const TEMPERATURE_SUFFIX: &str = "_temperature";
pub const CORRECTED_PRESSURE_SUFFIX: &str = "_correctedPressure";
pub const DEPTH_SUFFIX: &str = "_calculatedDepth";

const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 720;

/// Seconds of padding on either side of the time axis.
const X_PAD_S: f64 = 20.0;
const X_TICK_STEP_S: f64 = 60.0;

/// Axis styling for one of the three output charts. Each render builds its
/// own drawing area from this; nothing is shared between charts.
struct ChartStyle {
    suffix: &'static str,
    y_label: &'static str,
    pad_below: f64,
    pad_above: f64,
    y_tick_step: f64,
    /// Horizontal marker lines drawn across the full time axis.
    reference_lines: &'static [f64],
}

const TEMPERATURE_CHART: ChartStyle = ChartStyle {
    suffix: TEMPERATURE_SUFFIX,
    y_label: "Temperature (degrees Celsius)",
    pad_below: 2.0,
    pad_above: 2.0,
    y_tick_step: 1.0,
    reference_lines: &[5.0, 10.0, 15.0, 20.0],
};

const CORRECTED_PRESSURE_CHART: ChartStyle = ChartStyle {
    suffix: CORRECTED_PRESSURE_SUFFIX,
    y_label: "Corrected pressure (mbar)",
    pad_below: 10.0,
    pad_above: 50.0,
    y_tick_step: 100.0,
    reference_lines: &[],
};

const DEPTH_CHART: ChartStyle = ChartStyle {
    suffix: DEPTH_SUFFIX,
    y_label: "Calculated depth (m)",
    pad_below: 2.0,
    pad_above: 2.0,
    y_tick_step: 10.0,
    reference_lines: &[],
};

/// Render the three time-series charts next to the output CSV. Returns the
/// written paths in temperature, pressure, depth order.
pub fn render_charts(dataset: &CorrectedDataset, config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    let seconds = dataset.timestamps_s();

    let charts = [
        (&TEMPERATURE_CHART, dataset.temperatures()),
        (&CORRECTED_PRESSURE_CHART, dataset.corrected_pressures()),
        (&DEPTH_CHART, dataset.depths()),
    ];

    let mut paths = Vec::with_capacity(charts.len());
    for (style, values) in charts {
        let path = config.chart_path(style.suffix);
        render_series(&path, &seconds, &values, style)?;
        info!(path = %path.display(), "chart written");
        paths.push(path);
    }

    Ok(paths)
}

fn render_series(path: &Path, seconds: &[f64], values: &[f64], style: &ChartStyle) -> Result<()> {
    let x_range = padded_range(seconds, X_PAD_S, X_PAD_S);
    let y_range = padded_range(values, style.pad_below, style.pad_above);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|err| render_error(path, err))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(|err| render_error(path, err))?;

    chart
        .configure_mesh()
        .x_desc("Timestamp (s)")
        .y_desc(style.y_label)
        .x_labels(tick_count(&x_range, X_TICK_STEP_S))
        .y_labels(tick_count(&y_range, style.y_tick_step))
        .draw()
        .map_err(|err| render_error(path, err))?;

    chart
        .draw_series(LineSeries::new(
            seconds.iter().copied().zip(values.iter().copied()),
            &BLUE,
        ))
        .map_err(|err| render_error(path, err))?;

    for level in style.reference_lines {
        chart
            .draw_series(LineSeries::new(
                [(x_range.start, *level), (x_range.end, *level)],
                &BLACK,
            ))
            .map_err(|err| render_error(path, err))?;
    }

    root.present().map_err(|err| render_error(path, err))
}

fn padded_range(values: &[f64], below: f64, above: f64) -> std::ops::Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min - below)..(max + above)
}

fn tick_count(range: &std::ops::Range<f64>, step: f64) -> usize {
    (((range.end - range.start) / step).round() as usize).max(1) + 1
}

fn render_error(path: &Path, err: impl std::fmt::Display) -> PipelineError {
    PipelineError::Render {
        chart: path.display().to_string(),
        message: err.to_string(),
    }
}
