// crates/bar100-core/src/processing.rs

use bar100_parser::DepthLog;

use crate::calibration::{apply_correction, compute_baseline, Baseline};
use crate::depth::depth_from_corrected_mbar;
use crate::error::Result;

/// One output row: the raw sample plus its corrected pressure and depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedRecord {
    pub timestamp: i64,
    pub temperature_c: f64,
    pub pressure_mbar: f64,
    pub corrected_mbar: f64,
    pub depth_m: f64,
}

/// The calibrated dataset for a whole run. Row order and count match the
/// input log.
#[derive(Debug, Clone)]
pub struct CorrectedDataset {
    pub records: Vec<CorrectedRecord>,
    pub baseline: Baseline,
}

impl CorrectedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Timestamps rescaled to seconds, for plotting.
    pub fn timestamps_s(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.timestamp as f64 / 1000.0)
            .collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature_c).collect()
    }

    pub fn corrected_pressures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.corrected_mbar).collect()
    }

    pub fn depths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.depth_m).collect()
    }
}

/// Calibrate a parsed log: baseline from the leading window, uniform
/// pressure correction, depth per row.
pub fn correct_log(log: &DepthLog, window: usize) -> Result<CorrectedDataset> {
    let pressures = log.pressures();
    let baseline = compute_baseline(&pressures, window)?;
    let corrected = apply_correction(&pressures, &baseline);

    let records = log
        .samples
        .iter()
        .zip(&corrected)
        .map(|(sample, corrected_mbar)| CorrectedRecord {
            timestamp: sample.timestamp,
            temperature_c: sample.temperature_c,
            pressure_mbar: sample.pressure_mbar,
            corrected_mbar: *corrected_mbar,
            depth_m: depth_from_corrected_mbar(*corrected_mbar),
        })
        .collect();

    Ok(CorrectedDataset { records, baseline })
}
