// crates/bar100-core/src/calibration.rs

use crate::error::{PipelineError, Result};

/// Standard atmospheric pressure at sea level, in millibar.
pub const STANDARD_SEA_LEVEL_MBAR: f64 = 1013.25;

/// Mean of the leading pressure readings, taken while the sensor was still
/// at the surface. Every correction in a run uses the same baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub mean_mbar: f64,
    pub window: usize,
}

impl Baseline {
    /// Additive offset bringing the calibration window to standard
    /// sea-level pressure.
    pub fn offset_mbar(&self) -> f64 {
        STANDARD_SEA_LEVEL_MBAR - self.mean_mbar
    }
}

/// Average the first `window` readings. A log shorter than the window is
/// refused; a truncated average is not a usable baseline.
pub fn compute_baseline(pressures: &[f64], window: usize) -> Result<Baseline> {
    if window == 0 {
        return Err(PipelineError::InvalidWindow);
    }
    if pressures.len() < window {
        return Err(PipelineError::InsufficientData {
            window,
            available: pressures.len(),
        });
    }

    let sum: f64 = pressures[..window].iter().sum();
    Ok(Baseline {
        mean_mbar: sum / window as f64,
        window,
    })
}

/// Apply the baseline offset uniformly across the whole sequence, including
/// the calibration window itself.
pub fn apply_correction(pressures: &[f64], baseline: &Baseline) -> Vec<f64> {
    let offset = baseline.offset_mbar();
    pressures.iter().map(|p| p + offset).collect()
}
