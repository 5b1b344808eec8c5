// crates/bar100-core/src/depth.rs

/// Standard atmospheric pressure at sea level, in pascal.
pub const SEA_LEVEL_PA: f64 = 101_325.0;

/// Density of seawater, kg/m^3.
pub const SEAWATER_DENSITY_KG_M3: f64 = 1029.0;

/// Standard gravitational acceleration, m/s^2.
pub const GRAVITY_M_S2: f64 = 9.80665;

/// Depth in meters for a corrected absolute pressure in millibar:
/// convert mbar to Pa, subtract sea-level pressure, divide by rho * g.
///
/// Total over all f64 input; NaN and infinities pass through.
pub fn depth_from_corrected_mbar(corrected_mbar: f64) -> f64 {
    (corrected_mbar * 100.0 - SEA_LEVEL_PA) / (SEAWATER_DENSITY_KG_M3 * GRAVITY_M_S2)
}

pub fn depth_profile(corrected_mbar: &[f64]) -> Vec<f64> {
    corrected_mbar
        .iter()
        .map(|p| depth_from_corrected_mbar(*p))
        .collect()
}
