//! Scale-free ratios between face measurements.

use crate::types::FaceMeasurements;
use serde::Serialize;

/// Denominators below this are treated as zero.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Finite stand-in for a ratio whose denominator is zero.
pub const SATURATED_RATIO: f64 = 1e6;

/// Divide, returning [`SATURATED_RATIO`] when `den` is effectively zero.
///
/// Never returns NaN or infinity for finite inputs.
pub fn saturating_div(num: f64, den: f64) -> f64 {
    if den.abs() < RATIO_EPSILON {
        SATURATED_RATIO
    } else {
        num / den
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSet {
    pub forehead_to_cheekbone: f64,
    pub cheekbone_to_jaw: f64,
    pub forehead_to_jaw: f64,
    pub length_to_cheekbone: f64,
    /// Jaw width over face length.
    pub normalized_jaw_width: f64,
    /// Jaw angle as a fraction of pi.
    pub jaw_angle_fraction: f64,
    pub chin_shape: f64,
    /// Forehead, cheekbone and jaw widths all collapsed to zero.
    pub degenerate: bool,
}

impl RatioSet {
    pub fn from_measurements(m: &FaceMeasurements) -> Self {
        let degenerate = [m.forehead_width, m.cheekbone_width, m.jaw_width]
            .iter()
            .all(|v| v.abs() < RATIO_EPSILON);

        Self {
            forehead_to_cheekbone: saturating_div(m.forehead_width, m.cheekbone_width),
            cheekbone_to_jaw: saturating_div(m.cheekbone_width, m.jaw_width),
            forehead_to_jaw: saturating_div(m.forehead_width, m.jaw_width),
            length_to_cheekbone: saturating_div(m.face_length, m.cheekbone_width),
            normalized_jaw_width: saturating_div(m.jaw_width, m.face_length),
            jaw_angle_fraction: m.jaw_angle / std::f64::consts::PI,
            chin_shape: m.chin_shape,
            degenerate,
        }
    }
}
