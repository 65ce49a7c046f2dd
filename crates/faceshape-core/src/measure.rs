//! Measurement extraction from a landmark set.

use crate::landmarks::{LandmarkRole, LandmarkSet};
use crate::ratios::saturating_div;
use crate::types::{FaceMeasurements, Point};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("missing {role} landmark (index {index}, set has {len} points)")]
    MissingLandmark {
        role: LandmarkRole,
        index: usize,
        len: usize,
    },
    #[error("{role} landmark (index {index}) has a non-finite coordinate")]
    NonFiniteLandmark { role: LandmarkRole, index: usize },
}

/// The twelve points the extractor reads, resolved once.
struct FacePoints {
    forehead_top: Point,
    chin_bottom: Point,
    forehead: (Point, Point),
    cheekbone: (Point, Point),
    jaw: (Point, Point),
    ear: (Point, Point),
    chin: (Point, Point),
}

impl FacePoints {
    fn resolve(landmarks: &LandmarkSet) -> Result<Self, MeasureError> {
        let at = |role: LandmarkRole| -> Result<Point, MeasureError> {
            let point = landmarks
                .role(role)
                .ok_or(MeasureError::MissingLandmark {
                    role,
                    index: role.index(),
                    len: landmarks.len(),
                })?;
            if !point.is_finite() {
                return Err(MeasureError::NonFiniteLandmark {
                    role,
                    index: role.index(),
                });
            }
            Ok(point)
        };

        Ok(Self {
            forehead_top: at(LandmarkRole::ForeheadTop)?,
            chin_bottom: at(LandmarkRole::ChinBottom)?,
            forehead: (at(LandmarkRole::ForeheadLeft)?, at(LandmarkRole::ForeheadRight)?),
            cheekbone: (at(LandmarkRole::CheekboneLeft)?, at(LandmarkRole::CheekboneRight)?),
            jaw: (at(LandmarkRole::JawLeft)?, at(LandmarkRole::JawRight)?),
            ear: (at(LandmarkRole::EarLeft)?, at(LandmarkRole::EarRight)?),
            chin: (at(LandmarkRole::ChinLeft)?, at(LandmarkRole::ChinRight)?),
        })
    }
}

fn horizontal((a, b): (Point, Point)) -> f64 {
    (a.x - b.x).abs()
}

/// Extract face measurements from a landmark set.
pub fn extract(landmarks: &LandmarkSet) -> Result<FaceMeasurements, MeasureError> {
    let p = FacePoints::resolve(landmarks)?;

    let face_length = (p.chin_bottom.y - p.forehead_top.y).abs();

    // Angle of each jaw corner's vector toward the ear midpoint, averaged.
    let ear_mid = p.ear.0.midpoint(p.ear.1);
    let angle_of = |corner: Point| (ear_mid.y - corner.y).atan2(ear_mid.x - corner.x);
    let jaw_angle = ((angle_of(p.jaw.0) + angle_of(p.jaw.1)) / 2.0).abs();

    let chin_mid = p.chin.0.midpoint(p.chin.1);
    let chin_depth = (p.chin_bottom.y - chin_mid.y).abs();
    let chin_shape = saturating_div(chin_depth, horizontal(p.chin));

    let measurements = FaceMeasurements {
        face_length,
        forehead_width: horizontal(p.forehead),
        cheekbone_width: horizontal(p.cheekbone),
        jaw_width: horizontal(p.jaw),
        jaw_angle,
        chin_shape,
    };

    tracing::debug!(
        face_length = measurements.face_length,
        forehead_width = measurements.forehead_width,
        cheekbone_width = measurements.cheekbone_width,
        jaw_width = measurements.jaw_width,
        jaw_angle = measurements.jaw_angle,
        chin_shape = measurements.chin_shape,
        "extracted face measurements"
    );

    Ok(measurements)
}
