//! Reading landmark and measurement documents.

use anyhow::{Context, Result};
use faceshape_core::{FaceMeasurements, LandmarkSet};
use std::io::Read;
use std::path::Path;

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn parse_landmarks(src: &str) -> Result<LandmarkSet> {
    LandmarkSet::from_json_str(src).context(
        "expected a JSON array of points, or an object with a landmarks/keypoints/scaledMesh/mesh array",
    )
}

pub fn parse_measurements(src: &str) -> Result<FaceMeasurements> {
    let measurements: FaceMeasurements =
        serde_json::from_str(src).context("expected a JSON object of face measurements")?;
    let values = [
        measurements.face_length,
        measurements.forehead_width,
        measurements.cheekbone_width,
        measurements.jaw_width,
        measurements.jaw_angle,
        measurements.chin_shape,
    ];
    anyhow::ensure!(
        values.iter().all(|v| v.is_finite() && *v >= 0.0),
        "face measurements must be finite and non-negative"
    );
    Ok(measurements)
}
