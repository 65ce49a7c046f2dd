//! Gaussian archetype scoring.
//!
//! Each archetype's raw score is a weighted sum of Gaussian closeness terms
//! against tuned target ratios. Weights per archetype sum to 1.

use crate::ratios::RatioSet;
use crate::types::{ShapeArchetype, ShapeScores};

/// Gaussian closeness of `x` to `mean`, in `(0, 1]` for finite inputs.
///
/// Extreme inputs underflow to 0 rather than producing NaN.
pub fn similarity(x: f64, mean: f64, stddev: f64) -> f64 {
    let d = x - mean;
    let s = (-(d * d) / (2.0 * stddev * stddev)).exp();
    if s.is_nan() {
        0.0
    } else {
        s
    }
}

/// A Gaussian target: ideal value, tolerance, and weight in the archetype sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub mean: f64,
    pub stddev: f64,
    pub weight: f64,
}

const fn target(mean: f64, stddev: f64, weight: f64) -> Target {
    Target { mean, stddev, weight }
}

impl Target {
    fn score(&self, x: f64) -> f64 {
        similarity(x, self.mean, self.stddev) * self.weight
    }

    /// Weighted penalty for being close to the target.
    fn score_away(&self, x: f64) -> f64 {
        (1.0 - similarity(x, self.mean, self.stddev)) * self.weight
    }
}

// --- Tuned targets ---
const OVAL_LENGTH: Target = target(1.5, 0.2, 0.5);
const OVAL_CHEEK_JAW: Target = target(1.1, 0.1, 0.3);
const OVAL_FOREHEAD_CHEEK: Target = target(0.9, 0.1, 0.2);

const ROUND_LENGTH: Target = target(1.0, 0.2, 0.4);
const ROUND_JAW_SOFTNESS_WEIGHT: f64 = 0.3;
const ROUND_CHEEK_JAW: Target = target(1.0, 0.1, 0.3);

const SQUARE_JAW_ANGLE: Target = target(0.7, 0.15, 0.4);
const SQUARE_FOREHEAD_JAW: Target = target(1.0, 0.15, 0.3);
const SQUARE_CHEEK_JAW: Target = target(1.0, 0.15, 0.3);

const HEART_FOREHEAD_JAW: Target = target(1.4, 0.2, 0.4);
const HEART_CHIN_NOT_ROUND: Target = target(0.5, 0.2, 0.3);
const HEART_FOREHEAD_CHEEK: Target = target(1.1, 0.1, 0.3);

const OBLONG_LENGTH: Target = target(1.8, 0.2, 0.5);
const OBLONG_FOREHEAD_JAW: Target = target(1.0, 0.15, 0.25);
const OBLONG_FOREHEAD_CHEEK: Target = target(1.0, 0.1, 0.25);

const DIAMOND_CHEEK_JAW: Target = target(1.3, 0.15, 0.4);
const DIAMOND_FOREHEAD_CHEEK: Target = target(0.7, 0.1, 0.4);
const DIAMOND_JAW_NOT_WIDE: Target = target(0.9, 0.1, 0.2);

/// Strategy for turning ratios into raw, un-normalized archetype scores.
pub trait ShapeScorer {
    fn score(&self, ratios: &RatioSet) -> ShapeScores;
}

/// The tuned Gaussian scoring model.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianScorer;

impl GaussianScorer {
    /// Raw score for a single archetype.
    pub fn archetype_score(shape: ShapeArchetype, r: &RatioSet) -> f64 {
        match shape {
            ShapeArchetype::Oval => {
                OVAL_LENGTH.score(r.length_to_cheekbone)
                    + OVAL_CHEEK_JAW.score(r.cheekbone_to_jaw)
                    + OVAL_FOREHEAD_CHEEK.score(r.forehead_to_cheekbone)
            }
            ShapeArchetype::Round => {
                let softness = 1.0 - r.jaw_angle_fraction.min(1.0);
                ROUND_LENGTH.score(r.length_to_cheekbone)
                    + softness * ROUND_JAW_SOFTNESS_WEIGHT
                    + ROUND_CHEEK_JAW.score(r.cheekbone_to_jaw)
            }
            ShapeArchetype::Square => {
                SQUARE_JAW_ANGLE.score(r.jaw_angle_fraction)
                    + SQUARE_FOREHEAD_JAW.score(r.forehead_to_jaw)
                    + SQUARE_CHEEK_JAW.score(r.cheekbone_to_jaw)
            }
            ShapeArchetype::Heart => {
                HEART_FOREHEAD_JAW.score(r.forehead_to_jaw)
                    + HEART_CHIN_NOT_ROUND.score_away(r.chin_shape)
                    + HEART_FOREHEAD_CHEEK.score(r.forehead_to_cheekbone)
            }
            ShapeArchetype::Oblong => {
                OBLONG_LENGTH.score(r.length_to_cheekbone)
                    + OBLONG_FOREHEAD_JAW.score(r.forehead_to_jaw)
                    + OBLONG_FOREHEAD_CHEEK.score(r.forehead_to_cheekbone)
            }
            ShapeArchetype::Diamond => {
                DIAMOND_CHEEK_JAW.score(r.cheekbone_to_jaw)
                    + DIAMOND_FOREHEAD_CHEEK.score(r.forehead_to_cheekbone)
                    + DIAMOND_JAW_NOT_WIDE.score_away(r.normalized_jaw_width)
            }
        }
    }
}

impl ShapeScorer for GaussianScorer {
    fn score(&self, ratios: &RatioSet) -> ShapeScores {
        if ratios.degenerate {
            tracing::debug!("all face widths collapsed, archetype scores zero");
            return ShapeScores::zero();
        }

        let mut raw = ShapeScores::zero();
        for shape in ShapeArchetype::ALL {
            let score = Self::archetype_score(shape, ratios);
            raw.set(shape, if score.is_finite() { score.max(0.0) } else { 0.0 });
        }

        tracing::debug!(raw = ?raw.as_array(), "raw archetype scores");
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaceMeasurements;
    use std::f64::consts::PI;

    fn ratios(m: FaceMeasurements) -> RatioSet {
        RatioSet::from_measurements(&m)
    }

    fn argmax(scores: &ShapeScores) -> ShapeArchetype {
        scores
            .iter()
            .fold((ShapeArchetype::Oval, f64::NEG_INFINITY), |best, (s, v)| {
                if v > best.1 { (s, v) } else { best }
            })
            .0
    }

    #[test]
    fn test_similarity_peak_and_decay() {
        assert_eq!(similarity(1.5, 1.5, 0.2), 1.0);
        let near = similarity(1.6, 1.5, 0.2);
        let far = similarity(2.0, 1.5, 0.2);
        assert!(near < 1.0 && far < near && far > 0.0);
        // One stddev away: exp(-0.5)
        assert!((similarity(1.7, 1.5, 0.2) - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_extreme_inputs() {
        assert_eq!(similarity(1e6, 1.0, 0.1), 0.0);
        assert_eq!(similarity(f64::INFINITY, 1.0, 0.1), 0.0);
        assert_eq!(similarity(f64::NAN, 1.0, 0.1), 0.0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sums = [
            OVAL_LENGTH.weight + OVAL_CHEEK_JAW.weight + OVAL_FOREHEAD_CHEEK.weight,
            ROUND_LENGTH.weight + ROUND_JAW_SOFTNESS_WEIGHT + ROUND_CHEEK_JAW.weight,
            SQUARE_JAW_ANGLE.weight + SQUARE_FOREHEAD_JAW.weight + SQUARE_CHEEK_JAW.weight,
            HEART_FOREHEAD_JAW.weight + HEART_CHIN_NOT_ROUND.weight + HEART_FOREHEAD_CHEEK.weight,
            OBLONG_LENGTH.weight + OBLONG_FOREHEAD_JAW.weight + OBLONG_FOREHEAD_CHEEK.weight,
            DIAMOND_CHEEK_JAW.weight + DIAMOND_FOREHEAD_CHEEK.weight + DIAMOND_JAW_NOT_WIDE.weight,
        ];
        for (shape, sum) in ShapeArchetype::ALL.iter().zip(sums) {
            assert!((sum - 1.0).abs() < 1e-12, "{shape} weights sum to {sum}");
        }
    }

    #[test]
    fn test_oval_scenario() {
        let r = ratios(FaceMeasurements {
            face_length: 1.5,
            forehead_width: 0.9,
            cheekbone_width: 1.0,
            jaw_width: 0.95,
            jaw_angle: 0.4 * PI,
            chin_shape: 0.5,
        });
        let raw = GaussianScorer.score(&r);
        assert_eq!(argmax(&raw), ShapeArchetype::Oval, "raw = {raw:?}");
        assert!(raw.get(ShapeArchetype::Oval) > 0.95);
    }

    #[test]
    fn test_heart_scenario() {
        let r = ratios(FaceMeasurements {
            face_length: 1.3,
            forehead_width: 1.1,
            cheekbone_width: 1.0,
            jaw_width: 1.1 / 1.4,
            jaw_angle: 0.5 * PI,
            chin_shape: 0.1,
        });
        let raw = GaussianScorer.score(&r);
        assert_eq!(argmax(&raw), ShapeArchetype::Heart, "raw = {raw:?}");
    }

    #[test]
    fn test_square_scenario() {
        let r = ratios(FaceMeasurements {
            face_length: 1.2,
            forehead_width: 1.0,
            cheekbone_width: 1.0,
            jaw_width: 1.0,
            jaw_angle: 0.7 * PI,
            chin_shape: 0.5,
        });
        let raw = GaussianScorer.score(&r);
        assert_eq!(argmax(&raw), ShapeArchetype::Square, "raw = {raw:?}");
        assert!((raw.get(ShapeArchetype::Square) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_oval_monotonic_below_target() {
        let base = FaceMeasurements {
            face_length: 1.0,
            forehead_width: 0.9,
            cheekbone_width: 1.0,
            jaw_width: 0.95,
            jaw_angle: 0.4 * PI,
            chin_shape: 0.5,
        };
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=50 {
            let length = 1.0 + 0.01 * step as f64;
            let r = ratios(FaceMeasurements { face_length: length, ..base });
            let oval = GaussianScorer::archetype_score(ShapeArchetype::Oval, &r);
            assert!(oval > previous, "oval score fell at length {length}");
            previous = oval;
        }
        let past = ratios(FaceMeasurements { face_length: 1.6, ..base });
        assert!(GaussianScorer::archetype_score(ShapeArchetype::Oval, &past) < previous);
    }

    #[test]
    fn test_zero_jaw_width_still_scores() {
        let r = ratios(FaceMeasurements {
            face_length: 1.8,
            forehead_width: 1.0,
            cheekbone_width: 1.0,
            jaw_width: 0.0,
            jaw_angle: 0.4 * PI,
            chin_shape: 0.5,
        });
        let raw = GaussianScorer.score(&r);
        assert_eq!(argmax(&raw), ShapeArchetype::Oblong, "raw = {raw:?}");
        assert!((raw.get(ShapeArchetype::Oblong) - 0.75).abs() < 1e-3);
        assert!(raw.get(ShapeArchetype::Oval) > 0.2);
    }

    #[test]
    fn test_degenerate_scores_zero() {
        let r = ratios(FaceMeasurements {
            face_length: 0.7,
            forehead_width: 0.0,
            cheekbone_width: 0.0,
            jaw_width: 0.0,
            jaw_angle: 0.0,
            chin_shape: 1e6,
        });
        assert_eq!(GaussianScorer.score(&r), ShapeScores::zero());
    }

    #[test]
    fn test_scores_non_negative_for_odd_angles() {
        let r = ratios(FaceMeasurements {
            face_length: 1.0,
            forehead_width: 1.0,
            cheekbone_width: 1.0,
            jaw_width: 1.0,
            jaw_angle: 3.0 * PI,
            chin_shape: 0.0,
        });
        let raw = GaussianScorer.score(&r);
        assert!(raw.iter().all(|(_, v)| v >= 0.0 && v.is_finite()));
    }
}
