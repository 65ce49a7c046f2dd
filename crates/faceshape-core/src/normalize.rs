//! Score normalization and primary-shape selection.

use crate::types::{ShapeArchetype, ShapeScores};

/// Rescale raw scores into a distribution that sums to 1.
///
/// If every raw score is zero the result is Oval = 1, all others 0.
pub fn normalize(raw: &ShapeScores) -> ShapeScores {
    let total = raw.total();
    if total <= 0.0 || !total.is_finite() {
        tracing::debug!(total, "raw scores sum to zero, falling back to Oval");
        let mut fallback = ShapeScores::zero();
        fallback.set(ShapeArchetype::Oval, 1.0);
        return fallback;
    }

    let mut normalized = ShapeScores::zero();
    for (shape, score) in raw.iter() {
        normalized.set(shape, score / total);
    }
    normalized
}

/// Highest-scoring archetype. Exact ties go to the earlier archetype.
pub fn primary_shape(scores: &ShapeScores) -> ShapeArchetype {
    let mut best = ShapeArchetype::Oval;
    let mut best_score = f64::NEG_INFINITY;

    for (shape, score) in scores.iter() {
        if score > best_score {
            best_score = score;
            best = shape;
        }
    }

    best
}
