//! End-to-end classification pipeline.
//!
//! landmarks → measurements → ratios → raw scores → distribution → primary
//! shape → tips. Every stage after extraction is total.

use crate::landmarks::LandmarkSet;
use crate::measure::{self, MeasureError};
use crate::normalize::{normalize, primary_shape};
use crate::ratios::RatioSet;
use crate::scorer::{GaussianScorer, ShapeScorer};
use crate::tips::StyleCatalog;
use crate::types::{ClassificationResult, FaceMeasurements};
use thiserror::Error;

/// Source of facial landmarks for an encoded image.
///
/// Implementations own their model lifecycle; the pipeline only calls `detect`.
pub trait LandmarkDetector {
    type Error: std::error::Error + 'static;

    /// Landmarks for the most prominent face, or `None` if no face was found.
    fn detect(&self, image: &[u8]) -> Result<Option<LandmarkSet>, Self::Error>;
}

#[derive(Error, Debug)]
pub enum AnalyzeError<E: std::error::Error + 'static> {
    #[error("landmark detection failed: {0}")]
    Detector(#[source] E),
    #[error("could not analyze this photo: {0}")]
    Measure(#[from] MeasureError),
}

/// Outcome of analyzing one image.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The detector found no face. Not an error.
    NoFace,
    Classified(ClassificationResult),
}

/// Classify a landmark set with the Gaussian scorer and built-in tips.
pub fn classify(landmarks: &LandmarkSet) -> Result<ClassificationResult, MeasureError> {
    classify_with(&GaussianScorer, StyleCatalog::builtin(), landmarks)
}

pub fn classify_with<S: ShapeScorer + ?Sized>(
    scorer: &S,
    catalog: &StyleCatalog,
    landmarks: &LandmarkSet,
) -> Result<ClassificationResult, MeasureError> {
    let measurements = measure::extract(landmarks)?;
    Ok(classify_measurements_with(scorer, catalog, &measurements))
}

/// Classify from measurements directly, skipping landmark extraction.
pub fn classify_measurements(measurements: &FaceMeasurements) -> ClassificationResult {
    classify_measurements_with(&GaussianScorer, StyleCatalog::builtin(), measurements)
}

pub fn classify_measurements_with<S: ShapeScorer + ?Sized>(
    scorer: &S,
    catalog: &StyleCatalog,
    measurements: &FaceMeasurements,
) -> ClassificationResult {
    let ratios = RatioSet::from_measurements(measurements);
    tracing::debug!(?ratios, "face ratios");

    let raw = scorer.score(&ratios);
    let scores = normalize(&raw);
    let primary = primary_shape(&scores);

    tracing::debug!(
        primary = %primary,
        score = scores.get(primary),
        "classified face shape"
    );

    ClassificationResult {
        primary_shape: primary,
        scores,
        tips: catalog.tips(primary).clone(),
        measurements: *measurements,
    }
}

/// Detect landmarks in `image` and classify the face, if any.
pub fn analyze<D: LandmarkDetector>(
    detector: &D,
    image: &[u8],
) -> Result<Analysis, AnalyzeError<D::Error>> {
    analyze_with(detector, &GaussianScorer, StyleCatalog::builtin(), image)
}

pub fn analyze_with<D: LandmarkDetector, S: ShapeScorer + ?Sized>(
    detector: &D,
    scorer: &S,
    catalog: &StyleCatalog,
    image: &[u8],
) -> Result<Analysis, AnalyzeError<D::Error>> {
    let Some(landmarks) = detector.detect(image).map_err(AnalyzeError::Detector)? else {
        tracing::info!(bytes = image.len(), "no face detected");
        return Ok(Analysis::NoFace);
    };

    let result = classify_with(scorer, catalog, &landmarks)?;
    Ok(Analysis::Classified(result))
}
