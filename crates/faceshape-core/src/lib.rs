//! faceshape-core — Face-shape classification from facial landmarks.
//!
//! Converts a canonical face mesh into geometric measurements, scores them
//! against six archetype templates with Gaussian closeness functions, and maps
//! the winning archetype to style tips. Pure, synchronous, no I/O beyond
//! optional catalog loading.

pub mod classify;
pub mod landmarks;
pub mod measure;
pub mod normalize;
pub mod ratios;
pub mod scorer;
pub mod tips;
pub mod types;

pub use classify::{
    analyze, analyze_with, classify, classify_measurements, classify_measurements_with,
    classify_with, Analysis, AnalyzeError, LandmarkDetector,
};
pub use landmarks::{LandmarkRole, LandmarkSet};
pub use measure::MeasureError;
pub use ratios::RatioSet;
pub use scorer::{GaussianScorer, ShapeScorer};
pub use tips::{style_tips, tips_for_label, CatalogError, StyleCatalog, StyleTips};
pub use types::{
    ClassificationResult, FaceMeasurements, Point, ShapeArchetype, ShapeScores, UnknownShape,
};
