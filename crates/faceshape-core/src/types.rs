use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::tips::StyleTips;

/// A single detected landmark, normalized to the image's unit square.
///
/// Deserializes from `[x, y]`, `[x, y, z]` or `{ "x": .., "y": .. }`; depth and
/// any extra object fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PointRepr")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair([f64; 2]),
    Triple([f64; 3]),
    Object { x: f64, y: f64 },
}

impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Pair([x, y]) | PointRepr::Triple([x, y, _]) => Point::new(x, y),
            PointRepr::Object { x, y } => Point::new(x, y),
        }
    }
}

/// Geometric measurements of a face, derived from a [`LandmarkSet`](crate::LandmarkSet).
///
/// Lengths are in the landmark coordinate space. `jaw_angle` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMeasurements {
    pub face_length: f64,
    pub forehead_width: f64,
    pub cheekbone_width: f64,
    pub jaw_width: f64,
    pub jaw_angle: f64,
    pub chin_shape: f64,
}

/// The six canonical face-shape archetypes, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeArchetype {
    Oval,
    Round,
    Square,
    Heart,
    Oblong,
    Diamond,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown face shape: {0:?}")]
pub struct UnknownShape(pub String);

impl ShapeArchetype {
    /// Every archetype in enumeration order.
    pub const ALL: [ShapeArchetype; 6] = [
        ShapeArchetype::Oval,
        ShapeArchetype::Round,
        ShapeArchetype::Square,
        ShapeArchetype::Heart,
        ShapeArchetype::Oblong,
        ShapeArchetype::Diamond,
    ];

    /// Position in [`ShapeArchetype::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShapeArchetype::Oval => "Oval",
            ShapeArchetype::Round => "Round",
            ShapeArchetype::Square => "Square",
            ShapeArchetype::Heart => "Heart",
            ShapeArchetype::Oblong => "Oblong",
            ShapeArchetype::Diamond => "Diamond",
        }
    }

    /// Short human-readable summary of the archetype's proportions.
    pub const fn description(self) -> &'static str {
        match self {
            ShapeArchetype::Oval => {
                "Balanced proportions: forehead slightly wider than the jawline, length about 1.5 times the width."
            }
            ShapeArchetype::Round => {
                "Soft angles and a curved jawline, with face length close to face width."
            }
            ShapeArchetype::Square => {
                "Strong angular jawline and broad forehead, with length and width roughly equal."
            }
            ShapeArchetype::Heart => {
                "Widest at the forehead, tapering to a narrow, sometimes pointed chin."
            }
            ShapeArchetype::Oblong => {
                "Noticeably longer than wide, with forehead, cheeks and jawline of similar width."
            }
            ShapeArchetype::Diamond => {
                "High, dramatic cheekbones as the widest point, with a narrower forehead and jawline."
            }
        }
    }
}

impl fmt::Display for ShapeArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeArchetype {
    type Err = UnknownShape;

    /// Case-insensitive match on the archetype label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ShapeArchetype::ALL
            .into_iter()
            .find(|shape| shape.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// One score per archetype, indexed in enumeration order.
///
/// Raw scorer output and normalized distributions share this type; only
/// [`normalize`](crate::normalize::normalize) produces values that sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeScores {
    values: [f64; 6],
}

impl ShapeScores {
    pub const fn from_array(values: [f64; 6]) -> Self {
        Self { values }
    }

    pub const fn zero() -> Self {
        Self { values: [0.0; 6] }
    }

    pub fn get(&self, shape: ShapeArchetype) -> f64 {
        self.values[shape.index()]
    }

    pub(crate) fn set(&mut self, shape: ShapeArchetype, value: f64) {
        self.values[shape.index()] = value;
    }

    pub fn as_array(&self) -> &[f64; 6] {
        &self.values
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// `(archetype, score)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeArchetype, f64)> + '_ {
        ShapeArchetype::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Pairs sorted by descending score. Equal scores keep enumeration order.
    pub fn ranked(&self) -> Vec<(ShapeArchetype, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// Score as a whole-number percentage, for display.
    pub fn percent(&self, shape: ShapeArchetype) -> u32 {
        (self.get(shape) * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

impl Serialize for ShapeScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (shape, score) in self.iter() {
            map.serialize_entry(shape.label(), &score)?;
        }
        map.end()
    }
}

/// Outcome of classifying one face.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub primary_shape: ShapeArchetype,
    /// Normalized distribution; sums to 1.
    pub scores: ShapeScores,
    pub tips: StyleTips,
    pub measurements: FaceMeasurements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_formats() {
        let pair: Point = serde_json::from_str("[0.25, 0.5]").unwrap();
        let triple: Point = serde_json::from_str("[0.25, 0.5, -0.03]").unwrap();
        let object: Point = serde_json::from_str(r#"{"x": 0.25, "y": 0.5, "z": 1.0, "name": "chin"}"#).unwrap();
        assert_eq!(pair, Point::new(0.25, 0.5));
        assert_eq!(triple, pair);
        assert_eq!(object, pair);
    }

    #[test]
    fn test_point_rejects_short_array() {
        assert!(serde_json::from_str::<Point>("[0.25]").is_err());
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(0.2, 0.4).midpoint(Point::new(0.6, 0.8));
        assert!((m.x - 0.4).abs() < 1e-12);
        assert!((m.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_archetype_order_matches_index() {
        for (i, shape) in ShapeArchetype::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
    }

    #[test]
    fn test_archetype_from_str_case_insensitive() {
        assert_eq!("oval".parse::<ShapeArchetype>(), Ok(ShapeArchetype::Oval));
        assert_eq!(" DIAMOND ".parse::<ShapeArchetype>(), Ok(ShapeArchetype::Diamond));
        assert_eq!(
            "triangle".parse::<ShapeArchetype>(),
            Err(UnknownShape("triangle".to_string()))
        );
    }

    #[test]
    fn test_scores_serialize_in_enumeration_order() {
        let scores = ShapeScores::from_array([0.5, 0.1, 0.1, 0.1, 0.1, 0.1]);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(
            json,
            r#"{"Oval":0.5,"Round":0.1,"Square":0.1,"Heart":0.1,"Oblong":0.1,"Diamond":0.1}"#
        );
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let scores = ShapeScores::from_array([0.1, 0.3, 0.1, 0.3, 0.1, 0.1]);
        let ranked: Vec<_> = scores.ranked().into_iter().map(|(s, _)| s).collect();
        assert_eq!(ranked[0], ShapeArchetype::Round);
        assert_eq!(ranked[1], ShapeArchetype::Heart);
        assert_eq!(ranked[2], ShapeArchetype::Oval);
    }

    #[test]
    fn test_percent_rounds() {
        let scores = ShapeScores::from_array([0.456, 0.544, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(scores.percent(ShapeArchetype::Oval), 46);
        assert_eq!(scores.percent(ShapeArchetype::Round), 54);
    }
}
