//! Landmark sets and the semantic roles the extractor reads from them.
//!
//! Indices refer to the 468-point canonical face mesh. This table is the only
//! place in the crate that knows the detector's point ordering.

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points in a full canonical face mesh.
pub const CANONICAL_MESH_POINTS: usize = 468;

/// A semantically fixed position on the face mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkRole {
    ForeheadTop,
    ChinBottom,
    ForeheadLeft,
    ForeheadRight,
    CheekboneLeft,
    CheekboneRight,
    JawLeft,
    JawRight,
    EarLeft,
    EarRight,
    ChinLeft,
    ChinRight,
}

impl LandmarkRole {
    pub const ALL: [LandmarkRole; 12] = [
        LandmarkRole::ForeheadTop,
        LandmarkRole::ChinBottom,
        LandmarkRole::ForeheadLeft,
        LandmarkRole::ForeheadRight,
        LandmarkRole::CheekboneLeft,
        LandmarkRole::CheekboneRight,
        LandmarkRole::JawLeft,
        LandmarkRole::JawRight,
        LandmarkRole::EarLeft,
        LandmarkRole::EarRight,
        LandmarkRole::ChinLeft,
        LandmarkRole::ChinRight,
    ];

    /// Mesh index for this role.
    pub const fn index(self) -> usize {
        match self {
            LandmarkRole::ForeheadTop => 10,
            LandmarkRole::ChinBottom => 152,
            LandmarkRole::ForeheadLeft => 54,
            LandmarkRole::ForeheadRight => 284,
            LandmarkRole::CheekboneLeft => 123,
            LandmarkRole::CheekboneRight => 352,
            LandmarkRole::JawLeft => 172,
            LandmarkRole::JawRight => 397,
            LandmarkRole::EarLeft => 234,
            LandmarkRole::EarRight => 454,
            LandmarkRole::ChinLeft => 148,
            LandmarkRole::ChinRight => 377,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LandmarkRole::ForeheadTop => "forehead top",
            LandmarkRole::ChinBottom => "chin bottom",
            LandmarkRole::ForeheadLeft => "forehead left",
            LandmarkRole::ForeheadRight => "forehead right",
            LandmarkRole::CheekboneLeft => "cheekbone left",
            LandmarkRole::CheekboneRight => "cheekbone right",
            LandmarkRole::JawLeft => "jaw left",
            LandmarkRole::JawRight => "jaw right",
            LandmarkRole::EarLeft => "ear left",
            LandmarkRole::EarRight => "ear right",
            LandmarkRole::ChinLeft => "chin left",
            LandmarkRole::ChinRight => "chin right",
        }
    }
}

impl fmt::Display for LandmarkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered landmark points for one detected face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// The point at a semantic role, if the set is long enough to contain it.
    pub fn role(&self, role: LandmarkRole) -> Option<Point> {
        self.get(role.index())
    }

    /// Parse a landmark document.
    ///
    /// Accepts a bare point array, or an object carrying the points under
    /// `landmarks`, `keypoints`, `scaledMesh` or `mesh`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let doc: LandmarkDocument = serde_json::from_str(json)?;
        let points = match doc {
            LandmarkDocument::Bare(points) => points,
            LandmarkDocument::Wrapped { landmarks } => landmarks,
        };
        Ok(Self::new(points))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkDocument {
    Bare(Vec<Point>),
    Wrapped {
        #[serde(alias = "keypoints", alias = "scaledMesh", alias = "mesh")]
        landmarks: Vec<Point>,
    },
}
