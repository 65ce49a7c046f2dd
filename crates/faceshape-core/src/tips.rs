//! Style recommendations per face shape.
//!
//! The built-in catalog is embedded at compile time from
//! `data/style_tips.toml` and parsed once. Custom catalogs use the same format.
//! Any shape a catalog does not cover resolves to the generic tip set.

use crate::types::{ShapeArchetype, UnknownShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

const BUILTIN_TIPS: &str = include_str!("../data/style_tips.toml");

static BUILTIN_CATALOG: OnceLock<StyleCatalog> = OnceLock::new();

const GENERIC_HAIRSTYLES: [&str; 3] = [
    "Focus on hairstyles that complement your unique facial features.",
    "Consider face-framing layers to enhance your features.",
    "Consult with a professional stylist for personalized recommendations.",
];
const GENERIC_GLASSES: [&str; 3] = [
    "Choose eyewear that balances your face proportions.",
    "Look for frames that complement your facial symmetry.",
    "Try multiple styles to find what suits your face best.",
];
const GENERIC_MAKEUP: [&str; 3] = [
    "Use techniques that enhance your natural features.",
    "Experiment with different contouring techniques to find what works best.",
    "Highlight your favorite facial features to draw attention to them.",
];

/// Hairstyle, eyewear and makeup suggestions for one face shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleTips {
    pub hairstyles: Vec<String>,
    pub glasses: Vec<String>,
    pub makeup: Vec<String>,
}

impl StyleTips {
    /// Shape-agnostic suggestions.
    pub fn generic() -> Self {
        let owned =
            |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            hairstyles: owned(&GENERIC_HAIRSTYLES),
            glasses: owned(&GENERIC_GLASSES),
            makeup: owned(&GENERIC_MAKEUP),
        }
    }

    /// Name of the first empty list, if any.
    fn first_empty(&self) -> Option<&'static str> {
        [
            ("hairstyles", &self.hairstyles),
            ("glasses", &self.glasses),
            ("makeup", &self.makeup),
        ]
        .into_iter()
        .find(|(_, list)| list.is_empty() || list.iter().all(|tip| tip.trim().is_empty()))
        .map(|(name, _)| name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read style catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid style catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("style catalog: {0}")]
    UnknownShape(#[from] UnknownShape),
    #[error("style catalog: {shape} has no {list}")]
    EmptyList {
        shape: ShapeArchetype,
        list: &'static str,
    },
}

/// Lookup table from face shape to style tips.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalog {
    entries: BTreeMap<ShapeArchetype, StyleTips>,
    fallback: StyleTips,
}

impl StyleCatalog {
    /// Catalog with no shape entries; every lookup yields the generic set.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: StyleTips::generic(),
        }
    }

    /// Parse a catalog from TOML with one table per shape label.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, StyleTips> = toml::from_str(src)?;
        let mut entries = BTreeMap::new();
        for (label, tips) in raw {
            let shape: ShapeArchetype = label.parse()?;
            if let Some(list) = tips.first_empty() {
                return Err(CatalogError::EmptyList { shape, list });
            }
            entries.insert(shape, tips);
        }
        Ok(Self {
            entries,
            fallback: StyleTips::generic(),
        })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src)?;
        tracing::info!(
            path = %path.display(),
            shapes = catalog.entries.len(),
            "loaded style catalog"
        );
        Ok(catalog)
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static StyleCatalog {
        BUILTIN_CATALOG.get_or_init(|| match Self::from_toml_str(BUILTIN_TIPS) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "built-in style catalog is invalid, using generic tips");
                Self::empty()
            }
        })
    }

    pub fn tips(&self, shape: ShapeArchetype) -> &StyleTips {
        self.entries.get(&shape).unwrap_or(&self.fallback)
    }

    /// Tips for a shape label; unknown labels get the generic set.
    pub fn tips_for_label(&self, label: &str) -> &StyleTips {
        match label.parse::<ShapeArchetype>() {
            Ok(shape) => self.tips(shape),
            Err(_) => &self.fallback,
        }
    }

    pub fn fallback(&self) -> &StyleTips {
        &self.fallback
    }

    /// Whether the catalog has its own entry for `shape`.
    pub fn covers(&self, shape: ShapeArchetype) -> bool {
        self.entries.contains_key(&shape)
    }
}

/// Built-in tips for a face shape.
pub fn style_tips(shape: ShapeArchetype) -> &'static StyleTips {
    StyleCatalog::builtin().tips(shape)
}

/// Built-in tips for a shape label, falling back to the generic set.
pub fn tips_for_label(label: &str) -> &'static StyleTips {
    StyleCatalog::builtin().tips_for_label(label)
}
