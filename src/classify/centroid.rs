//! Nearest-Centroid Pose Model
//!
//! A minimal stand-in for the trained neural classifier: each alphabet class
//! is represented by one template feature vector (the centroid of its
//! training examples), and classification picks the class with the smallest
//! squared Euclidean distance. Templates are loaded from a JSON file.

use crate::alphabet::Symbol;
use crate::classify::SymbolClassifier;
use crate::landmark::FeatureVector;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One class template as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidTemplate {
    /// The symbol this template classifies to
    pub symbol: char,
    /// Centroid feature vector (same width as the normalizer's output)
    pub features: Vec<f32>,
}

/// Nearest-centroid classifier over per-class template vectors.
#[derive(Debug, Clone)]
pub struct CentroidModel {
    templates: Vec<(Symbol, Vec<f32>)>,
    width: usize,
}

impl CentroidModel {
    /// Build from templates, validating that every template has the expected
    /// feature width and that no class appears twice. A width mismatch is a
    /// fatal configuration error, not a per-frame condition.
    pub fn from_templates(templates: Vec<CentroidTemplate>, expected_width: usize) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::Config("centroid model has no templates".to_string()));
        }
        let mut seen = Vec::with_capacity(templates.len());
        for t in &templates {
            if t.features.len() != expected_width {
                return Err(Error::Config(format!(
                    "template '{}' has width {}, classifier expects {}",
                    t.symbol,
                    t.features.len(),
                    expected_width
                )));
            }
            if seen.contains(&t.symbol) {
                return Err(Error::Config(format!(
                    "duplicate template for symbol '{}'",
                    t.symbol
                )));
            }
            seen.push(t.symbol);
        }
        Ok(Self {
            templates: templates
                .into_iter()
                .map(|t| (Symbol(t.symbol), t.features))
                .collect(),
            width: expected_width,
        })
    }

    /// Load templates from a JSON file
    pub fn load(path: impl AsRef<Path>, expected_width: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let templates: Vec<CentroidTemplate> = serde_json::from_str(&content)?;
        Self::from_templates(templates, expected_width)
    }

    /// Check that every template's symbol belongs to the configured
    /// alphabet. A model emitting symbols outside the alphabet is a fatal
    /// configuration mismatch.
    pub fn validate_alphabet(&self, alphabet: &crate::alphabet::Alphabet) -> Result<()> {
        for (symbol, _) in &self.templates {
            if alphabet.position(*symbol).is_none() {
                return Err(Error::Config(format!(
                    "model symbol '{}' is not in the configured alphabet",
                    symbol
                )));
            }
        }
        Ok(())
    }

    /// Trained feature width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of classes
    pub fn class_count(&self) -> usize {
        self.templates.len()
    }

    fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    }
}

impl SymbolClassifier for CentroidModel {
    fn classify(&self, features: &FeatureVector) -> Symbol {
        // templates are non-empty by construction
        self.templates
            .iter()
            .min_by(|(_, a), (_, b)| {
                let da = Self::squared_distance(a, features.values());
                let db = Self::squared_distance(b, features.values());
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(sym, _)| *sym)
            .expect("centroid model has at least one template")
    }

    fn feature_width(&self) -> Option<usize> {
        Some(self.width)
    }
}
