//! Boundary geometry index.
//!
//! The geo-countries dataset is a GeoJSON FeatureCollection whose features
//! carry an `ISO_A3` property. The atlas indexes features by that code so
//! the visualization layer can resolve a polygon with the same codes the
//! core uses. Features stay opaque JSON; nothing here interprets geometry.

use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Errors that can occur while indexing boundary geometry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeoError {
    /// The payload was not a FeatureCollection with a `features` array.
    #[display("boundary dataset is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
}

/// Country boundary features keyed by ISO alpha-3 code.
#[derive(Debug, Clone, Default)]
pub struct BoundaryAtlas {
    features: HashMap<String, Value>,
}

impl BoundaryAtlas {
    /// Indexes a FeatureCollection by each feature's `ISO_A3` property.
    /// Features without a usable code are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAFeatureCollection`] when the payload has no
    /// `features` array.
    #[instrument(skip(value))]
    pub fn from_feature_collection(value: Value) -> Result<Self, GeoError> {
        let Value::Object(mut obj) = value else {
            return Err(GeoError::NotAFeatureCollection);
        };
        let Some(Value::Array(raw_features)) = obj.remove("features") else {
            return Err(GeoError::NotAFeatureCollection);
        };

        let mut features = HashMap::new();
        let mut skipped = 0usize;
        for feature in raw_features {
            match feature
                .get("properties")
                .and_then(|p| p.get("ISO_A3"))
                .and_then(Value::as_str)
            {
                // The dataset marks unassigned territories with "-99".
                Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                    features.insert(code.to_uppercase(), feature);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "Boundary features without an ISO_A3 code");
        }
        info!(features = features.len(), "Boundary atlas indexed");
        Ok(Self { features })
    }

    /// The boundary feature for a country code, if the dataset has one.
    pub fn feature(&self, code: &str) -> Option<&Value> {
        self.features.get(code)
    }

    /// Number of indexed features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the atlas holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
