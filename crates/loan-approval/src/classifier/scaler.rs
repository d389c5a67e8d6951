use serde::{Deserialize, Serialize};

use super::InferenceError;
use crate::decision::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Fitted per-feature standardisation: `z = (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn transform(
        &self,
        features: &FeatureVector,
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        let mut scaled = [0.0; FEATURE_COUNT];

        for (index, ((slot, value), name)) in scaled
            .iter_mut()
            .zip(features.values())
            .zip(FEATURE_NAMES)
            .enumerate()
        {
            if !value.is_finite() {
                return Err(InferenceError::NonFiniteFeature { feature: name });
            }
            let mean = self.mean.get(index).copied().unwrap_or(0.0);
            let scale = match self.scale.get(index).copied() {
                // Constant columns were fitted with zero variance; leave them unscaled.
                Some(scale) if scale != 0.0 => scale,
                _ => 1.0,
            };
            *slot = (value - mean) / scale;
        }

        Ok(scaled)
    }
}
