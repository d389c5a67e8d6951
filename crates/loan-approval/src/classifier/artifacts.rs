use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::logistic::LogisticModel;
use super::scaler::StandardScaler;
use super::{Classifier, InferenceError, Prediction};
use crate::decision::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// Startup failure while reading the fitted scaler or model.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("unable to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{artifact} declares {found} {field}, expected {expected}")]
    Shape {
        artifact: &'static str,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("scaler feature order {found:?} does not match the encoder")]
    FeatureOrder { found: Vec<String> },
    #[error("{artifact} contains non-finite parameters")]
    NonFinite { artifact: &'static str },
}

/// Scaler and model loaded once at startup and shared immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactClassifier {
    scaler: StandardScaler,
    model: LogisticModel,
}

impl ArtifactClassifier {
    /// Validate parameter shapes against the feature encoder.
    pub fn new(scaler: StandardScaler, model: LogisticModel) -> Result<Self, ArtifactLoadError> {
        let names_match = scaler.feature_names.len() == FEATURE_COUNT
            && scaler
                .feature_names
                .iter()
                .zip(FEATURE_NAMES)
                .all(|(declared, expected)| declared == expected);
        if !names_match {
            return Err(ArtifactLoadError::FeatureOrder {
                found: scaler.feature_names,
            });
        }

        expect_len(SCALER_FILE, "means", scaler.mean.len())?;
        expect_len(SCALER_FILE, "scales", scaler.scale.len())?;
        expect_len(MODEL_FILE, "coefficients", model.coefficients.len())?;

        if !scaler.mean.iter().chain(&scaler.scale).all(|v| v.is_finite()) {
            return Err(ArtifactLoadError::NonFinite {
                artifact: SCALER_FILE,
            });
        }
        if !model.coefficients.iter().all(|v| v.is_finite()) || !model.intercept.is_finite() {
            return Err(ArtifactLoadError::NonFinite {
                artifact: MODEL_FILE,
            });
        }

        Ok(Self { scaler, model })
    }

    /// Read `scaler.json` and `model.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ArtifactLoadError> {
        let dir = dir.as_ref();
        let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
        let model: LogisticModel = read_json(&dir.join(MODEL_FILE))?;
        let classifier = Self::new(scaler, model)?;

        info!(artifacts = %dir.display(), features = FEATURE_COUNT, "classifier artifacts loaded");
        Ok(classifier)
    }
}

impl Classifier for ArtifactClassifier {
    fn scale_and_predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        let scaled = self.scaler.transform(features)?;
        self.model.predict(&scaled)
    }
}

fn expect_len(
    artifact: &'static str,
    field: &'static str,
    found: usize,
) -> Result<(), ArtifactLoadError> {
    if found == FEATURE_COUNT {
        Ok(())
    } else {
        Err(ArtifactLoadError::Shape {
            artifact,
            field,
            expected: FEATURE_COUNT,
            found,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
