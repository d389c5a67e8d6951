//! Boundary to the pre-trained approval model.
//!
//! The engine only sees the [`Classifier`] trait. [`ArtifactClassifier`] is the
//! production implementation: a fitted standard scaler followed by a logistic
//! regression, both read once from JSON artifacts and never mutated afterwards.

mod artifacts;
mod logistic;
mod scaler;

pub use artifacts::{ArtifactClassifier, ArtifactLoadError, MODEL_FILE, SCALER_FILE};
pub use logistic::LogisticModel;
pub use scaler::StandardScaler;

use serde::{Deserialize, Serialize};

use crate::decision::FeatureVector;

/// Raw model answer for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// `1` for approve, `0` otherwise.
    pub label: u8,
    /// Probability of the approve class, in `[0, 1]`.
    pub probability_approved: f64,
}

/// Scales an encoded application and runs inference on it.
///
/// Implementations are shared read-only across concurrent evaluations.
pub trait Classifier: Send + Sync {
    fn scale_and_predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError>;
}

/// Inference fault for a single evaluation. Never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("feature '{feature}' is not a finite number")]
    NonFiniteFeature { feature: &'static str },
    #[error("model produced a non-finite score")]
    NonFiniteScore,
    #[error("classifier returned unexpected label {0}")]
    UnexpectedLabel(u8),
    #[error("classifier returned probability {0} outside [0, 1]")]
    InvalidProbability(f64),
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
