use serde::{Deserialize, Serialize};

use super::{InferenceError, Prediction};
use crate::decision::FEATURE_COUNT;

/// Fitted binary logistic regression over standardised features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    pub fn decision_function(&self, scaled: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(scaled)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept
    }

    /// Label `1` when the decision function is strictly positive.
    pub fn predict(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<Prediction, InferenceError> {
        let score = self.decision_function(scaled);
        if !score.is_finite() {
            return Err(InferenceError::NonFiniteScore);
        }

        Ok(Prediction {
            label: u8::from(score > 0.0),
            probability_approved: sigmoid(score),
        })
    }
}

fn sigmoid(score: f64) -> f64 {
    if score >= 0.0 {
        1.0 / (1.0 + (-score).exp())
    } else {
        let exp = score.exp();
        exp / (1.0 + exp)
    }
}
