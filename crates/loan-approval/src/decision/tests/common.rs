use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::classifier::{Classifier, InferenceError, Prediction};
use crate::decision::{
    ApplicantInput, ApplicationForm, DecisionEngine, DecisionPolicy, Education, FeatureVector,
    LoanApplication, LoanRequest, SelfEmployed,
};

/// Test double that answers with a fixed prediction and counts invocations.
#[derive(Debug)]
pub(super) struct CountingClassifier {
    prediction: Prediction,
    calls: AtomicUsize,
}

impl CountingClassifier {
    pub(super) fn answering(label: u8, probability_approved: f64) -> Self {
        Self {
            prediction: Prediction {
                label,
                probability_approved,
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for CountingClassifier {
    fn scale_and_predict(&self, _features: &FeatureVector) -> Result<Prediction, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.prediction)
    }
}

/// Records the last vector it was given so encoding can be asserted end to end.
#[derive(Debug, Default)]
pub(super) struct RecordingClassifier {
    pub(super) seen: std::sync::Mutex<Option<FeatureVector>>,
}

impl Classifier for RecordingClassifier {
    fn scale_and_predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        *self.seen.lock().expect("recording mutex poisoned") = Some(*features);
        Ok(Prediction {
            label: 1,
            probability_approved: 0.9,
        })
    }
}

pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn scale_and_predict(&self, _features: &FeatureVector) -> Result<Prediction, InferenceError> {
        Err(InferenceError::Unavailable("model session closed".to_string()))
    }
}

/// Comfortable applicant that clears every eligibility rule.
pub(super) fn strong_applicant() -> ApplicantInput {
    ApplicantInput {
        dependents: 2,
        education: Education::Graduated,
        self_employed: SelfEmployed::No,
        annual_income: 1_800_000.0,
        total_assets: 6_500_000.0,
        cibil_score: 812,
    }
}

pub(super) fn modest_loan() -> LoanRequest {
    LoanRequest {
        amount: 1_000_000.0,
        tenure_years: 10,
    }
}

pub(super) fn strong_application() -> LoanApplication {
    LoanApplication {
        applicant: strong_applicant(),
        loan: modest_loan(),
    }
}

/// Fails all four rules at once.
pub(super) fn weak_application() -> LoanApplication {
    LoanApplication {
        applicant: ApplicantInput {
            dependents: 3,
            education: Education::NotGraduated,
            self_employed: SelfEmployed::Yes,
            annual_income: 200_000.0,
            total_assets: 400_000.0,
            cibil_score: 600,
        },
        loan: LoanRequest {
            amount: 2_000_000.0,
            tenure_years: 5,
        },
    }
}

pub(super) fn form() -> ApplicationForm {
    ApplicationForm::from(strong_application())
}

pub(super) fn engine_with<C: Classifier>(classifier: Arc<C>) -> DecisionEngine<C> {
    DecisionEngine::new(classifier, DecisionPolicy::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
