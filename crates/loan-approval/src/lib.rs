//! Loan approval decisions: installment calculation, eligibility rules, and a
//! classifier-backed verdict with a heuristic risk tier.

pub mod classifier;
pub mod config;
pub mod decision;
pub mod error;
pub mod router;
pub mod telemetry;

pub use classifier::{ArtifactClassifier, ArtifactLoadError, Classifier, InferenceError, Prediction};
pub use decision::{
    ApplicationForm, DecisionEngine, DecisionPolicy, DecisionResult, InputViolation,
    LoanApplication,
};
pub use router::decision_router;
