//! Loan decision pipeline: installment, eligibility gate, model verdict, risk tier.
//!
//! The engine holds no mutable state. Every call to [`DecisionEngine::evaluate`]
//! works on its own copy of the application and only reads the shared classifier.

pub mod domain;
mod emi;
mod features;
mod intake;
mod outcome;
mod policy;
mod risk;
mod rules;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{ApplicantInput, Education, LoanApplication, LoanRequest, SelfEmployed};
pub use emi::{compute_emi, displayed_emi, DEFAULT_ANNUAL_INTEREST_RATE};
pub use features::{encode, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use intake::{ApplicationForm, InputViolation};
pub use outcome::{DecisionResult, Verdict};
pub use policy::DecisionPolicy;
pub use risk::{credit_meter, derive_risk, CreditBand, RiskTier};
pub use rules::{Rejection, RejectionReason, REJECTION_ADVICE};
pub use view::DecisionView;

use std::sync::Arc;

use tracing::{debug, info};

use crate::classifier::{Classifier, InferenceError, Prediction};

/// Sequences the gate and the classifier for one application at a time.
pub struct DecisionEngine<C> {
    classifier: Arc<C>,
    policy: DecisionPolicy,
}

impl<C: Classifier> DecisionEngine<C> {
    pub fn new(classifier: Arc<C>, policy: DecisionPolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// Installment at the configured rate, at full precision.
    pub fn emi_for(&self, loan: &LoanRequest) -> f64 {
        compute_emi(loan.amount, loan.tenure_years, self.policy.annual_interest_rate)
    }

    /// Run the full pipeline. The classifier is only consulted once every
    /// eligibility rule has passed.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<DecisionResult, InferenceError> {
        let LoanApplication { applicant, loan } = application;
        let emi = self.emi_for(loan);

        if let Err(rejection) = rules::check_eligibility(applicant, loan, emi, &self.policy) {
            info!(
                reasons = rejection.reasons().len(),
                cibil_score = applicant.cibil_score,
                "application rejected by eligibility gate"
            );
            return Ok(DecisionResult::Rejected(rejection));
        }

        let features = encode(applicant, loan);
        let prediction = self.classifier.scale_and_predict(&features)?;
        let Prediction {
            label,
            probability_approved,
        } = checked(prediction)?;
        debug!(label, probability_approved, "classifier responded");

        let verdict = Verdict::from_label(label);
        let risk_tier = derive_risk(
            applicant.cibil_score,
            emi,
            applicant.monthly_income(),
            &self.policy,
        );

        info!(?verdict, ?risk_tier, "application evaluated by classifier");

        Ok(DecisionResult::Evaluated {
            verdict,
            confidence_percent: probability_approved * 100.0,
            risk_tier,
            estimated_emi: displayed_emi(emi),
        })
    }
}

fn checked(prediction: Prediction) -> Result<Prediction, InferenceError> {
    if prediction.label > 1 {
        return Err(InferenceError::UnexpectedLabel(prediction.label));
    }
    if !(0.0..=1.0).contains(&prediction.probability_approved) {
        return Err(InferenceError::InvalidProbability(
            prediction.probability_approved,
        ));
    }
    Ok(prediction)
}
