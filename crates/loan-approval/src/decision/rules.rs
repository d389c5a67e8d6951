use serde::{Deserialize, Serialize};

use super::domain::{ApplicantInput, LoanRequest};
use super::policy::DecisionPolicy;

/// Suggestion shown next to any rejection.
pub const REJECTION_ADVICE: &str = "Improve credit score, reduce loan amount, or increase tenure";

/// Eligibility rules, declared in the order their reasons are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    IncomeBelowMinimum,
    CibilBelowMinimum,
    LoanTooHighForIncome,
    EmiExceedsIncomeShare,
}

impl RejectionReason {
    pub const fn message(self) -> &'static str {
        match self {
            RejectionReason::IncomeBelowMinimum => "Annual income below minimum threshold",
            RejectionReason::CibilBelowMinimum => "CIBIL score below minimum threshold",
            RejectionReason::LoanTooHighForIncome => "Loan amount too high relative to income",
            RejectionReason::EmiExceedsIncomeShare => "EMI exceeds 40% of monthly income",
        }
    }
}

/// Non-empty, ordered list of reasons an application failed the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    reasons: Vec<RejectionReason>,
}

impl Rejection {
    /// Returns `None` for an empty list; a rejection always has a reason.
    pub fn from_reasons(reasons: Vec<RejectionReason>) -> Option<Self> {
        if reasons.is_empty() {
            None
        } else {
            Some(Self { reasons })
        }
    }

    pub fn reasons(&self) -> &[RejectionReason] {
        &self.reasons
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|reason| reason.message()).collect()
    }

    pub fn advice(&self) -> &'static str {
        REJECTION_ADVICE
    }
}

/// Collect every failing rule. Rules are independent; none short-circuits another.
pub(crate) fn evaluate_rejection(
    applicant: &ApplicantInput,
    loan: &LoanRequest,
    emi: f64,
    policy: &DecisionPolicy,
) -> Vec<RejectionReason> {
    let mut reasons = Vec::new();

    if applicant.annual_income < policy.minimum_annual_income {
        reasons.push(RejectionReason::IncomeBelowMinimum);
    }

    if applicant.cibil_score < policy.minimum_cibil_score {
        reasons.push(RejectionReason::CibilBelowMinimum);
    }

    if loan.amount > applicant.annual_income * policy.max_loan_to_income_multiple {
        reasons.push(RejectionReason::LoanTooHighForIncome);
    }

    if emi > applicant.monthly_income() * policy.max_emi_to_income_ratio {
        reasons.push(RejectionReason::EmiExceedsIncomeShare);
    }

    reasons
}

/// Gate wrapper: `Err` carries the rejection, `Ok` means the model may be consulted.
pub(crate) fn check_eligibility(
    applicant: &ApplicantInput,
    loan: &LoanRequest,
    emi: f64,
    policy: &DecisionPolicy,
) -> Result<(), Rejection> {
    match Rejection::from_reasons(evaluate_rejection(applicant, loan, emi, policy)) {
        Some(rejection) => Err(rejection),
        None => Ok(()),
    }
}
