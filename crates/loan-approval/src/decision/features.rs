use serde::Serialize;

use super::domain::{ApplicantInput, Education, LoanRequest, SelfEmployed};

pub const FEATURE_COUNT: usize = 8;

/// Column names the fitted scaler and model were trained on, in input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "no_of_dependents",
    "education",
    "self_employed",
    "income_annum",
    "loan_amount",
    "loan_term",
    "cibil_score",
    "Assets",
];

/// Unscaled model input. The order of the array matches [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl Education {
    pub const fn code(self) -> f64 {
        match self {
            Education::Graduated => 0.0,
            Education::NotGraduated => 1.0,
        }
    }
}

impl SelfEmployed {
    pub const fn code(self) -> f64 {
        match self {
            SelfEmployed::No => 0.0,
            SelfEmployed::Yes => 1.0,
        }
    }
}

pub fn encode(applicant: &ApplicantInput, loan: &LoanRequest) -> FeatureVector {
    FeatureVector([
        f64::from(applicant.dependents),
        applicant.education.code(),
        applicant.self_employed.code(),
        applicant.annual_income,
        loan.amount,
        f64::from(loan.tenure_years),
        f64::from(applicant.cibil_score),
        applicant.total_assets,
    ])
}
