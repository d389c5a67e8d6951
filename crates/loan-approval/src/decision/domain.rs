use serde::{Deserialize, Serialize};

/// Highest education level declared on the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "Graduated", alias = "graduated")]
    Graduated,
    #[serde(
        rename = "Not Graduated",
        alias = "NotGraduated",
        alias = "not_graduated"
    )]
    NotGraduated,
}

/// Self-employment answer exactly as the form offers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfEmployed {
    #[serde(rename = "Yes", alias = "yes")]
    Yes,
    #[serde(rename = "No", alias = "no")]
    No,
}

/// Applicant attributes that have already passed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub dependents: u8,
    pub education: Education,
    pub self_employed: SelfEmployed,
    pub annual_income: f64,
    pub total_assets: f64,
    pub cibil_score: u16,
}

impl ApplicantInput {
    pub fn monthly_income(&self) -> f64 {
        self.annual_income / 12.0
    }
}

/// Requested principal and repayment horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: f64,
    pub tenure_years: u8,
}

/// A validated application, ready to be handed to the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant: ApplicantInput,
    pub loan: LoanRequest,
}
