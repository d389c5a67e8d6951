use serde::{Deserialize, Serialize};

use super::domain::{ApplicantInput, Education, LoanApplication, LoanRequest, SelfEmployed};

pub const DEPENDENTS_RANGE: (i64, i64) = (0, 5);
pub const CIBIL_RANGE: (i64, i64) = (300, 900);
pub const TENURE_RANGE: (i64, i64) = (1, 20);

/// Validation errors raised before an application reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputViolation {
    #[error("{field} must be between {min} and {max} (found {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{field} must not be negative (found {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Raw form payload as collected from a person, before any range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub dependents: i64,
    pub education: Education,
    pub self_employed: SelfEmployed,
    pub annual_income: f64,
    pub total_assets: f64,
    pub cibil_score: i64,
    pub loan_amount: f64,
    pub tenure_years: i64,
}

impl ApplicationForm {
    /// Check every documented domain and convert into a typed application.
    ///
    /// Checks run in form order and stop at the first offending field.
    pub fn validate(&self) -> Result<LoanApplication, InputViolation> {
        let dependents = ranged("dependents", self.dependents, DEPENDENTS_RANGE)?;
        let annual_income = amount("annual_income", self.annual_income)?;
        let total_assets = amount("total_assets", self.total_assets)?;
        let cibil_score = ranged("cibil_score", self.cibil_score, CIBIL_RANGE)?;
        let loan_amount = amount("loan_amount", self.loan_amount)?;
        let tenure_years = ranged("tenure_years", self.tenure_years, TENURE_RANGE)?;

        Ok(LoanApplication {
            applicant: ApplicantInput {
                dependents,
                education: self.education,
                self_employed: self.self_employed,
                annual_income,
                total_assets,
                cibil_score,
            },
            loan: LoanRequest {
                amount: loan_amount,
                tenure_years,
            },
        })
    }
}

impl From<LoanApplication> for ApplicationForm {
    fn from(application: LoanApplication) -> Self {
        let LoanApplication { applicant, loan } = application;
        Self {
            dependents: i64::from(applicant.dependents),
            education: applicant.education,
            self_employed: applicant.self_employed,
            annual_income: applicant.annual_income,
            total_assets: applicant.total_assets,
            cibil_score: i64::from(applicant.cibil_score),
            loan_amount: loan.amount,
            tenure_years: i64::from(loan.tenure_years),
        }
    }
}

fn ranged<T>(field: &'static str, value: i64, (min, max): (i64, i64)) -> Result<T, InputViolation>
where
    T: TryFrom<i64>,
{
    if !(min..=max).contains(&value) {
        return Err(InputViolation::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    T::try_from(value).map_err(|_| InputViolation::OutOfRange {
        field,
        value,
        min,
        max,
    })
}

fn amount(field: &'static str, value: f64) -> Result<f64, InputViolation> {
    if !value.is_finite() {
        return Err(InputViolation::NonFinite { field });
    }
    if value < 0.0 {
        return Err(InputViolation::NegativeAmount { field, value });
    }
    Ok(value)
}
