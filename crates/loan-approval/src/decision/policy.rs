use serde::{Deserialize, Serialize};

use super::emi::DEFAULT_ANNUAL_INTEREST_RATE;

/// Thresholds backing the eligibility gate and the risk heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    pub annual_interest_rate: f64,
    pub minimum_annual_income: f64,
    pub minimum_cibil_score: u16,
    pub max_loan_to_income_multiple: f64,
    pub max_emi_to_income_ratio: f64,
    pub low_risk_cibil_score: u16,
    pub low_risk_emi_to_income_ratio: f64,
    pub medium_risk_cibil_score: u16,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            annual_interest_rate: DEFAULT_ANNUAL_INTEREST_RATE,
            minimum_annual_income: 300_000.0,
            minimum_cibil_score: 650,
            max_loan_to_income_multiple: 5.0,
            max_emi_to_income_ratio: 0.4,
            low_risk_cibil_score: 750,
            low_risk_emi_to_income_ratio: 0.3,
            medium_risk_cibil_score: 700,
        }
    }
}
